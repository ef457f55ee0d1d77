use crate::error::{Result, ShelfError};
use std::fmt;
use std::str::FromStr;

/// A catalog record. Equality is structural over all four fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            isbn: isbn.into(),
        }
    }

    /// A book rebuilt from a persisted borrowed-list entry. Only the title survives.
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self::new(title, "", "", "")
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn describe(&self) -> String {
        format!(
            "Title: {}, Author: {}, Genre: {}, ISBN: {}",
            self.title, self.author, self.genre, self.isbn
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserType {
    Student,
    Staff,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Staff => "staff",
        }
    }

    /// Persisted records are not validated: anything but "student" is staff.
    pub fn from_persisted(s: &str) -> Self {
        if s == "student" {
            UserType::Student
        } else {
            UserType::Staff
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "student" => Ok(UserType::Student),
            "staff" => Ok(UserType::Staff),
            _ => Err(ShelfError::InvalidUserType(s.to_string())),
        }
    }
}

/// A star rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(ShelfError::InvalidRating(value.to_string()))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl FromStr for Rating {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ShelfError::InvalidRating(s.to_string()))?;
        Rating::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    Borrowed,
    AlreadyBorrowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned,
    NotBorrowed,
}

/// A registered borrower. Students and staff differ only in their role tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub id: String,
    pub user_type: UserType,
    pub borrowed_books: Vec<Book>,
    pub activity_log: Vec<String>,
}

impl User {
    pub fn new(name: impl Into<String>, id: impl Into<String>, user_type: UserType) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            user_type,
            borrowed_books: Vec::new(),
            activity_log: Vec::new(),
        }
    }

    pub fn student(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(name, id, UserType::Student)
    }

    pub fn staff(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(name, id, UserType::Staff)
    }

    pub fn describe(&self) -> String {
        match self.user_type {
            UserType::Student => format!("Student Name: {}, ID: {}", self.name, self.id),
            UserType::Staff => format!("Staff Name: {}, ID: {}", self.name, self.id),
        }
    }

    pub fn has_borrowed(&self, book: &Book) -> bool {
        self.borrowed_books.contains(book)
    }

    pub fn borrow(&mut self, book: &Book) -> BorrowOutcome {
        if self.has_borrowed(book) {
            return BorrowOutcome::AlreadyBorrowed;
        }
        self.borrowed_books.push(book.clone());
        self.activity_log.push(format!("Borrowed {}", book.title()));
        BorrowOutcome::Borrowed
    }

    pub fn return_book(&mut self, book: &Book) -> ReturnOutcome {
        match self.borrowed_books.iter().position(|b| b == book) {
            Some(pos) => {
                self.borrowed_books.remove(pos);
                self.activity_log.push(format!("Returned {}", book.title()));
                ReturnOutcome::Returned
            }
            None => ReturnOutcome::NotBorrowed,
        }
    }

    pub fn reserve(&mut self, book: &Book) {
        self.activity_log.push(format!("Reserved {}", book.title()));
    }

    pub fn rate(&mut self, book: &Book, rating: Rating) {
        self.activity_log
            .push(format!("Rated {} with {} stars", book.title(), rating));
    }

    /// First held book whose title matches case-insensitively.
    pub fn find_borrowed(&self, title: &str) -> Option<&Book> {
        let wanted = title.to_lowercase();
        self.borrowed_books
            .iter()
            .find(|b| b.title.to_lowercase() == wanted)
    }
}

/// The administrator identity. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub username: String,
    pub password: String,
}

impl Admin {
    pub const ID: &'static str = "ADMIN";

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn id(&self) -> &'static str {
        Self::ID
    }

    pub fn describe(&self) -> String {
        format!("Admin Username: {}", self.username)
    }
}
