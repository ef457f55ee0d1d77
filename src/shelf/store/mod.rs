//! # Storage Layer
//!
//! The [`DataStore`] trait loads and saves the whole library as one document. There is
//! no incremental persistence: every save overwrites everything.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in a single JSON file
//! - [`memory::InMemoryStore`]: keeps the last saved document in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "books": [ { "title", "author", "genre", "isbn" }, ... ],
//!   "users": [ { "name", "user_id", "user_type",
//!                "borrowed_books": [ "<title>", ... ],
//!                "activity_log": [ "<entry>", ... ] }, ... ]
//! }
//! ```
//!
//! Borrowed books are stored by title only, so loading rebuilds them as placeholder
//! books with empty author, genre and ISBN.

use crate::error::Result;
use crate::model::{Book, User, UserType};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryData {
    #[serde(default)]
    pub books: Vec<BookRecord>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub user_id: String,
    #[serde(deserialize_with = "any_user_type")]
    pub user_type: String,
    pub borrowed_books: Vec<String>,
    pub activity_log: Vec<String>,
}

/// Accepts any JSON value for `user_type`. Non-strings keep their JSON text, which
/// [`UserType::from_persisted`] then reads as staff.
fn any_user_type<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            isbn: book.isbn.clone(),
        }
    }
}

impl From<BookRecord> for Book {
    fn from(r: BookRecord) -> Self {
        Book::new(r.title, r.author, r.genre, r.isbn)
    }
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            user_id: user.id.clone(),
            user_type: user.user_type.to_string(),
            borrowed_books: user.borrowed_books.iter().map(|b| b.title.clone()).collect(),
            activity_log: user.activity_log.clone(),
        }
    }
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        let mut user = User::new(r.name, r.user_id, UserType::from_persisted(&r.user_type));
        user.borrowed_books = r.borrowed_books.into_iter().map(Book::placeholder).collect();
        user.activity_log = r.activity_log;
        user
    }
}

impl LibraryData {
    pub fn from_parts(books: &[Book], users: &[User]) -> Self {
        Self {
            books: books.iter().map(BookRecord::from).collect(),
            users: users.iter().map(UserRecord::from).collect(),
        }
    }

    pub fn into_parts(self) -> (Vec<Book>, Vec<User>) {
        (
            self.books.into_iter().map(Book::from).collect(),
            self.users.into_iter().map(User::from).collect(),
        )
    }
}

/// Abstract interface for library persistence.
pub trait DataStore {
    /// Load the persisted document. A store with nothing saved yields an empty document.
    fn load(&self) -> Result<LibraryData>;

    /// Overwrite the persisted document.
    fn save(&mut self, data: &LibraryData) -> Result<()>;

    /// Human readable location, for logs.
    fn location(&self) -> String;
}
