//! # Library Store
//!
//! [`Library`] owns the catalog (`books`) and the registered users, both kept in
//! insertion order, plus the [`DataStore`] they are persisted to. It is the only
//! place where state changes, and every change is followed by a full re-save.
//!
//! Lookups are linear scans. Neither ISBNs nor user ids are checked for
//! uniqueness: adding a duplicate simply appends another entry, and lookups return
//! the first match.

use crate::error::{Result, ShelfError};
use crate::model::{Book, BorrowOutcome, Rating, ReturnOutcome, User};
use crate::store::{DataStore, LibraryData};
use tracing::{debug, info};

pub struct Library<S: DataStore> {
    store: S,
    books: Vec<Book>,
    users: Vec<User>,
}

impl<S: DataStore> Library<S> {
    /// Builds the library from whatever the store holds. An empty store is not an error;
    /// a malformed one is.
    pub fn open(store: S) -> Result<Self> {
        let (books, users) = store.load()?.into_parts();
        debug!(
            location = %store.location(),
            books = books.len(),
            users = users.len(),
            "library loaded"
        );
        Ok(Self {
            store,
            books,
            users,
        })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&mut self) -> Result<()> {
        let data = LibraryData::from_parts(&self.books, &self.users);
        self.store.save(&data)?;
        debug!(
            location = %self.store.location(),
            books = self.books.len(),
            users = self.users.len(),
            "library saved"
        );
        Ok(())
    }

    pub fn add_book(&mut self, book: Book) -> Result<()> {
        info!(isbn = %book.isbn, title = %book.title, "adding book");
        self.books.push(book);
        self.save()
    }

    /// Removes the first book with `isbn`. Nothing is saved when no book matches.
    pub fn remove_book(&mut self, isbn: &str) -> Result<Book> {
        let pos = self
            .books
            .iter()
            .position(|b| b.isbn == isbn)
            .ok_or_else(|| ShelfError::IsbnNotFound(isbn.to_string()))?;
        let removed = self.books.remove(pos);
        info!(isbn, title = %removed.title, "removed book");
        self.save()?;
        Ok(removed)
    }

    pub fn add_user(&mut self, user: User) -> Result<()> {
        info!(id = %user.id, user_type = %user.user_type, "adding user");
        self.users.push(user);
        self.save()
    }

    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn user_mut(&mut self, id: &str) -> Result<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| ShelfError::UserNotFound(id.to_string()))
    }

    pub fn has_book_with_isbn(&self, isbn: &str) -> bool {
        self.books.iter().any(|b| b.isbn == isbn)
    }

    /// First catalog book whose title equals `title`, ignoring case.
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        let wanted = title.to_lowercase();
        self.books.iter().find(|b| b.title.to_lowercase() == wanted)
    }

    /// Books whose title contains `query`, ignoring case, in catalog order.
    pub fn search_books(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .collect()
    }

    fn catalog_book(&self, title: &str) -> Result<Book> {
        self.find_book(title)
            .cloned()
            .ok_or_else(|| ShelfError::BookNotFound(title.to_string()))
    }

    /// Lends the catalog book titled `title` to `user_id`. Saves only when the
    /// user's list actually changed.
    pub fn borrow(&mut self, user_id: &str, title: &str) -> Result<(Book, BorrowOutcome)> {
        self.user_mut(user_id)?;
        let book = self.catalog_book(title)?;
        let outcome = self.user_mut(user_id)?.borrow(&book);
        if outcome == BorrowOutcome::Borrowed {
            self.save()?;
        }
        Ok((book, outcome))
    }

    /// Takes back the held book titled `title`. The lookup runs over the user's own
    /// list, so placeholder books loaded from disk can be returned.
    pub fn return_book(&mut self, user_id: &str, title: &str) -> Result<(Book, ReturnOutcome)> {
        let user = self.user_mut(user_id)?;
        let book = user
            .find_borrowed(title)
            .cloned()
            .ok_or_else(|| ShelfError::NotInBorrowedList(title.to_string()))?;
        let outcome = user.return_book(&book);
        if outcome == ReturnOutcome::Returned {
            self.save()?;
        }
        Ok((book, outcome))
    }

    pub fn reserve(&mut self, user_id: &str, title: &str) -> Result<Book> {
        self.user_mut(user_id)?;
        let book = self.catalog_book(title)?;
        self.user_mut(user_id)?.reserve(&book);
        self.save()?;
        Ok(book)
    }

    pub fn rate(&mut self, user_id: &str, title: &str, rating: Rating) -> Result<Book> {
        self.user_mut(user_id)?;
        let book = self.catalog_book(title)?;
        self.user_mut(user_id)?.rate(&book, rating);
        self.save()?;
        Ok(book)
    }
}
