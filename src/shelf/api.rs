//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every front end (the interactive shell today, anything else tomorrow).
//!
//! It:
//! - **Dispatches** to the appropriate command function
//! - **Gates** admin-only operations, re-checking credentials on every call
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! `LibraryApi<S, A>` is generic over the storage backend and the credential policy:
//! production uses `LibraryApi<FileStore, Admin>`, tests use `InMemoryStore`.
//!
//! A refused privileged call returns [`ShelfError::Unauthorized`] before touching the
//! library, so nothing is mutated and nothing is saved.

use crate::auth::{Authenticator, Credentials};
use crate::commands;
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::model::{Admin, Book, Rating, User, UserType};
use crate::store::DataStore;
use tracing::warn;

pub struct LibraryApi<S: DataStore, A: Authenticator = Admin> {
    library: Library<S>,
    authenticator: A,
}

impl<S: DataStore, A: Authenticator> LibraryApi<S, A> {
    pub fn new(library: Library<S>, authenticator: A) -> Self {
        Self {
            library,
            authenticator,
        }
    }

    /// Loads the library from `store` and wraps it.
    pub fn open(store: S, authenticator: A) -> Result<Self> {
        Ok(Self::new(Library::open(store)?, authenticator))
    }

    pub fn authenticate(&self, credentials: &Credentials) -> bool {
        self.authenticator.authenticate(credentials)
    }

    fn require_admin(&self, credentials: &Credentials, action: &str) -> Result<()> {
        if self.authenticate(credentials) {
            Ok(())
        } else {
            warn!(username = %credentials.username, action, "admin check failed");
            Err(ShelfError::Unauthorized)
        }
    }

    pub fn login(&self, credentials: &Credentials) -> Result<commands::CmdResult> {
        commands::login::run(&self.authenticator, credentials)
    }

    // --- admin only ---

    pub fn add_book(
        &mut self,
        credentials: &Credentials,
        book: commands::NewBook,
    ) -> Result<commands::CmdResult> {
        self.require_admin(credentials, "add book")?;
        commands::books::add(&mut self.library, book)
    }

    pub fn remove_book(
        &mut self,
        credentials: &Credentials,
        isbn: &str,
    ) -> Result<commands::CmdResult> {
        self.require_admin(credentials, "remove book")?;
        commands::books::remove(&mut self.library, isbn)
    }

    pub fn add_user(
        &mut self,
        credentials: &Credentials,
        name: &str,
        id: &str,
        user_type: UserType,
    ) -> Result<commands::CmdResult> {
        self.require_admin(credentials, "add user")?;
        commands::users::add(&mut self.library, name, id, user_type)
    }

    pub fn list_books(&self, credentials: &Credentials) -> Result<commands::CmdResult> {
        self.require_admin(credentials, "list books")?;
        commands::books::list(&self.library)
    }

    pub fn list_users(&self, credentials: &Credentials) -> Result<commands::CmdResult> {
        self.require_admin(credentials, "list users")?;
        commands::users::list(&self.library)
    }

    // --- open to everyone ---

    pub fn search_books(&self, query: &str) -> Result<commands::CmdResult> {
        commands::books::search(&self.library, query)
    }

    pub fn borrow(&mut self, user_id: &str, title: &str) -> Result<commands::CmdResult> {
        commands::borrowing::borrow(&mut self.library, user_id, title)
    }

    pub fn return_book(&mut self, user_id: &str, title: &str) -> Result<commands::CmdResult> {
        commands::borrowing::return_book(&mut self.library, user_id, title)
    }

    pub fn reserve(&mut self, user_id: &str, title: &str) -> Result<commands::CmdResult> {
        commands::borrowing::reserve(&mut self.library, user_id, title)
    }

    pub fn rate(
        &mut self,
        user_id: &str,
        title: &str,
        rating: Rating,
    ) -> Result<commands::CmdResult> {
        commands::borrowing::rate(&mut self.library, user_id, title, rating)
    }

    pub fn borrowed_books(&self, user_id: &str) -> Result<commands::CmdResult> {
        commands::users::borrowed_books(&self.library, user_id)
    }

    pub fn activity_log(&self, user_id: &str) -> Result<commands::CmdResult> {
        commands::users::activity_log(&self.library, user_id)
    }

    pub fn seed(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.library)
    }

    // --- lookups used by front ends between prompts ---

    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.library.get_user(id)
    }

    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.library.find_book(title)
    }

    pub fn library(&self) -> &Library<S> {
        &self.library
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, NewBook, ShelfPaths};
