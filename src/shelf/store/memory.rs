use super::{DataStore, LibraryData};
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data. Counts saves so callers can check when a write happened.
#[derive(Default)]
pub struct InMemoryStore {
    data: LibraryData,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already "persisted" document.
    pub fn with_data(data: LibraryData) -> Self {
        Self { data, saves: 0 }
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn data(&self) -> &LibraryData {
        &self.data
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<LibraryData> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: &LibraryData) -> Result<()> {
        self.data = data.clone();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::library::Library;
    use crate::model::{Book, User};

    pub struct LibraryFixture {
        pub library: Library<InMemoryStore>,
    }

    impl Default for LibraryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl LibraryFixture {
        pub fn new() -> Self {
            Self {
                library: Library::open(InMemoryStore::new()).unwrap(),
            }
        }

        pub fn with_book(mut self, title: &str, isbn: &str) -> Self {
            self.library
                .add_book(Book::new(title, "Some Author", "Some Genre", isbn))
                .unwrap();
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let book = Book::new(
                    format!("Test Book {}", i + 1),
                    format!("Author {}", i + 1),
                    "Fiction",
                    format!("{:03}", i + 1),
                );
                self.library.add_book(book).unwrap();
            }
            self
        }

        pub fn with_student(mut self, name: &str, id: &str) -> Self {
            self.library.add_user(User::student(name, id)).unwrap();
            self
        }

        pub fn with_staff(mut self, name: &str, id: &str) -> Self {
            self.library.add_user(User::staff(name, id)).unwrap();
            self
        }

        pub fn build(self) -> Library<InMemoryStore> {
            self.library
        }
    }
}
