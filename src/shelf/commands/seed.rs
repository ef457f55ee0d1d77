use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::{Book, User, UserType};
use crate::store::DataStore;

const DEMO_BOOKS: &[(&str, &str, &str, &str)] = &[
    ("Alita", "Humayun Ahmed", "Novel", "10"),
    ("Lal Salu", "Ashok Mitra", "Novel", "11"),
    ("Naihshobder Gondo", "Salahuddin", "Poetry", "12"),
    ("Amar Ekti Khola Chithi", "Selina Hossain", "Letters", "13"),
    ("Bangladesh's Liberation War", "Shamsuzzaman Khan", "History", "14"),
    ("The Story of the Universe", "Zafar Iqbal", "Science", "15"),
];

const DEMO_USERS: &[(&str, &str, UserType)] = &[
    ("Alif", "S001", UserType::Student),
    ("Rahim", "T001", UserType::Staff),
];

/// Adds the demo catalog. Entries whose ISBN or user id already exist are skipped,
/// so running it twice adds nothing the second time.
pub fn run<S: DataStore>(library: &mut Library<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &(title, author, genre, isbn) in DEMO_BOOKS {
        if library.has_book_with_isbn(isbn) {
            continue;
        }
        let book = Book::new(title, author, genre, isbn);
        library.add_book(book.clone())?;
        result.add_message(CmdMessage::success(format!(
            "Book '{}' added successfully.",
            title
        )));
        result.affected_books.push(book);
    }

    for &(name, id, user_type) in DEMO_USERS {
        if library.get_user(id).is_some() {
            continue;
        }
        library.add_user(User::new(name, id, user_type))?;
        result.add_message(CmdMessage::success(format!(
            "User '{}' added successfully.",
            name
        )));
    }

    if result.messages.is_empty() {
        result.add_message(CmdMessage::info("Demo data already present."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::LibraryFixture;

    #[test]
    fn seeds_books_and_users() {
        let mut library = LibraryFixture::new().build();
        let result = run(&mut library).unwrap();

        assert_eq!(library.books().len(), 6);
        assert_eq!(library.users().len(), 2);
        assert_eq!(result.affected_books.len(), 6);
        assert_eq!(
            library.books()[0].describe(),
            "Title: Alita, Author: Humayun Ahmed, Genre: Novel, ISBN: 10"
        );
        assert_eq!(library.get_user("T001").unwrap().user_type, UserType::Staff);
    }

    #[test]
    fn seeding_twice_is_idempotent() {
        let mut library = LibraryFixture::new().build();
        run(&mut library).unwrap();
        let saves = library.store().save_count();

        let again = run(&mut library).unwrap();
        assert_eq!(library.books().len(), 6);
        assert_eq!(library.users().len(), 2);
        assert_eq!(again.messages[0].content, "Demo data already present.");
        assert_eq!(library.store().save_count(), saves);
    }

    #[test]
    fn skips_existing_isbn() {
        let mut library = LibraryFixture::new()
            .with_book("My Alita", "10")
            .with_student("Alif", "S001")
            .build();
        run(&mut library).unwrap();

        assert_eq!(library.books().len(), 6);
        assert_eq!(library.books()[0].title, "My Alita");
        assert_eq!(library.users().len(), 2);
    }
}
