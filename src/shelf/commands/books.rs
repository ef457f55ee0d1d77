use crate::commands::{CmdMessage, CmdResult, NewBook};
use crate::error::Result;
use crate::library::Library;
use crate::model::Book;
use crate::store::DataStore;

pub fn add<S: DataStore>(library: &mut Library<S>, new_book: NewBook) -> Result<CmdResult> {
    let book = Book::from(new_book);
    let message = format!("Book '{}' added successfully.", book.title);
    library.add_book(book.clone())?;
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(CmdMessage::success(message)))
}

pub fn remove<S: DataStore>(library: &mut Library<S>, isbn: &str) -> Result<CmdResult> {
    let removed = library.remove_book(isbn)?;
    Ok(CmdResult::default()
        .with_affected_books(vec![removed])
        .with_message(CmdMessage::success(format!(
            "Book with ISBN {} removed successfully.",
            isbn
        ))))
}

pub fn list<S: DataStore>(library: &Library<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_books(library.books().to_vec());
    if result.listed_books.is_empty() {
        result.add_message(CmdMessage::info("No books available."));
    }
    Ok(result)
}

pub fn search<S: DataStore>(library: &Library<S>, query: &str) -> Result<CmdResult> {
    let found: Vec<Book> = library.search_books(query).into_iter().cloned().collect();
    let mut result = CmdResult::default().with_listed_books(found);
    if result.listed_books.is_empty() {
        result.add_message(CmdMessage::info("No books found!"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::memory::fixtures::LibraryFixture;

    #[test]
    fn add_reports_title() {
        let mut library = LibraryFixture::new().build();
        let result = add(
            &mut library,
            NewBook::new("Dune", "Herbert", "Scifi", "001"),
        )
        .unwrap();

        assert_eq!(result.affected_books[0].isbn, "001");
        assert_eq!(result.messages[0].content, "Book 'Dune' added successfully.");
        assert_eq!(library.books().len(), 1);
    }

    #[test]
    fn remove_then_list_excludes_isbn() {
        let mut library = LibraryFixture::new().with_books(3).build();
        let result = remove(&mut library, "001").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Book with ISBN 001 removed successfully."
        );

        let listed = list(&library).unwrap().listed_books;
        let isbns: Vec<&str> = listed.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["002", "003"]);
    }

    #[test]
    fn remove_unknown_isbn_is_not_found() {
        let mut library = LibraryFixture::new().with_books(1).build();
        let err = remove(&mut library, "999").unwrap_err();
        assert!(matches!(err, ShelfError::IsbnNotFound(_)));
    }

    #[test]
    fn empty_listing_says_so() {
        let library = LibraryFixture::new().build();
        let result = list(&library).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No books available.");
    }

    #[test]
    fn search_without_hits() {
        let library = LibraryFixture::new().with_book("Dune", "001").build();
        let result = search(&library, "emma").unwrap();
        assert_eq!(result.messages[0].content, "No books found!");

        let result = search(&library, "un").unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert!(result.messages.is_empty());
    }
}
