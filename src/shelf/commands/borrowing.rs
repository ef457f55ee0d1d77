use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::Library;
use crate::model::{Book, BorrowOutcome, Rating, ReturnOutcome};
use crate::store::DataStore;

pub fn borrow<S: DataStore>(
    library: &mut Library<S>,
    user_id: &str,
    title: &str,
) -> Result<CmdResult> {
    let (book, outcome) = library.borrow(user_id, title)?;
    let message = match outcome {
        BorrowOutcome::Borrowed => {
            CmdMessage::success(format!("{} borrowed successfully!", book.title))
        }
        BorrowOutcome::AlreadyBorrowed => {
            CmdMessage::warning(format!("You already borrowed {}.", book.title))
        }
    };
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(message))
}

pub fn return_book<S: DataStore>(
    library: &mut Library<S>,
    user_id: &str,
    title: &str,
) -> Result<CmdResult> {
    let (book, outcome) = library.return_book(user_id, title)?;
    let message = return_message(&book, outcome);
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(message))
}

/// The library looks the title up in the user's own list first, so a miss normally
/// arrives as `NotInBorrowedList` and only `User::return_book` yields `NotBorrowed`.
fn return_message(book: &Book, outcome: ReturnOutcome) -> CmdMessage {
    match outcome {
        ReturnOutcome::Returned => {
            CmdMessage::success(format!("{} returned successfully!", book.title))
        }
        ReturnOutcome::NotBorrowed => {
            CmdMessage::warning(format!("You did not borrow {}.", book.title))
        }
    }
}

pub fn reserve<S: DataStore>(
    library: &mut Library<S>,
    user_id: &str,
    title: &str,
) -> Result<CmdResult> {
    let book = library.reserve(user_id, title)?;
    let message = CmdMessage::success(format!("{} reserved successfully!", book.title));
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(message))
}

pub fn rate<S: DataStore>(
    library: &mut Library<S>,
    user_id: &str,
    title: &str,
    rating: Rating,
) -> Result<CmdResult> {
    let book = library.rate(user_id, title, rating)?;
    let message = CmdMessage::success(format!("Rating {} added to {}", rating, book.title));
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ShelfError;
    use crate::store::memory::fixtures::LibraryFixture;

    #[test]
    fn borrow_twice_warns() {
        let mut library = LibraryFixture::new()
            .with_book("Dune", "001")
            .with_student("Alif", "S001")
            .build();

        let first = borrow(&mut library, "S001", "dune").unwrap();
        assert_eq!(first.messages[0].content, "Dune borrowed successfully!");
        assert_eq!(first.messages[0].level, MessageLevel::Success);

        let second = borrow(&mut library, "S001", "Dune").unwrap();
        assert_eq!(second.messages[0].content, "You already borrowed Dune.");
        assert_eq!(second.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn return_reports_success() {
        let mut library = LibraryFixture::new()
            .with_book("Dune", "001")
            .with_student("Alif", "S001")
            .build();
        borrow(&mut library, "S001", "Dune").unwrap();

        let result = return_book(&mut library, "S001", "Dune").unwrap();
        assert_eq!(result.messages[0].content, "Dune returned successfully!");

        let again = return_book(&mut library, "S001", "Dune").unwrap_err();
        assert!(matches!(again, ShelfError::NotInBorrowedList(_)));
    }

    #[test]
    fn not_borrowed_outcome_warns() {
        let emma = Book::new("Emma", "Austen", "Classic", "002");
        let mut alif = crate::model::User::student("Alif", "S001");

        let outcome = alif.return_book(&emma);
        assert_eq!(outcome, ReturnOutcome::NotBorrowed);

        let message = return_message(&emma, outcome);
        assert_eq!(message.content, "You did not borrow Emma.");
        assert_eq!(message.level, MessageLevel::Warning);
        assert!(alif.activity_log.is_empty());
    }

    #[test]
    fn reserve_and_rate_messages() {
        let mut library = LibraryFixture::new()
            .with_book("Dune", "001")
            .with_staff("Rahim", "T001")
            .build();

        let reserved = reserve(&mut library, "T001", "Dune").unwrap();
        assert_eq!(reserved.messages[0].content, "Dune reserved successfully!");

        let rated = rate(&mut library, "T001", "Dune", Rating::new(3).unwrap()).unwrap();
        assert_eq!(rated.messages[0].content, "Rating 3 added to Dune");

        assert_eq!(
            library.get_user("T001").unwrap().activity_log,
            vec!["Reserved Dune", "Rated Dune with 3 stars"]
        );
    }

    #[test]
    fn rate_unknown_book() {
        let mut library = LibraryFixture::new().with_staff("Rahim", "T001").build();
        let err = rate(&mut library, "T001", "Nope", Rating::new(3).unwrap()).unwrap_err();
        assert!(matches!(err, ShelfError::BookNotFound(_)));
        assert_eq!(library.store().save_count(), 1);
    }
}
