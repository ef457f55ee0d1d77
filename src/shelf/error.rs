use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Book not found!")]
    BookNotFound(String),

    #[error("Book with ISBN {0} not found.")]
    IsbnNotFound(String),

    #[error("Book not found in your borrowed list!")]
    NotInBorrowedList(String),

    #[error("User not found!")]
    UserNotFound(String),

    #[error("Invalid admin credentials!")]
    Unauthorized,

    #[error("Invalid rating. Please enter a value between 1 and 5.")]
    InvalidRating(String),

    #[error("Invalid user type!")]
    InvalidUserType(String),

    #[error("Invalid choice. Please try again.")]
    InvalidChoice(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ShelfError {
    /// Fatal errors leave the persisted state in doubt and end the process.
    /// Everything else aborts only the current operation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShelfError::Io(_) | ShelfError::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_errors_are_fatal() {
        let io = ShelfError::Io(std::io::Error::other("disk"));
        assert!(io.is_fatal());

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(ShelfError::from(parse).is_fatal());
    }

    #[test]
    fn user_errors_are_not_fatal() {
        assert!(!ShelfError::Unauthorized.is_fatal());
        assert!(!ShelfError::UserNotFound("S001".into()).is_fatal());
        assert!(!ShelfError::InvalidRating("6".into()).is_fatal());
    }

    #[test]
    fn not_found_messages_match_console_wording() {
        assert_eq!(
            ShelfError::IsbnNotFound("999".into()).to_string(),
            "Book with ISBN 999 not found."
        );
        assert_eq!(
            ShelfError::BookNotFound("Dune".into()).to_string(),
            "Book not found!"
        );
    }
}
