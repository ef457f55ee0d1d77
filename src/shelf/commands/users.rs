use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::model::{User, UserType};
use crate::store::DataStore;

pub fn add<S: DataStore>(
    library: &mut Library<S>,
    name: &str,
    id: &str,
    user_type: UserType,
) -> Result<CmdResult> {
    library.add_user(User::new(name, id, user_type))?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "User '{}' added successfully.",
        name
    ))))
}

pub fn list<S: DataStore>(library: &Library<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_users(library.users().to_vec());
    if result.listed_users.is_empty() {
        result.add_message(CmdMessage::info("No registered users."));
    }
    Ok(result)
}

fn find<'a, S: DataStore>(library: &'a Library<S>, id: &str) -> Result<&'a User> {
    library
        .get_user(id)
        .ok_or_else(|| ShelfError::UserNotFound(id.to_string()))
}

pub fn borrowed_books<S: DataStore>(library: &Library<S>, id: &str) -> Result<CmdResult> {
    let user = find(library, id)?;
    let titles = user.borrowed_books.iter().map(|b| b.title.clone()).collect();
    let mut result = CmdResult::default().with_entries(titles);
    if result.entries.is_empty() {
        result.add_message(CmdMessage::info("No borrowed books."));
    }
    Ok(result)
}

pub fn activity_log<S: DataStore>(library: &Library<S>, id: &str) -> Result<CmdResult> {
    let user = find(library, id)?;
    let mut result = CmdResult::default().with_entries(user.activity_log.clone());
    if result.entries.is_empty() {
        result.add_message(CmdMessage::info("No activity log available."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::LibraryFixture;

    #[test]
    fn add_and_list() {
        let mut library = LibraryFixture::new().build();
        let result = add(&mut library, "Alif", "S001", UserType::Student).unwrap();
        assert_eq!(result.messages[0].content, "User 'Alif' added successfully.");

        add(&mut library, "Rahim", "T001", UserType::Staff).unwrap();
        let listed = list(&library).unwrap().listed_users;
        let described: Vec<String> = listed.iter().map(User::describe).collect();
        assert_eq!(
            described,
            vec!["Student Name: Alif, ID: S001", "Staff Name: Rahim, ID: T001"]
        );
    }

    #[test]
    fn empty_user_list() {
        let library = LibraryFixture::new().build();
        let result = list(&library).unwrap();
        assert_eq!(result.messages[0].content, "No registered users.");
    }

    #[test]
    fn borrowed_and_log_views() {
        let mut library = LibraryFixture::new()
            .with_book("Dune", "001")
            .with_student("Alif", "S001")
            .build();

        let empty = borrowed_books(&library, "S001").unwrap();
        assert_eq!(empty.messages[0].content, "No borrowed books.");
        let empty = activity_log(&library, "S001").unwrap();
        assert_eq!(empty.messages[0].content, "No activity log available.");

        library.borrow("S001", "Dune").unwrap();
        assert_eq!(borrowed_books(&library, "S001").unwrap().entries, vec!["Dune"]);
        assert_eq!(
            activity_log(&library, "S001").unwrap().entries,
            vec!["Borrowed Dune"]
        );
    }

    #[test]
    fn unknown_user() {
        let library = LibraryFixture::new().build();
        assert!(matches!(
            borrowed_books(&library, "X"),
            Err(ShelfError::UserNotFound(_))
        ));
        assert!(matches!(
            activity_log(&library, "X"),
            Err(ShelfError::UserNotFound(_))
        ));
    }
}
