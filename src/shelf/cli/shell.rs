//! The numbered menu.
//!
//! Reads one choice per line, collects the follow-up fields line by line and hands
//! them to the API. Any error that is not fatal is printed and the menu comes back.
//! Admin-only entries (1, 2, 4, 11, 12) ask for the admin username and password
//! every time, before anything else.

use super::print::{print_books, print_entries, print_error, print_messages, print_users};
use shelf::api::{CmdMessage, LibraryApi, NewBook};
use shelf::auth::{Authenticator, Credentials};
use shelf::error::{Result, ShelfError};
use shelf::model::{Rating, UserType};
use shelf::store::DataStore;
use std::io::{self, BufRead, Write};
use tracing::debug;

const MENU: &[&str] = &[
    "1. Add Book (Admin Only)",
    "2. Remove Book (Admin Only)",
    "3. Search Books",
    "4. Add User (Admin Only)",
    "5. Borrow Book",
    "6. Return Book",
    "7. Reserve Book",
    "8. View Borrowed Books",
    "9. View User Activity Log",
    "10. Add Book Rating",
    "11. List All Books (Admin Only)",
    "12. List All Users (Admin Only)",
    "13. Admin Login",
    "14. Exit",
];

enum Flow {
    Continue,
    Exit,
}

/// Why a menu step stopped early.
enum Halt {
    EndOfInput,
    Failed(ShelfError),
}

impl From<ShelfError> for Halt {
    fn from(e: ShelfError) -> Self {
        Halt::Failed(e)
    }
}

impl From<io::Error> for Halt {
    fn from(e: io::Error) -> Self {
        Halt::Failed(ShelfError::Io(e))
    }
}

type Step<T> = std::result::Result<T, Halt>;

pub(super) struct Shell<'a, S: DataStore, A: Authenticator, R: BufRead, W: Write> {
    api: &'a mut LibraryApi<S, A>,
    input: R,
    output: W,
}

impl<'a, S: DataStore, A: Authenticator, R: BufRead, W: Write> Shell<'a, S, A, R, W> {
    pub fn new(api: &'a mut LibraryApi<S, A>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Runs until the user picks Exit or input ends. Only fatal errors escape.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let step = match self.prompt("Enter your choice: ") {
                Ok(choice) => self.dispatch(&choice),
                Err(halt) => Err(halt),
            };
            match step {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(Halt::EndOfInput) => {
                    debug!("input closed, leaving the shell");
                    return Ok(());
                }
                Err(Halt::Failed(e)) if e.is_fatal() => return Err(e),
                Err(Halt::Failed(e)) => print_error(&mut self.output, &e)?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nLibrary Menu:")?;
        for line in MENU {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Step<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(Halt::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn show(&mut self, messages: &[CmdMessage]) -> Step<()> {
        print_messages(&mut self.output, messages)?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Step<Flow> {
        match choice {
            "1" => self.add_book()?,
            "2" => self.remove_book()?,
            "3" => self.search()?,
            "4" => self.add_user()?,
            "5" => self.borrow()?,
            "6" => self.return_book()?,
            "7" => self.reserve()?,
            "8" => self.view_borrowed()?,
            "9" => self.view_activity()?,
            "10" => self.rate()?,
            "11" => self.list_books()?,
            "12" => self.list_users()?,
            "13" => self.login()?,
            "14" => return Ok(Flow::Exit),
            other => return Err(ShelfError::InvalidChoice(other.to_string()).into()),
        }
        Ok(Flow::Continue)
    }

    fn admin_credentials(&mut self) -> Step<Credentials> {
        let username = self.prompt("Enter admin username: ")?;
        let password = self.prompt("Enter admin password: ")?;
        Ok(Credentials::new(username, password))
    }

    /// Asks for credentials and refuses early, before any further prompt.
    fn authorized_credentials(&mut self) -> Step<Credentials> {
        let credentials = self.admin_credentials()?;
        if !self.api.authenticate(&credentials) {
            return Err(ShelfError::Unauthorized.into());
        }
        Ok(credentials)
    }

    /// Asks for a user id and checks that it is registered.
    fn known_user(&mut self) -> Step<String> {
        let id = self.prompt("Enter your user ID: ")?;
        if self.api.get_user(&id).is_none() {
            return Err(ShelfError::UserNotFound(id).into());
        }
        Ok(id)
    }

    fn add_book(&mut self) -> Step<()> {
        let credentials = self.authorized_credentials()?;
        let title = self.prompt("Enter book title: ")?;
        let author = self.prompt("Enter book author: ")?;
        let genre = self.prompt("Enter book genre: ")?;
        let isbn = self.prompt("Enter book ISBN: ")?;
        let result = self
            .api
            .add_book(&credentials, NewBook::new(title, author, genre, isbn))?;
        self.show(&result.messages)
    }

    fn remove_book(&mut self) -> Step<()> {
        let credentials = self.authorized_credentials()?;
        let isbn = self.prompt("Enter book ISBN to remove: ")?;
        let result = self.api.remove_book(&credentials, &isbn)?;
        self.show(&result.messages)
    }

    fn search(&mut self) -> Step<()> {
        let query = self.prompt("Enter book title to search: ")?;
        let result = self.api.search_books(&query)?;
        print_books(&mut self.output, "Search Results:", &result.listed_books)?;
        self.show(&result.messages)
    }

    fn add_user(&mut self) -> Step<()> {
        let credentials = self.authorized_credentials()?;
        let name = self.prompt("Enter user name: ")?;
        let id = self.prompt("Enter user ID: ")?;
        let user_type: UserType = self.prompt("Enter user type (student/staff): ")?.parse()?;
        let result = self.api.add_user(&credentials, &name, &id, user_type)?;
        self.show(&result.messages)
    }

    fn borrow(&mut self) -> Step<()> {
        let id = self.known_user()?;
        let title = self.prompt("Enter the title of the book to borrow: ")?;
        let result = self.api.borrow(&id, &title)?;
        self.show(&result.messages)
    }

    fn return_book(&mut self) -> Step<()> {
        let id = self.known_user()?;
        let title = self.prompt("Enter the title of the book to return: ")?;
        let result = self.api.return_book(&id, &title)?;
        self.show(&result.messages)
    }

    fn reserve(&mut self) -> Step<()> {
        let id = self.known_user()?;
        let title = self.prompt("Enter the title of the book to reserve: ")?;
        let result = self.api.reserve(&id, &title)?;
        self.show(&result.messages)
    }

    fn view_borrowed(&mut self) -> Step<()> {
        let id = self.known_user()?;
        let result = self.api.borrowed_books(&id)?;
        print_entries(&mut self.output, "Your borrowed books:", &result.entries)?;
        self.show(&result.messages)
    }

    fn view_activity(&mut self) -> Step<()> {
        let id = self.known_user()?;
        let result = self.api.activity_log(&id)?;
        print_entries(&mut self.output, "Your activity log:", &result.entries)?;
        self.show(&result.messages)
    }

    fn rate(&mut self) -> Step<()> {
        let id = self.known_user()?;
        let title = self.prompt("Enter the title of the book to rate: ")?;
        if self.api.find_book(&title).is_none() {
            return Err(ShelfError::BookNotFound(title).into());
        }
        let rating: Rating = self.prompt("Enter your rating (1-5): ")?.parse()?;
        let result = self.api.rate(&id, &title, rating)?;
        self.show(&result.messages)
    }

    fn list_books(&mut self) -> Step<()> {
        let credentials = self.authorized_credentials()?;
        let result = self.api.list_books(&credentials)?;
        print_books(&mut self.output, "Available books:", &result.listed_books)?;
        self.show(&result.messages)
    }

    fn list_users(&mut self) -> Step<()> {
        let credentials = self.authorized_credentials()?;
        let result = self.api.list_users(&credentials)?;
        print_users(&mut self.output, "Registered users:", &result.listed_users)?;
        self.show(&result.messages)
    }

    fn login(&mut self) -> Step<()> {
        let credentials = self.admin_credentials()?;
        let result = self.api.login(&credentials)?;
        self.show(&result.messages)
    }
}
