use colored::Colorize;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::error::ShelfError;
use shelf::model::{Book, User};
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &ShelfError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())
}

/// Prints `heading` and one `- ` line per entry. Empty lists print nothing; the
/// command already produced a "nothing here" message for them.
pub(super) fn print_entries<W: Write, T: AsRef<str>>(
    out: &mut W,
    heading: &str,
    entries: &[T],
) -> io::Result<()> {
    if entries.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", heading)?;
    for entry in entries {
        writeln!(out, "- {}", entry.as_ref())?;
    }
    Ok(())
}

pub(super) fn print_books<W: Write>(
    out: &mut W,
    heading: &str,
    books: &[Book],
) -> io::Result<()> {
    let lines: Vec<String> = books.iter().map(Book::describe).collect();
    print_entries(out, heading, &lines)
}

pub(super) fn print_users<W: Write>(
    out: &mut W,
    heading: &str,
    users: &[User],
) -> io::Result<()> {
    let lines: Vec<String> = users.iter().map(User::describe).collect();
    print_entries(out, heading, &lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn books_are_listed_with_dashes() {
        let out = render(|w| {
            print_books(
                w,
                "Available books:",
                &[Book::new("Dune", "Herbert", "Scifi", "001")],
            )
        });
        assert_eq!(
            out,
            "Available books:\n- Title: Dune, Author: Herbert, Genre: Scifi, ISBN: 001\n"
        );
    }

    #[test]
    fn empty_list_prints_nothing() {
        let out = render(|w| print_users(w, "Registered users:", &[]));
        assert!(out.is_empty());
    }

    #[test]
    fn messages_keep_their_text() {
        let out = render(|w| {
            print_messages(
                w,
                &[
                    CmdMessage::info("No borrowed books."),
                    CmdMessage::success("Dune borrowed successfully!"),
                ],
            )
        });
        assert!(out.starts_with("No borrowed books.\n"));
        assert!(out.contains("Dune borrowed successfully!"));
    }
}
