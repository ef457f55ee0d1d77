use crate::auth::{Authenticator, Credentials};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use tracing::warn;

/// Checks credentials without performing anything privileged.
pub fn run<A: Authenticator>(authenticator: &A, credentials: &Credentials) -> Result<CmdResult> {
    if !authenticator.authenticate(credentials) {
        warn!(username = %credentials.username, "admin login refused");
        return Err(ShelfError::Unauthorized);
    }
    Ok(CmdResult::default().with_message(CmdMessage::success("Admin login successful!")))
}
