//! Admin gating.
//!
//! Privileged operations take [`Credentials`] on every call and check them against an
//! [`Authenticator`]. There is no session: a successful check authorizes only the call
//! it was made for.

use crate::model::Admin;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> bool;
}

/// The stock policy: exact match on both username and password.
impl Authenticator for Admin {
    fn authenticate(&self, credentials: &Credentials) -> bool {
        self.username == credentials.username && self.password == credentials.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_only() {
        let admin = Admin::new("hasib", "hasib1212");
        assert!(admin.authenticate(&Credentials::new("hasib", "hasib1212")));
        assert!(!admin.authenticate(&Credentials::new("hasib", "wrong")));
        assert!(!admin.authenticate(&Credentials::new("Hasib", "hasib1212")));
        assert!(!admin.authenticate(&Credentials::new("hasib ", "hasib1212")));
        assert!(!admin.authenticate(&Credentials::new("", "")));
    }
}
