use serde::{Deserialize, Serialize};

/// User entity - the current identity, a display name plus the email it
/// came from. There is no password or uniqueness concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Derive an identity from a login email: the part before the first `@`
    /// becomes the name (the whole string when there is no `@`).
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email);
        Self::new(name, email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_local_part_of_email() {
        let user = User::from_email("alice@example.com");
        assert_eq!(user.name, "alice");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn email_without_at_becomes_the_name() {
        let user = User::from_email("alice");
        assert_eq!(user.name, "alice");
    }
}
