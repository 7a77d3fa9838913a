//! User domain entity.

use std::fmt;

use crate::config::UNNAMED_USER;

/// User domain entity
///
/// Ids are caller-assigned and not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    /// Display name; `None` is allowed
    pub name: Option<String>,
}

impl User {
    /// Create a named user
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Create a user without a display name
    pub fn unnamed(id: i64) -> Self {
        Self { id, name: None }
    }

    /// Name used in console and log output
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_USER)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_name() {
        let user = User::new(1, "Alice");
        assert_eq!(user.id, 1);
        assert_eq!(user.name.as_deref(), Some("Alice"));
        assert_eq!(user.display_name(), "Alice");
    }

    #[test]
    fn test_unnamed_user_uses_placeholder() {
        let user = User::unnamed(5);
        assert_eq!(user.name, None);
        assert_eq!(user.display_name(), UNNAMED_USER);
        assert_eq!(user.to_string(), "#5 <unnamed>");
    }

    #[test]
    fn test_display() {
        assert_eq!(User::new(2, "Bob").to_string(), "#2 Bob");
    }
}
