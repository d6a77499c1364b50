//! User Name Value Object
//!
//! The display/login handle for an account. Uniqueness is enforced by
//! the store; this type only guarantees shape.
//!
//! ## Invariants
//! - Non-empty after trimming
//! - At most 60 characters
//! - No control characters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 60;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty after trimming
    Empty,

    /// User name is too long
    TooLong { length: usize, max: usize },

    /// User name contains a control character
    InvalidCharacter,
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Username cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Username is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter => write!(f, "Username contains invalid characters"),
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated user name
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName from raw input (trims surrounding whitespace)
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let trimmed = input.as_ref().trim().to_string();

        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if trimmed.chars().any(|c| c.is_control()) {
            return Err(UserNameError::InvalidCharacter);
        }

        Ok(Self(trimmed))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = UserNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_whitespace() {
        let name = UserName::new("  alice  ").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_case_preserved() {
        let name = UserName::new("Alice").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_empty_fails() {
        assert!(matches!(UserName::new(""), Err(UserNameError::Empty)));
        assert!(matches!(UserName::new("   "), Err(UserNameError::Empty)));
    }

    #[test]
    fn test_too_long() {
        let input = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(matches!(
            UserName::new(&input),
            Err(UserNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_maximum_length_ok() {
        let input = "a".repeat(USER_NAME_MAX_LENGTH);
        assert!(UserName::new(&input).is_ok());
    }

    #[test]
    fn test_control_character_fails() {
        assert!(matches!(
            UserName::new("ali\u{0000}ce"),
            Err(UserNameError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let name = UserName::new("alice").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"alice\"");

        let back: UserName = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "alice");
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<UserName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
