//! # StringError
//!
//! Message payload for the error variants that only carry text, such as a
//! bad key column or an unreadable input file.
//!

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct StringError(String);

impl StringError {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StringError {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for StringError {
    fn from(s: &str) -> Self {
        StringError(s.to_string())
    }
}

impl From<String> for StringError {
    fn from(s: String) -> Self {
        StringError(s)
    }
}

impl fmt::Display for StringError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Messages end up in terminal output, so Debug prints them unquoted
impl fmt::Debug for StringError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for StringError {}

#[cfg(test)]
mod tests {
    use crate::error::StringError;

    #[test]
    fn test_string_error_message() {
        let err = StringError::from(format!("Key column '{}' not found", "id"));
        assert_eq!(err.as_str(), "Key column 'id' not found");
        assert_eq!(err.to_string(), err.as_str());
        assert_eq!(format!("{err:?}"), "Key column 'id' not found");
        assert_eq!(err, StringError::from("Key column 'id' not found"));
    }
}
