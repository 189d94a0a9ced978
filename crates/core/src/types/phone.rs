//! Customer phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A customer phone number as entered by staff.
///
/// Stored verbatim (dashes, spaces, parentheses and all). No validation is
/// performed; [`PhoneNumber::digits`] gives the normalized form used to build
/// messaging links.
///
/// ## Examples
///
/// ```
/// use order_desk_core::PhoneNumber;
///
/// let phone = PhoneNumber::new("(123) 456-7890");
/// assert_eq!(phone.digits(), "1234567890");
/// assert_eq!(phone.as_str(), "(123) 456-7890");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Wrap a phone number string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the phone number as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns only the ASCII digits of the number.
    ///
    /// May be empty if the input contained no digits.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhoneNumber {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PhoneNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_strips_separators() {
        assert_eq!(PhoneNumber::new("123-456-7890").digits(), "1234567890");
        assert_eq!(PhoneNumber::new("+1 (234) 567 8901").digits(), "12345678901");
    }

    #[test]
    fn test_digits_of_garbage_is_empty() {
        assert_eq!(PhoneNumber::new("call me").digits(), "");
        assert_eq!(PhoneNumber::default().digits(), "");
    }

    #[test]
    fn test_display_keeps_original() {
        let phone = PhoneNumber::from("234-567-8901");
        assert_eq!(phone.to_string(), "234-567-8901");
    }

    #[test]
    fn test_serde_transparent() {
        let phone = PhoneNumber::new("345-678-9012");
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"345-678-9012\"");
    }
}
