//! Composition section - which character categories the password contains.

use secrecy::{ExposeSecret, SecretString};

use crate::charset;

/// Category membership of a password, from a single scan of its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl Composition {
    /// Number of categories present (0-4).
    pub fn category_count(&self) -> usize {
        [
            self.has_lowercase,
            self.has_uppercase,
            self.has_digit,
            self.has_symbol,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }

    /// Sum of the alphabet sizes of the categories present.
    pub fn charset_size(&self) -> usize {
        let mut size = 0;
        if self.has_lowercase {
            size += charset::LOWERCASE_SIZE;
        }
        if self.has_uppercase {
            size += charset::UPPERCASE_SIZE;
        }
        if self.has_digit {
            size += charset::DIGITS_SIZE;
        }
        if self.has_symbol {
            size += charset::SYMBOLS_SIZE;
        }
        size
    }
}

/// Scans every character and reports category membership.
///
/// Accepts any string, including empty; an empty password has no categories.
pub fn composition_section(password: &SecretString) -> Composition {
    let pwd = password.expose_secret();
    Composition {
        has_lowercase: pwd.chars().any(|c| c.is_lowercase()),
        has_uppercase: pwd.chars().any(|c| c.is_uppercase()),
        has_digit: pwd.chars().any(|c| c.is_ascii_digit()),
        has_symbol: pwd.chars().any(charset::is_symbol),
    }
}
