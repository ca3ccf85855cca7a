//! Entropy section - estimated information content in bits.

use secrecy::{ExposeSecret, SecretString};

/// Estimates password entropy as `length * log2(charset_size)`.
///
/// Assumes uniform independent selection from the observed character
/// classes. Returns 0 when `charset_size` is 0 (the empty password).
pub fn entropy_section(password: &SecretString, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    let length = password.expose_secret().chars().count();
    length as f64 * (charset_size as f64).log2()
}
