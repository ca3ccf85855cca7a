//! Fixed character category alphabets.
//!
//! These are process-wide constants; pools are filtered on demand and never
//! mutated.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

/// ASCII punctuation, the symbol category alphabet (32 characters).
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Visually ambiguous characters removed from the letter and digit pools
/// when lookalike exclusion is on. The symbol pool is never filtered, so
/// `|` stays reachable as a symbol.
pub const LOOKALIKES: &str = "ilLI|1oO0";

/// Charset size contributed by each category to the entropy estimate.
pub const LOWERCASE_SIZE: usize = 26;
pub const UPPERCASE_SIZE: usize = 26;
pub const DIGITS_SIZE: usize = 10;
pub const SYMBOLS_SIZE: usize = 32;

/// Whether a character belongs to the symbol category.
pub fn is_symbol(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Returns `pool` with lookalike characters removed.
pub fn filtered_pool(pool: &str) -> Vec<char> {
    pool.chars().filter(|c| !LOOKALIKES.contains(*c)).collect()
}

/// Returns `pool` unchanged, as a vector of characters.
pub fn full_pool(pool: &str) -> Vec<char> {
    pool.chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(LOWERCASE.chars().count(), LOWERCASE_SIZE);
        assert_eq!(UPPERCASE.chars().count(), UPPERCASE_SIZE);
        assert_eq!(DIGITS.chars().count(), DIGITS_SIZE);
        assert_eq!(SYMBOLS.chars().count(), SYMBOLS_SIZE);
    }

    #[test]
    fn test_symbols_match_ascii_punctuation() {
        // The membership test used by the analyzer and the generation pool
        // must agree on the same 32 characters.
        for c in SYMBOLS.chars() {
            assert!(is_symbol(c), "{c:?} not recognized as symbol");
        }
        let ascii_punct_count = (0u8..=127)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .count();
        assert_eq!(ascii_punct_count, SYMBOLS_SIZE);
    }

    #[test]
    fn test_filtered_pool_sizes() {
        // i, l, o removed
        assert_eq!(filtered_pool(LOWERCASE).len(), 23);
        // I, L, O removed
        assert_eq!(filtered_pool(UPPERCASE).len(), 23);
        // 0, 1 removed
        assert_eq!(filtered_pool(DIGITS).len(), 8);
    }

    #[test]
    fn test_filtered_pool_drops_only_lookalikes() {
        let lower = filtered_pool(LOWERCASE);
        assert!(!lower.contains(&'i'));
        assert!(!lower.contains(&'l'));
        assert!(!lower.contains(&'o'));
        assert!(lower.contains(&'a'));
        assert!(lower.contains(&'z'));
    }

    #[test]
    fn test_symbol_pool_keeps_pipe() {
        // Lookalike filtering never applies to the symbol pool.
        assert!(SYMBOLS.contains('|'));
        assert!(full_pool(SYMBOLS).contains(&'|'));
    }
}
