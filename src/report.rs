//! Analysis result types.

use std::fmt;

/// Three-level strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Classifies a password from its measured properties.
    ///
    /// Rules are evaluated in order; the Weak rule always wins over the
    /// Strong rule when both would match.
    pub fn classify(length: usize, category_count: usize, entropy_bits: f64) -> Self {
        if length < 8 || category_count < 3 || entropy_bits < 50.0 {
            StrengthTier::Weak
        } else if length >= 12 && category_count == 4 && entropy_bits >= 70.0 {
            StrengthTier::Strong
        } else {
            StrengthTier::Medium
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Result of analyzing a single password.
///
/// Carries no copy of the password itself, only derived measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordReport {
    /// Password length in characters.
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    /// Estimated entropy, `length * log2(charset_size)`.
    pub entropy_bits: f64,
    pub tier: StrengthTier,
}

impl PasswordReport {
    /// Number of character categories present (0-4).
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
}
