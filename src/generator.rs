//! Password generator with guaranteed category coverage.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;

use crate::charset;

/// One mandatory character per category; requested lengths below this
/// produce exactly this many characters.
pub const MIN_LENGTH: usize = 4;

/// Generation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Remove visually ambiguous characters (`ilLI|1oO0`) from the letter
    /// and digit pools. The symbol pool is never filtered.
    pub exclude_lookalikes: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            exclude_lookalikes: true,
        }
    }
}

/// Generates a password using the process CSPRNG (`rand::rng()`).
///
/// The output always contains at least one lowercase letter, one uppercase
/// letter, one digit and one symbol; its length is `length`, or
/// [`MIN_LENGTH`] when `length` is smaller.
pub fn generate_password(length: usize, options: &GeneratorOptions) -> SecretString {
    generate_password_with(length, options, &mut rand::rng())
}

/// Generates a password from an injected random source.
///
/// The `CryptoRng` bound keeps non-cryptographic generators out at compile
/// time; tests inject a seeded `StdRng` through this seam.
pub fn generate_password_with<R>(
    length: usize,
    options: &GeneratorOptions,
    rng: &mut R,
) -> SecretString
where
    R: Rng + CryptoRng,
{
    let (lowercase, uppercase, digits) = if options.exclude_lookalikes {
        (
            charset::filtered_pool(charset::LOWERCASE),
            charset::filtered_pool(charset::UPPERCASE),
            charset::filtered_pool(charset::DIGITS),
        )
    } else {
        (
            charset::full_pool(charset::LOWERCASE),
            charset::full_pool(charset::UPPERCASE),
            charset::full_pool(charset::DIGITS),
        )
    };
    let symbols = charset::full_pool(charset::SYMBOLS);

    // One draw per category guarantees coverage regardless of length.
    let mut chars = vec![
        pick(&lowercase, rng),
        pick(&uppercase, rng),
        pick(&digits, rng),
        pick(&symbols, rng),
    ];

    let union: Vec<char> = lowercase
        .iter()
        .chain(uppercase.iter())
        .chain(digits.iter())
        .chain(symbols.iter())
        .copied()
        .collect();

    for _ in 0..length.saturating_sub(MIN_LENGTH) {
        chars.push(pick(&union, rng));
    }

    // Uniform shuffle so the mandatory characters are not predictably
    // positioned at the front.
    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        requested = length,
        produced = chars.len(),
        exclude_lookalikes = options.exclude_lookalikes,
        "password generated"
    );

    SecretString::from(chars.into_iter().collect::<String>())
}

fn pick<R>(pool: &[char], rng: &mut R) -> char
where
    R: Rng + CryptoRng,
{
    pool[rng.random_range(0..pool.len())]
}
