//! Password generation and strength analysis library
//!
//! This library provides two independent, composable operations: generating
//! passwords with guaranteed character-category coverage, and analyzing any
//! password's composition, entropy and strength tier.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based async analysis
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{analyze_password, generate_password, GeneratorOptions, StrengthTier};
//! use secrecy::SecretString;
//!
//! // Generate a 16-character password (lookalikes excluded by default)
//! let password = generate_password(16, &GeneratorOptions::default());
//!
//! // Analyze it, or any user-supplied password
//! let report = analyze_password(&password);
//! assert_eq!(report.category_count(), 4);
//! assert_eq!(report.tier, StrengthTier::Strong);
//!
//! let typed = SecretString::new("password".to_string().into());
//! assert_eq!(analyze_password(&typed).tier, StrengthTier::Weak);
//! ```

// Internal modules
mod analyzer;
mod generator;
mod report;
mod sections;

pub mod charset;

// Public API
pub use analyzer::analyze_password;
pub use generator::{generate_password, generate_password_with, GeneratorOptions, MIN_LENGTH};
pub use report::{PasswordReport, StrengthTier};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;
