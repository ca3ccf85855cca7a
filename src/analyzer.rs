//! Password analyzer - main analysis logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::report::{PasswordReport, StrengthTier};
use crate::sections::{composition_section, entropy_section};

/// Analyzes a password and returns a detailed report.
///
/// Total over all string inputs, including the empty string; never fails
/// and has no side effects.
///
/// # Arguments
/// * `password` - The password to analyze
///
/// # Returns
/// A `PasswordReport` with length, category flags, entropy and tier.
pub fn analyze_password(password: &SecretString) -> PasswordReport {
    let length = password.expose_secret().chars().count();

    let composition = composition_section(password);
    let entropy_bits = entropy_section(password, composition.charset_size());
    let tier = StrengthTier::classify(length, composition.category_count(), entropy_bits);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length,
        categories = composition.category_count(),
        entropy_bits,
        "password analyzed: {}",
        tier
    );

    PasswordReport {
        length,
        has_lowercase: composition.has_lowercase,
        has_uppercase: composition.has_uppercase,
        has_digit: composition.has_digit,
        has_symbol: composition.has_symbol,
        entropy_bits,
        tier,
    }
}

/// Async version that sends the report via channel.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(password: &SecretString, tx: mpsc::Sender<PasswordReport>) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    let report = analyze_password(password);

    if tx.send(report).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: receiver dropped");
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_analyze_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let pwd = SecretString::new("TestPass123!".to_string().into());

        analyze_password_tx(&pwd, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert_eq!(report.length, 12);
        assert_eq!(report.category_count(), 4);
    }

    #[tokio::test]
    async fn test_analyze_password_tx_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let pwd = SecretString::new("TestPass123!".to_string().into());
        // Must not panic when nobody is listening.
        analyze_password_tx(&pwd, tx).await;
    }
}
