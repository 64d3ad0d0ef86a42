//! Error types for Eddy core operations.
//!
//! One uniform error model for the whole engine: nothing below the CLI's
//! `main` terminates the process. Errors fall into two classes mirroring the
//! protocol: *bad request* (an unsupported or missing input value, never
//! retried) and *internal* (a KDF/cipher/codec failure; since every input is
//! deterministic, retrying without changing an input cannot change the
//! outcome). A decrypt whose derived address does not match the expected
//! address is NOT an error — see [`crate::wallet::Verification`].

use thiserror::Error;

/// Result type alias for Eddy operations.
pub type Result<T> = std::result::Result<T, EddyError>;

/// Core error type for Eddy operations.
#[derive(Debug, Error)]
pub enum EddyError {
    /// Difficulty tier not in the supported table
    #[error("Unsupported difficulty: {0}")]
    UnsupportedDifficulty(String),

    /// Currency not in the supported table
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Mnemonic language not in the supported table
    #[error("Unsupported mnemonic language: {0}")]
    UnsupportedLanguage(String),

    /// Output format other than raw/mnemonic
    #[error("Unsupported output format: {0}")]
    UnsupportedOutput(String),

    /// Mode-specific required field missing or malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Plaintext handed to the cipher is not 16-byte aligned
    #[error("Plaintext is not a multiple of the block size (got {0} bytes)")]
    PlaintextNotBlockAligned(usize),

    /// Ciphertext shorter than one cipher block
    #[error("Ciphertext too short (got {0} bytes, need at least 16)")]
    CiphertextTooShort(usize),

    /// Key derivation failure
    #[error("Key derivation error: {0}")]
    Kdf(String),

    /// Cipher failure
    #[error("Cipher error: {0}")]
    Cipher(String),

    /// Mnemonic encode/decode failure
    #[error("Mnemonic error: {0}")]
    Mnemonic(String),

    /// Address derivation failure
    #[error("Identity error: {0}")]
    Identity(String),

    /// Malformed hex input
    #[error("Hex error: {source}")]
    InvalidHex {
        #[from]
        source: hex::FromHexError,
    },
}

impl EddyError {
    /// Whether this error is a caller mistake (unsupported value, missing
    /// field) as opposed to an internal derivation/cipher failure.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            EddyError::UnsupportedDifficulty(_)
                | EddyError::UnsupportedCurrency(_)
                | EddyError::UnsupportedLanguage(_)
                | EddyError::UnsupportedOutput(_)
                | EddyError::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_classification() {
        assert!(EddyError::UnsupportedDifficulty("mega".into()).is_bad_request());
        assert!(EddyError::InvalidInput("missing address".into()).is_bad_request());
        assert!(!EddyError::Kdf("params rejected".into()).is_bad_request());
        assert!(!EddyError::CiphertextTooShort(8).is_bad_request());
    }
}
