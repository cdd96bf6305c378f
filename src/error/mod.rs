//! Error types for the support library
//!
//! A single error enum covers every fallible helper in the crate. Callers that
//! need an HTTP-shaped boundary object convert it into an
//! [`Exception`](crate::exception::Exception).

use thiserror::Error;

/// Main error type for the support library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupportError {
    // Encoding errors

    /// Input was not valid base64
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),

    /// Decoded bytes were not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(String),

    /// URL could not be parsed or resolved
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Cryptographic errors

    /// Password hashing or verification failed
    #[error("Hashing error: {0}")]
    Hashing(String),

    /// Encryption failed
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Decryption failed (bad padding, wrong key or tampered ciphertext)
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// Key length does not match the algorithm
    #[error("Invalid key: expected {expected} bytes, got {actual}")]
    InvalidKey { expected: usize, actual: usize },

    /// IV/nonce length does not match the algorithm
    #[error("Invalid IV: expected {expected} bytes, got {actual}")]
    InvalidIv { expected: usize, actual: usize },

    // Runtime errors

    /// Configuration value could not be parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An event listener failed during emission
    #[error("Listener for '{event}' failed: {message}")]
    Listener { event: String, message: String },

    /// Custom error with message
    #[error("{0}")]
    Custom(String),
}

/// Type alias for Results using `SupportError`
pub type Result<T> = std::result::Result<T, SupportError>;

impl SupportError {
    /// Create a custom error with a message
    pub fn custom<S: Into<String>>(msg: S) -> Self {
        Self::Custom(msg.into())
    }

    /// Check if this error came from a cryptographic routine
    pub const fn is_crypto_error(&self) -> bool {
        matches!(
            self,
            Self::Hashing(_)
                | Self::Encryption(_)
                | Self::Decryption(_)
                | Self::InvalidKey { .. }
                | Self::InvalidIv { .. }
        )
    }

    /// Check if this error was caused by caller-supplied input
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBase64(_)
                | Self::Utf8(_)
                | Self::InvalidUrl(_)
                | Self::InvalidKey { .. }
                | Self::InvalidIv { .. }
        )
    }
}

impl From<serde_json::Error> for SupportError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<std::string::FromUtf8Error> for SupportError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::Utf8(error.to_string())
    }
}

impl From<base64::DecodeError> for SupportError {
    fn from(error: base64::DecodeError) -> Self {
        Self::InvalidBase64(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for SupportError {
    fn from(error: bcrypt::BcryptError) -> Self {
        Self::Hashing(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SupportError::InvalidKey { expected: 16, actual: 3 };
        assert_eq!(err.to_string(), "Invalid key: expected 16 bytes, got 3");

        let err = SupportError::Listener {
            event: "saved".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Listener for 'saved' failed: boom");

        let err = SupportError::custom("Custom error message");
        assert_eq!(err.to_string(), "Custom error message");
    }

    #[test]
    fn test_error_categories() {
        assert!(SupportError::Decryption("bad padding".into()).is_crypto_error());
        assert!(SupportError::InvalidIv { expected: 16, actual: 0 }.is_crypto_error());
        assert!(!SupportError::InvalidUrl("x".into()).is_crypto_error());

        assert!(SupportError::InvalidBase64("x".into()).is_validation_error());
        assert!(SupportError::InvalidKey { expected: 16, actual: 1 }.is_validation_error());
        assert!(!SupportError::Configuration("x".into()).is_validation_error());
    }

    #[test]
    fn test_from_conversions() {
        let err: SupportError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, SupportError::Serialization(_)));

        let err: SupportError = String::from_utf8(vec![0xff, 0xfe]).unwrap_err().into();
        assert!(matches!(err, SupportError::Utf8(_)));
    }
}
