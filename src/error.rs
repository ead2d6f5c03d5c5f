//! Error types for the Twistel library.

use std::fmt;

/// Errors produced by the Twistel library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TwistelError {
    /// Key buffer is not exactly 8 bytes long.
    InvalidKeyLength,
    /// Ciphertext length is zero or not a multiple of the 8-byte block size.
    InvalidCiphertextLength,
    /// Buffer holds no marker byte, so there is no payload to recover.
    EmptyInput,
}

impl fmt::Display for TwistelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwistelError::InvalidKeyLength => {
                write!(f, "Key must be exactly 8 bytes long")
            }
            TwistelError::InvalidCiphertextLength => {
                write!(
                    f,
                    "Ciphertext length must be a positive multiple of 8 bytes"
                )
            }
            TwistelError::EmptyInput => {
                write!(f, "Buffer contains no marker byte")
            }
        }
    }
}

impl std::error::Error for TwistelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key_length() {
        let err = TwistelError::InvalidKeyLength;
        assert_eq!(format!("{}", err), "Key must be exactly 8 bytes long");
    }

    #[test]
    fn test_display_invalid_ciphertext_length() {
        let err = TwistelError::InvalidCiphertextLength;
        assert_eq!(
            format!("{}", err),
            "Ciphertext length must be a positive multiple of 8 bytes"
        );
    }

    #[test]
    fn test_display_empty_input() {
        let err = TwistelError::EmptyInput;
        assert_eq!(format!("{}", err), "Buffer contains no marker byte");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(TwistelError::InvalidKeyLength, TwistelError::InvalidKeyLength);
        assert_ne!(
            TwistelError::InvalidKeyLength,
            TwistelError::InvalidCiphertextLength
        );
    }

    #[test]
    fn test_error_clone() {
        let err = TwistelError::EmptyInput;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
