//! Twistel: 16-round Feistel cipher in cipher-block-chaining mode.
//!
//! Orchestrates the key schedule, the Feistel block transform, and CBC
//! chaining with marker padding over arbitrary-length byte buffers.

use crate::error::TwistelError;
use crate::feistel;
use crate::key_schedule::derive_subkeys;
use crate::utils::bits;

/// Block size in bytes.
const BLOCK_SIZE: usize = 8;

/// Master key size in bytes.
const KEY_SIZE: usize = 8;

/// First padding byte; the zero bytes that follow it fill the block.
const PAD_MARKER: u8 = 0x80;

/// Default initialization vector: eight `0x55` bytes (`01010101...`).
const DEFAULT_IV: [u8; 8] = [0x55; 8];

/// Feistel block cipher operating in CBC mode on byte buffers.
///
/// The only configuration is the initialization vector; the permutation
/// tables, round count and padding scheme are fixed constants. Subkeys
/// are derived inside each call from the key argument and dropped when the
/// call returns, so a single instance may serve concurrent callers working
/// on independent buffers.
///
/// # Examples
///
/// Encrypt and decrypt a buffer:
///
/// ```
/// use twistel::Twistel;
///
/// let cipher = Twistel::new();
/// let key = [0x01u8; 8];
///
/// let ciphertext = cipher.encrypt(b"attack at dawn", &key).unwrap();
/// let plaintext = cipher.decrypt(&ciphertext, &key).unwrap();
/// assert_eq!(plaintext, b"attack at dawn");
/// ```
///
/// Supply a custom IV for a hardened mode:
///
/// ```
/// use twistel::Twistel;
///
/// let cipher = Twistel::with_iv([0xA7, 0x3C, 0x55, 0x01, 0xEE, 0x42, 0x90, 0x18]);
/// let key = [0x01u8; 8];
/// let ciphertext = cipher.encrypt(b"attack at dawn", &key).unwrap();
/// assert_eq!(cipher.decrypt(&ciphertext, &key).unwrap(), b"attack at dawn");
/// ```
pub struct Twistel {
    iv: [u8; 8],
}

impl Default for Twistel {
    fn default() -> Self {
        Self::new()
    }
}

impl Twistel {
    /// Creates a cipher with the fixed default IV.
    ///
    /// The default IV is a compile-time constant, so identical plaintext
    /// prefixes encrypted under the same key produce identical ciphertext
    /// prefixes across messages. Callers that need to avoid this supply a
    /// fresh IV through [`with_iv`](Self::with_iv).
    pub fn new() -> Self {
        Twistel { iv: DEFAULT_IV }
    }

    /// Creates a cipher with a caller-supplied IV.
    ///
    /// # Parameters
    /// - `iv`: The 8-byte initialization vector for the first block.
    ///   Decryption must use the same IV the ciphertext was produced with.
    pub fn with_iv(iv: [u8; 8]) -> Self {
        Twistel { iv }
    }

    /// Returns the IV this instance chains the first block with.
    pub fn iv(&self) -> [u8; 8] {
        self.iv
    }

    /// Encrypts a buffer of any length.
    ///
    /// Padding (one marker byte, then zeros, 1–8 bytes total) extends the
    /// plaintext to a multiple of the block size; each padded block is
    /// XORed with the running IV and transformed, and its ciphertext
    /// becomes the IV for the next block.
    ///
    /// # Parameters
    /// - `plaintext`: The bytes to encrypt; may be empty.
    /// - `key`: The 8-byte master key. Shorter key material must be
    ///   zero-padded to 8 bytes by the caller.
    ///
    /// # Returns
    /// The ciphertext: `plaintext.len() + pad` bytes, `pad` in 1..=8.
    ///
    /// # Errors
    /// Returns [`TwistelError::InvalidKeyLength`] if `key` is not exactly
    /// 8 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use twistel::Twistel;
    ///
    /// let cipher = Twistel::new();
    /// let ciphertext = cipher.encrypt(b"cat", &[0x01; 8]).unwrap();
    /// assert_eq!(ciphertext.len(), 8);
    /// ```
    pub fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>, TwistelError> {
        let key = Self::master_key(key)?;
        let subkeys = derive_subkeys(&key);

        let pad_len = BLOCK_SIZE - plaintext.len() % BLOCK_SIZE;
        let mut padded = Vec::with_capacity(plaintext.len() + pad_len);
        padded.extend_from_slice(plaintext);
        padded.push(PAD_MARKER);
        padded.resize(plaintext.len() + pad_len, 0);

        let mut iv = self.iv;
        let mut ciphertext = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(&bits::xor(chunk, &iv));
            let encrypted = feistel::transform(&block, &subkeys, false);
            ciphertext.extend_from_slice(&encrypted);
            iv = encrypted;
        }
        Ok(ciphertext)
    }

    /// Decrypts a buffer produced by [`encrypt`](Self::encrypt).
    ///
    /// Each ciphertext block is transformed with the subkeys reversed and
    /// XORed with the running IV; the ciphertext block itself becomes the
    /// IV for the next one. The marker padding is stripped from the result.
    ///
    /// # Parameters
    /// - `ciphertext`: The bytes to decrypt; length must be a positive
    ///   multiple of 8.
    /// - `key`: The 8-byte master key used for encryption.
    ///
    /// # Returns
    /// The recovered plaintext.
    ///
    /// # Errors
    /// - [`TwistelError::InvalidKeyLength`] if `key` is not exactly 8 bytes.
    /// - [`TwistelError::InvalidCiphertextLength`] if the ciphertext is
    ///   empty or not block-aligned.
    /// - [`TwistelError::EmptyInput`] if the decrypted buffer holds no
    ///   marker byte (wrong key or corrupted ciphertext decrypting to all
    ///   zeros).
    ///
    /// # Examples
    ///
    /// ```
    /// use twistel::{error::TwistelError, Twistel};
    ///
    /// let cipher = Twistel::new();
    /// assert_eq!(
    ///     cipher.decrypt(&[0u8; 11], &[0x01; 8]),
    ///     Err(TwistelError::InvalidCiphertextLength)
    /// );
    /// ```
    pub fn decrypt(&self, ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>, TwistelError> {
        let key = Self::master_key(key)?;
        if ciphertext.is_empty() || !ciphertext.len().is_multiple_of(BLOCK_SIZE) {
            return Err(TwistelError::InvalidCiphertextLength);
        }
        let subkeys = derive_subkeys(&key);

        let mut iv = self.iv;
        let mut plaintext = Vec::with_capacity(ciphertext.len());
        for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            let decrypted = feistel::transform(&block, &subkeys, true);
            plaintext.extend_from_slice(&bits::xor(&decrypted, &iv));
            iv = block;
        }

        let payload_len = bits::remove_padding(&plaintext)?.len();
        plaintext.truncate(payload_len);
        Ok(plaintext)
    }

    /// Checks that a ciphertext decrypts back to the given plaintext.
    ///
    /// # Returns
    /// `Ok(true)` only on an exact length and content match.
    ///
    /// # Errors
    /// Propagates any [`decrypt`](Self::decrypt) failure; a successful
    /// decrypt that does not match yields `Ok(false)`, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use twistel::Twistel;
    ///
    /// let cipher = Twistel::new();
    /// let key = [0x2B; 8];
    /// let ciphertext = cipher.encrypt(b"muuuuuuu", &key).unwrap();
    ///
    /// assert!(cipher.verify(b"muuuuuuu", &ciphertext, &key).unwrap());
    /// assert!(!cipher.verify(b"muuuuuuX", &ciphertext, &key).unwrap());
    /// ```
    pub fn verify(
        &self,
        plaintext: &[u8],
        ciphertext: &[u8],
        key: &[u8],
    ) -> Result<bool, TwistelError> {
        let recovered = self.decrypt(ciphertext, key)?;
        Ok(recovered == plaintext)
    }

    /// Validates and copies the caller's key material.
    fn master_key(key: &[u8]) -> Result<[u8; 8], TwistelError> {
        if key.len() != KEY_SIZE {
            return Err(TwistelError::InvalidKeyLength);
        }
        let mut master = [0u8; KEY_SIZE];
        master.copy_from_slice(key);
        Ok(master)
    }
}
