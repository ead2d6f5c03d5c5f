//! Twistel symmetric block cipher.
//!
//! Twistel is a 16-round Feistel network with a twist-box substitution
//! step and a DES-style key schedule, operated in cipher-block-chaining
//! (CBC) mode with marker padding. It transforms complete in-memory byte
//! buffers; transport concerns (files, base64, clipboards) belong to the
//! caller.
//!
//! The ciphertext format is frozen. Several internals (the shuffled
//! expansion table, the twist box's fixed-position bit reads) are
//! deliberately preserved oddities: buffers encrypted by earlier releases
//! must keep decrypting bit-for-bit.
//!
//! # Architecture
//!
//! ```text
//! utils::bits   (global-bit-index primitives: get/set, extract, rotate,
//!     ↑          permute, pad/unpad; every layer above is built on these)
//! key_schedule  (64-bit master key → sixteen 48-bit round subkeys)
//! feistel       (twist box + round function + 16-round block transform)
//!     ↑
//! Twistel       (orchestrator — CBC chaining, padding, public API)
//! ```
//!
//! # Examples
//!
//! Encrypt, decrypt and verify a buffer:
//!
//! ```
//! use twistel::Twistel;
//!
//! let cipher = Twistel::new();
//! let key = [0x0F, 0x15, 0x71, 0xC9, 0x47, 0xD9, 0xE8, 0x59];
//!
//! let ciphertext = cipher.encrypt(b"Happy cow says: muuuuuuu", &key).unwrap();
//! assert_eq!(ciphertext.len() % 8, 0);
//!
//! let plaintext = cipher.decrypt(&ciphertext, &key).unwrap();
//! assert_eq!(plaintext, b"Happy cow says: muuuuuuu");
//!
//! assert!(cipher.verify(b"Happy cow says: muuuuuuu", &ciphertext, &key).unwrap());
//! ```
//!
//! Keys shorter than 8 bytes are the caller's problem to extend:
//!
//! ```
//! use twistel::{error::TwistelError, Twistel};
//!
//! let cipher = Twistel::new();
//! assert_eq!(
//!     cipher.encrypt(b"data", b"short"),
//!     Err(TwistelError::InvalidKeyLength)
//! );
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod utils;

mod feistel;
mod key_schedule;
mod tables;
mod twistel;

pub use twistel::Twistel;
