//! Round-subkey derivation from the 64-bit master key.
//!
//! Replicates the DES key-schedule structure: PC1 compression, two 28-bit
//! halves rotated per round, PC2 compression of each rotated state into a
//! 48-bit subkey.

use crate::tables::{KEY_SHIFT, PC1, PC2};
use crate::utils::bits;

/// The sixteen 48-bit round subkeys, in encryption order.
pub(crate) type SubKeys = [[u8; 6]; 16];

/// Number of bits in each key-schedule half.
const HALF_BITS: usize = 28;

/// Derives the sixteen round subkeys from an 8-byte master key.
///
/// PC1 selects 56 of the 64 key bits; the result is split into halves C
/// and D. Each round rotates both halves left by that round's shift amount
/// (rotations accumulate across rounds) and compresses C‖D through PC2.
///
/// Encryption consumes the subkeys in index order; decryption consumes
/// them reversed. That ordering is the only difference between the two
/// block transforms.
pub(crate) fn derive_subkeys(key: &[u8; 8]) -> SubKeys {
    let compressed = bits::permutation(key, &PC1);
    let mut c = bits::get_bits(&compressed, 0, HALF_BITS);
    let mut d = bits::get_bits(&compressed, HALF_BITS, HALF_BITS);

    let mut subkeys: SubKeys = [[0u8; 6]; 16];
    for (round, subkey) in subkeys.iter_mut().enumerate() {
        c = bits::left_rotation(&c, HALF_BITS, KEY_SHIFT[round]);
        d = bits::left_rotation(&d, HALF_BITS, KEY_SHIFT[round]);
        let cd = bits::concatenate_bits(&c, HALF_BITS, &d, HALF_BITS);
        subkey.copy_from_slice(&bits::permutation(&cd, &PC2));
    }
    subkeys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let key = [0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1];
        assert_eq!(derive_subkeys(&key), derive_subkeys(&key));
    }

    #[test]
    fn test_subkeys_differ_across_rounds() {
        let key = [0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1];
        let subkeys = derive_subkeys(&key);
        for i in 0..16 {
            for j in (i + 1)..16 {
                assert_ne!(subkeys[i], subkeys[j], "subkeys {} and {} collide", i, j);
            }
        }
    }

    #[test]
    fn test_all_zero_key_yields_identical_subkeys() {
        // Rotating an all-zero half changes nothing, so every round
        // compresses the same state.
        let subkeys = derive_subkeys(&[0u8; 8]);
        for subkey in &subkeys[1..] {
            assert_eq!(*subkey, subkeys[0]);
        }
        assert_eq!(subkeys[0], [0u8; 6]);
    }

    #[test]
    fn test_last_round_restores_halves() {
        // The shift schedule sums to 28, a full turn of each half, so the
        // final subkey equals PC2 applied to the unrotated C‖D state.
        let key = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
        let compressed = bits::permutation(&key, &PC1);
        let c = bits::get_bits(&compressed, 0, HALF_BITS);
        let d = bits::get_bits(&compressed, HALF_BITS, HALF_BITS);
        let cd = bits::concatenate_bits(&c, HALF_BITS, &d, HALF_BITS);
        let expected = bits::permutation(&cd, &PC2);

        let subkeys = derive_subkeys(&key);
        assert_eq!(subkeys[15].as_slice(), expected.as_slice());
    }

    #[test]
    fn test_parity_bits_ignored() {
        // PC1 never reads bits 8, 16, ..., 64, so flipping them cannot
        // change any subkey.
        let base = [0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1];
        let mut flipped = base;
        for byte in flipped.iter_mut() {
            *byte ^= 0x01;
        }
        assert_eq!(derive_subkeys(&base), derive_subkeys(&flipped));
    }
}
