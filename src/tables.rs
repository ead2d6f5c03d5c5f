//! Fixed permutation and constant tables.
//!
//! All tables list 1-based source-bit positions, applied through
//! [`utils::bits::permutation`](crate::utils::bits::permutation). They are
//! baked-in constants: ciphertext produced with these exact values is the
//! compatibility contract, so no entry may change.

/// Initial permutation of a 64-bit block.
#[rustfmt::skip]
pub(crate) const IP: [usize; 64] = [
    58, 50, 42, 34, 26, 18, 10,  2,
    60, 52, 44, 36, 28, 20, 12,  4,
    62, 54, 46, 38, 30, 22, 14,  6,
    64, 56, 48, 40, 32, 24, 16,  8,
    57, 49, 41, 33, 25, 17,  9,  1,
    59, 51, 43, 35, 27, 19, 11,  3,
    61, 53, 45, 37, 29, 21, 13,  5,
    63, 55, 47, 39, 31, 23, 15,  7,
];

/// Final permutation, the inverse of [`IP`].
#[rustfmt::skip]
pub(crate) const IP_INVERSE: [usize; 64] = [
    40,  8, 48, 16, 56, 24, 64, 32,
    39,  7, 47, 15, 55, 23, 63, 31,
    38,  6, 46, 14, 54, 22, 62, 30,
    37,  5, 45, 13, 53, 21, 61, 29,
    36,  4, 44, 12, 52, 20, 60, 28,
    35,  3, 43, 11, 51, 19, 59, 27,
    34,  2, 42, 10, 50, 18, 58, 26,
    33,  1, 41,  9, 49, 17, 57, 25,
];

/// Expansion of a 32-bit half-block to 48 bits by duplicating bits.
///
/// Not the textbook DES expansion: the row order is shuffled. Frozen as-is;
/// "fixing" it would change every ciphertext.
#[rustfmt::skip]
pub(crate) const E: [usize; 48] = [
     9,  8,  9, 10, 11, 12, 13, 20,
    21, 20, 21, 22, 23, 24, 25, 24,
    25, 26, 27, 12, 13, 14, 15, 16,
    17, 16, 17, 32,  1,  2,  3,  4,
     5,  4,  5,  6,  7,  8, 18, 19,
    28, 29, 28, 29, 30, 31, 32,  1,
];

/// Round permutation shuffling the 32-bit substitution output.
#[rustfmt::skip]
pub(crate) const P: [usize; 32] = [
    16,  7, 20, 21, 29, 12, 28, 17,
     1, 15, 23, 26,  5, 18, 31, 10,
     2,  8, 24, 14, 32, 27,  3,  9,
    19, 13, 30,  6, 22, 11,  4, 25,
];

/// Key compression selecting 56 of the 64 master-key bits; the dropped
/// bits (8, 16, ..., 64) are the classic parity positions.
#[rustfmt::skip]
pub(crate) const PC1: [usize; 56] = [
    57, 49, 41, 33, 25, 17,  9,  1,
    58, 50, 42, 34, 26, 18, 10,  2,
    59, 51, 43, 35, 27, 19, 11,  3,
    60, 52, 44, 36, 63, 55, 47, 39,
    31, 23, 15,  7, 62, 54, 46, 38,
    30, 22, 14,  6, 61, 53, 45, 37,
    29, 21, 13,  5, 28, 20, 12,  4,
];

/// Subkey compression selecting 48 of the 56 schedule-state bits per round.
#[rustfmt::skip]
pub(crate) const PC2: [usize; 48] = [
    14, 17, 11, 24,  1,  5,  3, 28,
    15,  6, 21, 10, 23, 19, 12,  4,
    26,  8, 16,  7, 27, 20, 13,  2,
    41, 52, 31, 37, 47, 55, 30, 40,
    51, 45, 33, 48, 44, 49, 39, 56,
    34, 53, 46, 42, 50, 36, 29, 32,
];

/// Per-round left-rotation amounts for the key-schedule halves.
pub(crate) const KEY_SHIFT: [usize; 16] = [1, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 1];

/// Per-group offsets added inside the twist box before the mod-3 selection.
pub(crate) const TWIST_OFFSETS: [u8; 16] = [1, 2, 1, 0, 2, 1, 1, 2, 2, 0, 1, 0, 2, 0, 1, 2];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_inverse_inverts_ip() {
        // IP_INVERSE[IP[i] - 1] == i + 1 for every position.
        for (i, &src) in IP.iter().enumerate() {
            assert_eq!(IP_INVERSE[src - 1], i + 1, "position {}", i);
        }
    }

    #[test]
    fn test_table_entries_in_range() {
        assert!(IP.iter().all(|&v| (1..=64).contains(&v)));
        assert!(IP_INVERSE.iter().all(|&v| (1..=64).contains(&v)));
        assert!(E.iter().all(|&v| (1..=32).contains(&v)));
        assert!(P.iter().all(|&v| (1..=32).contains(&v)));
        assert!(PC1.iter().all(|&v| (1..=64).contains(&v)));
        assert!(PC2.iter().all(|&v| (1..=56).contains(&v)));
    }

    #[test]
    fn test_pc1_drops_parity_bits() {
        for parity in [8, 16, 24, 32, 40, 48, 56, 64] {
            assert!(!PC1.contains(&parity), "parity bit {} selected", parity);
        }
    }

    #[test]
    fn test_key_shift_totals_full_rotation() {
        // Sixteen rounds rotate each 28-bit half by a full turn.
        assert_eq!(KEY_SHIFT.iter().sum::<usize>(), 28);
        assert!(KEY_SHIFT.iter().all(|&s| s == 1 || s == 2));
    }

    #[test]
    fn test_twist_offsets_range() {
        assert!(TWIST_OFFSETS.iter().all(|&v| v <= 2));
    }
}
