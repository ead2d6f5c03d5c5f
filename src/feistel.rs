//! Feistel block transform: twist-box substitution, round function, and the
//! 16-round network over one 64-bit block.
//!
//! A single [`transform`] serves both directions, parameterized only by the
//! order in which the round subkeys are consumed. Everything here is pure:
//! no state survives a call.

use crate::key_schedule::SubKeys;
use crate::tables::{E, IP, IP_INVERSE, P, TWIST_OFFSETS};
use crate::utils::bits;

/// Bits in each Feistel half-block.
const HALF_BITS: usize = 32;

/// Number of Feistel rounds.
const ROUNDS: usize = 16;

/// Narrows 48 bits to 32 via the twist-box substitution.
///
/// The input is unpacked into sixteen 3-bit groups, one byte each. Group `k`
/// has `TWIST_OFFSETS[k]` added in place; the sum modulo 3 selects which two
/// bits to emit at output positions `2k` and `2k + 1`.
///
/// The emitted bits are read from global positions 5, 6 and 7 of the
/// unpacked group array (byte 0's low three bits) for every group, after
/// group 0's offset has already been applied. Ciphertext compatibility
/// depends on this exact read pattern; a group-relative read would be a
/// different cipher.
fn twist_box(input: &[u8]) -> Vec<u8> {
    let mut groups = bits::unpack_triplets(input);
    let mut result = vec![0u8; HALF_BITS / 8];

    for k in 0..groups.len() {
        groups[k] += TWIST_OFFSETS[k];
        let (first, second) = match groups[k] % 3 {
            0 => (7, 6),
            1 => (7, 5),
            _ => (6, 5),
        };
        bits::set_bit(&mut result, 2 * k, bits::get_bit(&groups, first));
        bits::set_bit(&mut result, 2 * k + 1, bits::get_bit(&groups, second));
    }
    result
}

/// The round function F.
///
/// Expands the 32-bit half-block to 48 bits, mixes in the round subkey,
/// narrows back to 32 bits through the twist box, and permutes the result.
fn round_function(r: &[u8], subkey: &[u8; 6]) -> Vec<u8> {
    let expanded = bits::permutation(r, &E);
    let mixed = bits::xor(&expanded, subkey);
    let substituted = twist_box(&mixed);
    bits::permutation(&substituted, &P)
}

/// Transforms one 64-bit block through the full Feistel network.
///
/// Applies the initial permutation, runs 16 rounds of
/// `(L, R) <- (R, L XOR F(R, k))`, concatenates R‖L without a final swap,
/// and applies the inverse permutation. With `decrypt` set, the subkeys are
/// consumed in reverse order; nothing else differs between directions, so
/// `transform(transform(b, keys, false), keys, true) == b` for any block.
pub(crate) fn transform(block: &[u8; 8], subkeys: &SubKeys, decrypt: bool) -> [u8; 8] {
    let permuted = bits::permutation(block, &IP);
    let mut l = bits::get_bits(&permuted, 0, HALF_BITS);
    let mut r = bits::get_bits(&permuted, HALF_BITS, HALF_BITS);

    for round in 0..ROUNDS {
        let subkey = if decrypt {
            &subkeys[ROUNDS - 1 - round]
        } else {
            &subkeys[round]
        };
        let new_r = bits::xor(&l, &round_function(&r, subkey));
        l = r;
        r = new_r;
    }

    let combined = bits::concatenate_bits(&r, HALF_BITS, &l, HALF_BITS);
    let mut result = [0u8; 8];
    result.copy_from_slice(&bits::permutation(&combined, &IP_INVERSE));
    result
}
