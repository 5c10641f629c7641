//! AES round transformations.
//!
//! All transforms mutate a [`State`] in place and each has an inverse;
//! AddRoundKey is its own inverse.

use crate::block::Word;
use crate::gf::{mul_09, mul_0b, mul_0d, mul_0e, xtime};
use crate::sbox::{inv_sbox, sbox};
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.0.iter_mut().flatten() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.0.iter_mut().flatten() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: byte position `r` of every word moves `r`
/// words towards the front. Position 0 stays put.
#[inline]
pub fn shift_rows(state: &mut State) {
    let old = state.0;
    for (w, word) in state.0.iter_mut().enumerate() {
        for (r, byte) in word.iter_mut().enumerate().skip(1) {
            *byte = old[(w + r) % 4][r];
        }
    }
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    let old = state.0;
    for (w, word) in state.0.iter_mut().enumerate() {
        for (r, byte) in word.iter_mut().enumerate().skip(1) {
            *byte = old[(w + 4 - r) % 4][r];
        }
    }
}

fn mix_single_column(col: &mut Word) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

fn inv_mix_single_column(col: &mut Word) {
    let [a0, a1, a2, a3] = *col;
    col[0] = mul_0e(a0) ^ mul_0b(a1) ^ mul_0d(a2) ^ mul_09(a3);
    col[1] = mul_09(a0) ^ mul_0e(a1) ^ mul_0b(a2) ^ mul_0d(a3);
    col[2] = mul_0d(a0) ^ mul_09(a1) ^ mul_0e(a2) ^ mul_0b(a3);
    col[3] = mul_0b(a0) ^ mul_0d(a1) ^ mul_09(a2) ^ mul_0e(a3);
}

/// MixColumns over all four words.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in state.0.iter_mut() {
        mix_single_column(col);
    }
}

/// Inverse MixColumns over all four words, using the 0e/0b/0d/09 matrix.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in state.0.iter_mut() {
        inv_mix_single_column(col);
    }
}

/// Inverse MixColumns computed as a cheap pre-conditioning step followed by
/// forward MixColumns. Produces the same output as [`inv_mix_columns`].
pub fn inv_mix_columns_fast(state: &mut State) {
    for col in state.0.iter_mut() {
        let u = xtime(xtime(col[0] ^ col[2]));
        let v = xtime(xtime(col[1] ^ col[3]));
        col[0] ^= u;
        col[1] ^= v;
        col[2] ^= u;
        col[3] ^= v;
    }
    mix_columns(state);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    state.xor_assign(round_key);
}
