//! Block and word representation helpers.

use core::convert::TryInto;

use crate::error::{Error, Result};

/// Number of bytes in one AES block.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_LEN];

/// Four bytes of key schedule or state.
pub type Word = [u8; 4];

/// Copies `bytes` into a [`Block`], rejecting anything that is not exactly 16 bytes.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength(bytes.len()))
}

/// XORs two words, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Word, rhs: &Word) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
