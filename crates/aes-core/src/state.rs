//! The 4×4 byte state the round transforms operate on.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::block::{xor_in_place, Block, Word, BLOCK_LEN};

/// Four words of four bytes. Word `w` holds block bytes `4w..4w + 4`.
///
/// ShiftRows rotates byte position `r` across the words, MixColumns mixes the
/// bytes within each word. This is the column-major layout of FIPS-197 with
/// words standing in for its columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State(pub [Word; 4]);

impl State {
    /// Splits a block into four consecutive words.
    pub fn from_block(block: &Block) -> Self {
        let mut words = [[0u8; 4]; 4];
        for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
            word.copy_from_slice(chunk);
        }
        Self(words)
    }

    /// Concatenates the words back into a block.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_LEN];
        for (chunk, word) in block.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(word);
        }
        block
    }

    /// Returns word `index` (0..4).
    #[inline]
    pub fn word(&self, index: usize) -> &Word {
        &self.0[index]
    }

    /// XORs `rhs` into `self` word by word.
    #[inline]
    pub fn xor_assign(&mut self, rhs: &State) {
        for (dst, src) in self.0.iter_mut().zip(rhs.0.iter()) {
            xor_in_place(dst, src);
        }
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}
