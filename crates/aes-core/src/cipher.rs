//! AES key schedule and block encryption/decryption.

use crate::block::{block_from_slice, xor_in_place, Block, Word};
use crate::error::Result;
use crate::key::{Key, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sub_word, RCON};
use crate::state::State;

fn rot_word(word: Word) -> Word {
    let [a, b, c, d] = word;
    [b, c, d, a]
}

/// Expands validated key material into `Nr + 1` round keys.
pub fn expand(key: &Key) -> RoundKeys {
    let size = key.size();
    let nk = size.words();
    let total = 4 * size.round_keys();

    let mut w: Vec<Word> = Vec::with_capacity(total);
    for chunk in key.as_bytes().chunks_exact(4) {
        let mut word = [0u8; 4];
        word.copy_from_slice(chunk);
        w.push(word);
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / nk - 1];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        xor_in_place(&mut temp, &w[i - nk]);
        w.push(temp);
    }

    let keys = w
        .chunks_exact(4)
        .map(|chunk| State([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    RoundKeys::from_parts(size, keys)
}

/// Expands a 16, 24 or 32 byte key into its round keys.
pub fn expand_key(key: &[u8]) -> Result<RoundKeys> {
    Ok(expand(&Key::new(key)?))
}

/// Encrypts one 16-byte block under a 16, 24 or 32 byte key.
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice(plaintext)?;
    Ok(expand_key(key)?.encrypt(&block))
}

/// Decrypts one 16-byte block under a 16, 24 or 32 byte key.
pub fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice(ciphertext)?;
    Ok(expand_key(key)?.decrypt(&block))
}

impl RoundKeys {
    /// Encrypts a single block with this schedule.
    pub fn encrypt(&self, block: &Block) -> Block {
        let nr = self.rounds();
        let mut state = State::from_block(block);

        add_round_key(&mut state, self.get(0));
        for round in 1..nr {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, self.get(round));
        }
        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, self.get(nr));

        state.to_block()
    }

    /// Decrypts a single block with this schedule.
    pub fn decrypt(&self, block: &Block) -> Block {
        let nr = self.rounds();
        let mut state = State::from_block(block);

        add_round_key(&mut state, self.get(nr));
        for round in (1..nr).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, self.get(round));
            inv_mix_columns(&mut state);
        }
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, self.get(0));

        state.to_block()
    }
}
