//! Reference AES implementation for 128, 192 and 256-bit keys.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - GF(2^8) helpers and the S-box tables.
//! - The four round transforms and their inverses.
//! - Key schedule for all three key sizes.
//! - Single-block encryption and decryption.
//!
//! Modes of operation and padding are left to callers. The implementation
//! aims for clarity and testability rather than constant-time guarantees; it
//! should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
pub mod sbox;
mod state;

pub use crate::block::{block_from_slice, Block, Word, BLOCK_LEN};
pub use crate::cipher::{decrypt_block, encrypt_block, expand, expand_key};
pub use crate::error::{Error, Result};
pub use crate::key::{Key, KeySize, RoundKeys};
pub use crate::state::State;
