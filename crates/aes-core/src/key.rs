//! Key material and expanded round keys for AES-128/192/256.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::block::{Block, Word};
use crate::error::{Error, Result};
use crate::state::State;

/// The three key lengths AES accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeySize {
    /// 16-byte key, 10 rounds.
    Aes128,
    /// 24-byte key, 12 rounds.
    Aes192,
    /// 32-byte key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Maps a key length in bytes to its key size.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(Error::InvalidKeyLength(other)),
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.words() * 4
    }

    /// Number of 4-byte words the key contributes to the schedule (`Nk`).
    pub const fn words(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        self.words() + 6
    }

    /// Number of round keys in the schedule (`Nr + 1`).
    pub const fn round_keys(self) -> usize {
        self.rounds() + 1
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.key_len() * 8)
    }
}

/// Validated AES key material.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Key {
    size: KeySize,
    bytes: [u8; 32],
}

impl Key {
    /// Copies `bytes` into a key, rejecting lengths other than 16, 24 or 32.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let size = KeySize::from_len(bytes.len())?;
        let mut buf = [0u8; 32];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { size, bytes: buf })
    }

    /// Key size derived from the input length.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.key_len()]
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").field("size", &self.size).finish_non_exhaustive()
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::new(value)
    }
}

macro_rules! key_from_array {
    ($($len:literal),*) => {$(
        impl From<[u8; $len]> for Key {
            fn from(value: [u8; $len]) -> Self {
                let mut bytes = [0u8; 32];
                bytes[..$len].copy_from_slice(&value);
                Self {
                    size: match $len {
                        16 => KeySize::Aes128,
                        24 => KeySize::Aes192,
                        _ => KeySize::Aes256,
                    },
                    bytes,
                }
            }
        }
    )*};
}

key_from_array!(16, 24, 32);

/// Expanded round keys, one per round plus the initial whitening key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRoundKeys"))]
pub struct RoundKeys {
    size: KeySize,
    keys: Vec<State>,
}

/// Unchecked wire form of [`RoundKeys`]; converted only if the count matches the key size.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRoundKeys {
    size: KeySize,
    keys: Vec<State>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRoundKeys> for RoundKeys {
    type Error = Error;

    fn try_from(raw: RawRoundKeys) -> Result<Self> {
        let expected = raw.size.round_keys();
        if raw.keys.len() != expected {
            return Err(Error::InvalidScheduleLength {
                expected,
                actual: raw.keys.len(),
            });
        }
        Ok(Self::from_parts(raw.size, raw.keys))
    }
}

impl RoundKeys {
    pub(crate) fn from_parts(size: KeySize, keys: Vec<State>) -> Self {
        debug_assert_eq!(keys.len(), size.round_keys());
        Self { size, keys }
    }

    /// Key size the schedule was derived from.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (`Nr`).
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Number of round keys (`Nr + 1`).
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false: construction guarantees `Nr + 1` round keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the round key at the requested index (`0..=Nr`).
    #[inline]
    pub fn get(&self, round: usize) -> &State {
        &self.keys[round]
    }

    /// Iterates over the round keys in order.
    pub fn iter(&self) -> impl Iterator<Item = &State> + '_ {
        self.keys.iter()
    }

    /// Iterates over the schedule's words (`4 × (Nr + 1)` of them).
    pub fn words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.keys
            .iter()
            .flat_map(|k| (0..4).map(move |i| k.word(i)))
    }

    /// Round keys as flat blocks.
    pub fn to_blocks(&self) -> Vec<Block> {
        self.keys.iter().map(State::to_block).collect()
    }
}
