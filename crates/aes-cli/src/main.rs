//! Command-line interface for `aes-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::{block_from_slice, expand, Block, Key, KeySize, RoundKeys};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Single-block AES CLI.
#[derive(Parser)]
#[command(name = "aes", version, author, about = "Single-block AES-128/192/256 CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the round keys come from.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeySource {
    /// AES key as 32, 48 or 64 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
    /// Schedule previously written by `expand --out`.
    #[arg(long, value_name = "FILE")]
    schedule: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Enc {
        #[command(flatten)]
        key: KeySource,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block.
    Dec {
        #[command(flatten)]
        key: KeySource,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the round keys derived from a key, optionally saving the schedule.
    Expand {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Output path for the serialized schedule.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Verify encrypt/decrypt round trips on random keys and blocks.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Key size in bits (128, 192 or 256). Defaults to cycling all three.
        #[arg(long, value_name = "BITS")]
        key_bits: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { key, block_hex } => {
            let round_keys = load_round_keys(&key)?;
            let block = parse_block_hex(&block_hex)?;
            println!("{}", hex::encode(round_keys.encrypt(&block)));
            Ok(())
        }
        Commands::Dec { key, block_hex } => {
            let round_keys = load_round_keys(&key)?;
            let block = parse_block_hex(&block_hex)?;
            println!("{}", hex::encode(round_keys.decrypt(&block)));
            Ok(())
        }
        Commands::Expand { key_hex, out } => cmd_expand(&key_hex, out.as_deref()),
        Commands::Check {
            samples,
            seed,
            key_bits,
        } => {
            let sizes = key_sizes(key_bits)?;
            let checked = cmd_check(samples, seed, &sizes)?;
            println!("{checked} round trips ok");
            Ok(())
        }
    }
}

fn cmd_expand(key_hex: &str, out: Option<&Path>) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let round_keys = expand(&key);
    for (round, block) in round_keys.to_blocks().iter().enumerate() {
        println!("round {round:2}: {}", hex::encode(block));
    }
    if let Some(path) = out {
        save_schedule(&round_keys, path)?;
    }
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>, sizes: &[KeySize]) -> Result<usize> {
    let mut rng = seeded_rng(seed);
    for i in 0..samples {
        let size = sizes[i % sizes.len()];
        let mut key_bytes = vec![0u8; size.key_len()];
        rng.fill_bytes(&mut key_bytes);
        let round_keys = expand(&Key::new(&key_bytes)?);

        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        let ciphertext = round_keys.encrypt(&block);
        if round_keys.decrypt(&ciphertext) != block {
            bail!(
                "{size} round trip failed for key {} block {}",
                hex::encode(&key_bytes),
                hex::encode(block)
            );
        }
    }
    Ok(samples)
}

fn key_sizes(bits: Option<usize>) -> Result<Vec<KeySize>> {
    match bits {
        None => Ok(vec![KeySize::Aes128, KeySize::Aes192, KeySize::Aes256]),
        Some(bits) if bits % 8 == 0 => Ok(vec![KeySize::from_len(bits / 8)
            .with_context(|| format!("unsupported key size {bits}"))?]),
        Some(bits) => bail!("unsupported key size {bits}"),
    }
}

fn load_round_keys(source: &KeySource) -> Result<RoundKeys> {
    match (&source.key_hex, &source.schedule) {
        (Some(key_hex), _) => Ok(expand(&parse_key_hex(key_hex)?)),
        (None, Some(path)) => load_schedule(path),
        (None, None) => bail!("either --key-hex or --schedule is required"),
    }
}

fn parse_key_hex(hex_str: &str) -> Result<Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Key::new(&bytes).context("AES key must be 16, 24 or 32 bytes (32, 48 or 64 hex characters)")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    block_from_slice(&bytes).context("block must be 16 bytes (32 hex characters)")
}

fn save_schedule(round_keys: &RoundKeys, path: &Path) -> Result<()> {
    let bytes = bincode::serialize(round_keys).context("serialize schedule")?;
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

fn load_schedule(path: &Path) -> Result<RoundKeys> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    bincode::deserialize(&bytes).with_context(|| format!("deserialize schedule {}", path.display()))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}
