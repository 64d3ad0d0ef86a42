//! Difficulty tiers and their KDF cost parameters.
//!
//! Each tier maps to one Argon2id parameter set and one scrypt parameter
//! set. Each step up roughly doubles Argon2 time and memory cost (4
//! iterations / 256 MiB at `minimum` up to 128 iterations / 8 GiB at
//! `ridiculously_strong`) and doubles the scrypt cost factor N (2^18 up to
//! 2^23). An unrecognized tier is rejected, never silently substituted.

use std::fmt;
use std::str::FromStr;

use crate::error::EddyError;

/// Length of each derived output in bytes (256-bit key material).
pub const OUTPUT_LEN: usize = 32;

/// Argon2 lanes; fixed across all tiers.
const ARGON2_PARALLELISM: u32 = 4;

/// scrypt block size and parallelism; fixed across all tiers.
const SCRYPT_BLOCK_SIZE: u32 = 8;
const SCRYPT_PARALLELISM: u32 = 1;

/// Named KDF cost level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Minimum,
    Low,
    Normal,
    Strong,
    SuperStrong,
    RidiculouslyStrong,
}

/// Cost parameters for the Argon2id call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Cost {
    /// Iteration count (time cost)
    pub time_cost: u32,
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Lane count
    pub parallelism: u32,
    /// Output length in bytes
    pub output_len: usize,
}

/// Cost parameters for the scrypt call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScryptCost {
    /// log2 of the cost factor N
    pub log_n: u8,
    /// Block size r
    pub block_size: u32,
    /// Parallelism p
    pub parallelism: u32,
    /// Output length in bytes
    pub output_len: usize,
}

impl Difficulty {
    /// All supported tiers, weakest first.
    pub const ALL: [Difficulty; 6] = [
        Difficulty::Minimum,
        Difficulty::Low,
        Difficulty::Normal,
        Difficulty::Strong,
        Difficulty::SuperStrong,
        Difficulty::RidiculouslyStrong,
    ];

    /// Argon2id cost parameters for this tier.
    pub fn argon2_cost(self) -> Argon2Cost {
        let (time_cost, memory_kib) = match self {
            Difficulty::Minimum => (4, 256 * 1024),
            Difficulty::Low => (8, 512 * 1024),
            Difficulty::Normal => (16, 1024 * 1024),
            Difficulty::Strong => (32, 2048 * 1024),
            Difficulty::SuperStrong => (64, 4096 * 1024),
            Difficulty::RidiculouslyStrong => (128, 8192 * 1024),
        };
        Argon2Cost {
            time_cost,
            memory_kib,
            parallelism: ARGON2_PARALLELISM,
            output_len: OUTPUT_LEN,
        }
    }

    /// scrypt cost parameters for this tier.
    pub fn scrypt_cost(self) -> ScryptCost {
        let log_n = match self {
            Difficulty::Minimum => 18,
            Difficulty::Low => 19,
            Difficulty::Normal => 20,
            Difficulty::Strong => 21,
            Difficulty::SuperStrong => 22,
            Difficulty::RidiculouslyStrong => 23,
        };
        ScryptCost {
            log_n,
            block_size: SCRYPT_BLOCK_SIZE,
            parallelism: SCRYPT_PARALLELISM,
            output_len: OUTPUT_LEN,
        }
    }
}

impl FromStr for Difficulty {
    type Err = EddyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimum" => Ok(Difficulty::Minimum),
            "low" => Ok(Difficulty::Low),
            "normal" => Ok(Difficulty::Normal),
            "strong" => Ok(Difficulty::Strong),
            "super_strong" => Ok(Difficulty::SuperStrong),
            "ridiculously_strong" => Ok(Difficulty::RidiculouslyStrong),
            other => Err(EddyError::UnsupportedDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Minimum => "minimum",
            Difficulty::Low => "low",
            Difficulty::Normal => "normal",
            Difficulty::Strong => "strong",
            Difficulty::SuperStrong => "super_strong",
            Difficulty::RidiculouslyStrong => "ridiculously_strong",
        };
        f.write_str(name)
    }
}
