//! # Eddy Core
//!
//! Core library for Eddy - a deterministic, passphrase-based cryptocurrency
//! wallet backup and recovery tool.
//!
//! The same passphrase, salt, currency, and difficulty always reproduce the
//! same wallet: Eddy is password-based wallet *recovery*, not random key
//! generation. Nothing is persisted; every invocation is a pure function
//! from its inputs to a secret, a ciphertext, or a verification verdict.
//!
//! ## Architecture
//!
//! - **kdf**: difficulty tiers and the dual-KDF (Argon2id + scrypt)
//!   derivation with per-currency domain separation
//! - **crypto**: AES-256-CBC cipher contract (no padding, no auth tag)
//! - **identity**: secp256k1 → Keccak-256 Ethereum-form addresses
//! - **mnemonic**: BIP-39 encoding/decoding with explicit wordlist selection
//! - **wallet**: the generate / encrypt / decrypt operations and the
//!   address-based verification protocol

pub mod crypto;
pub mod currency;
pub mod error;
pub mod identity;
pub mod kdf;
pub mod mnemonic;
pub mod wallet;

pub use currency::Currency;
pub use error::{EddyError, Result};
pub use kdf::difficulty::Difficulty;
pub use mnemonic::Language;
pub use wallet::{OutputFormat, WalletRequest};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
