//! Dual-KDF key material derivation with domain separation.
//!
//! Two independent memory-hard KDFs run over the passphrase and salt:
//! Argon2id produces the AES key, scrypt produces a secondary 32-byte
//! buffer (the cipher "input"). Before each call, one character derived
//! from `currency_code + kdf_discriminant` is appended to both the
//! passphrase and the salt, so the same base secret yields independent
//! material per currency and per KDF role.
//!
//! Known weakness, kept for ciphertext compatibility: the suffix character
//! space is tiny and adjacent currency/KDF combinations collide (e.g.
//! bitcoin+scrypt and ethereum+argon2 share a suffix). The two KDF outputs
//! still differ because the algorithms differ, but the suffix is not a
//! cryptographically sound separator.

pub mod difficulty;

use argon2::Argon2;
use zeroize::ZeroizeOnDrop;

use crate::currency::Currency;
use crate::error::{EddyError, Result};
use crate::kdf::difficulty::{Difficulty, OUTPUT_LEN};

/// Length of the derived initialization vector in bytes.
pub const IV_LEN: usize = 16;

/// The two KDF roles, with their protocol discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum KdfRole {
    /// Argon2id; derives the AES key
    Argon2 = 0,
    /// scrypt; derives the cipher input buffer
    Scrypt = 1,
}

/// Append the domain-separation character for a currency/role pair.
fn with_domain_suffix(base: &str, currency: Currency, role: KdfRole) -> String {
    let mut out = String::with_capacity(base.len() + 1);
    out.push_str(base);
    out.push(char::from(currency.code() + role as u8));
    out
}

/// The two 32-byte buffers derived from a passphrase/salt pair.
///
/// `key` keys the cipher; `input` is folded into the IV and, in generate
/// mode, run through the cipher as the deterministic entropy source. Both
/// buffers are zeroized from memory on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub struct KeyMaterial {
    key: [u8; OUTPUT_LEN],
    input: [u8; OUTPUT_LEN],
}

impl KeyMaterial {
    /// The Argon2id-derived AES key.
    pub fn key(&self) -> &[u8; OUTPUT_LEN] {
        &self.key
    }

    /// The scrypt-derived secondary buffer.
    pub fn input(&self) -> &[u8; OUTPUT_LEN] {
        &self.input
    }

    /// Fold the 64 bytes of derived material into a 16-byte IV:
    /// `iv[i] = key[i] ^ input[i] ^ key[16+i] ^ input[16+i]`.
    ///
    /// Fully deterministic, so no IV ever needs to be stored or transmitted
    /// alongside a ciphertext. The flip side is IV predictability whenever
    /// key material is reused across operations sharing the same
    /// currency/difficulty; documented weakness, kept for compatibility.
    pub fn iv(&self) -> [u8; IV_LEN] {
        let mut iv = [0u8; IV_LEN];
        for (i, byte) in iv.iter_mut().enumerate() {
            *byte = self.key[i] ^ self.input[i] ^ self.key[IV_LEN + i] ^ self.input[IV_LEN + i];
        }
        iv
    }

    #[cfg(test)]
    pub(crate) fn from_parts(key: [u8; OUTPUT_LEN], input: [u8; OUTPUT_LEN]) -> Self {
        Self { key, input }
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key", &"[REDACTED]")
            .field("input", &"[REDACTED]")
            .finish()
    }
}

/// Derive key material for a passphrase/salt/currency/difficulty tuple.
///
/// Deterministic: identical inputs always yield byte-identical material.
/// Both KDF calls are synchronous and memory-bound; the chosen difficulty
/// tier is the only control over their cost (hundreds of MiB and sub-second
/// at `minimum`, several GiB and tens of seconds at the top tier).
pub fn derive_material(
    passphrase: &str,
    salt: &str,
    currency: Currency,
    difficulty: Difficulty,
) -> Result<KeyMaterial> {
    let key = argon2_kdf(
        &with_domain_suffix(passphrase, currency, KdfRole::Argon2),
        &with_domain_suffix(salt, currency, KdfRole::Argon2),
        difficulty,
    )?;
    let input = scrypt_kdf(
        &with_domain_suffix(passphrase, currency, KdfRole::Scrypt),
        &with_domain_suffix(salt, currency, KdfRole::Scrypt),
        difficulty,
    )?;
    Ok(KeyMaterial { key, input })
}

fn argon2_kdf(secret: &str, salt: &str, difficulty: Difficulty) -> Result<[u8; OUTPUT_LEN]> {
    let cost = difficulty.argon2_cost();
    let params = argon2::Params::new(
        cost.memory_kib,
        cost.time_cost,
        cost.parallelism,
        Some(cost.output_len),
    )
    .map_err(|e| EddyError::Kdf(format!("Argon2 parameters rejected: {}", e)))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let mut out = [0u8; OUTPUT_LEN];
    argon2
        .hash_password_into(secret.as_bytes(), salt.as_bytes(), &mut out)
        .map_err(|e| EddyError::Kdf(format!("Argon2 derivation failed: {}", e)))?;
    Ok(out)
}

fn scrypt_kdf(secret: &str, salt: &str, difficulty: Difficulty) -> Result<[u8; OUTPUT_LEN]> {
    let cost = difficulty.scrypt_cost();
    let params = scrypt::Params::new(
        cost.log_n,
        cost.block_size,
        cost.parallelism,
        cost.output_len,
    )
    .map_err(|e| EddyError::Kdf(format!("scrypt parameters rejected: {}", e)))?;

    let mut out = [0u8; OUTPUT_LEN];
    scrypt::scrypt(secret.as_bytes(), salt.as_bytes(), &params, &mut out)
        .map_err(|e| EddyError::Kdf(format!("scrypt derivation failed: {}", e)))?;
    Ok(out)
}
