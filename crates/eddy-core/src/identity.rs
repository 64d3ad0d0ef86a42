//! Wallet identity: deriving a chain address from raw entropy.
//!
//! The 32-byte secret is interpreted as a secp256k1 private key; the
//! address is the last 20 bytes of the Keccak-256 digest of the
//! uncompressed public key coordinates, rendered as an EIP-55 checksummed
//! `0x…` string. Deterministic and pure: the same entropy always yields the
//! same address, which is what makes the address usable as the decryption
//! correctness signal.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use sha3::{Digest, Keccak256};

use crate::error::{EddyError, Result};

/// Derive the Ethereum-form address for a 32-byte secret.
///
/// Fails with `Identity` when the bytes are not a valid secp256k1 scalar
/// (zero or not below the curve order). Callers in the decrypt path treat
/// that as a verification mismatch, not a fault, since random candidate
/// bytes from a wrong passphrase occasionally fall outside the scalar
/// range.
pub fn address_from_entropy(entropy: &[u8]) -> Result<String> {
    let secret = SecretKey::from_slice(entropy)
        .map_err(|e| EddyError::Identity(format!("invalid private key bytes: {}", e)))?;
    let public = secret.public_key();
    let point = public.to_encoded_point(false);

    // Skip the 0x04 SEC1 tag; hash the 64 coordinate bytes.
    let digest = Keccak256::digest(&point.as_bytes()[1..]);
    Ok(checksum_address(&digest[12..]))
}

/// Render 20 address bytes as an EIP-55 checksummed hex string.
fn checksum_address(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let digest = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Compare two addresses after normalizing any `0x`/`0X` prefix.
///
/// Case-insensitive, so checksummed and lowercase renderings of the same
/// address compare equal.
pub fn addresses_match(a: &str, b: &str) -> bool {
    strip_hex_prefix(a).eq_ignore_ascii_case(strip_hex_prefix(b))
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}
