//! AES-256-CBC encrypt/decrypt, no padding, no authentication.
//!
//! The IV is always re-derivable from the key material
//! ([`crate::kdf::KeyMaterial::iv`]), so it is never embedded in the
//! ciphertext: output length always equals input length.

use aes::cipher::block_padding::NoPadding;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::error::{EddyError, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Encrypt a block-aligned plaintext.
///
/// In practice every plaintext here is a 32-byte wallet secret, so the
/// alignment check is structural rather than a user-facing concern.
pub fn encrypt(plaintext: &[u8], key: &[u8; 32], iv: &[u8; 16]) -> Result<Vec<u8>> {
    if plaintext.len() % BLOCK_SIZE != 0 {
        return Err(EddyError::PlaintextNotBlockAligned(plaintext.len()));
    }

    let encryptor = Aes256CbcEnc::new(key.into(), iv.into());
    Ok(encryptor.encrypt_padded_vec_mut::<NoPadding>(plaintext))
}

/// Decrypt a ciphertext of at least one block.
///
/// Succeeds for *any* well-formed ciphertext regardless of which key
/// produced it; a wrong key simply yields different bytes. Correctness is
/// only observable through the verification protocol.
pub fn decrypt(ciphertext: &[u8], key: &[u8; 32], iv: &[u8; 16]) -> Result<Vec<u8>> {
    if ciphertext.len() < BLOCK_SIZE {
        return Err(EddyError::CiphertextTooShort(ciphertext.len()));
    }

    let decryptor = Aes256CbcDec::new(key.into(), iv.into());
    decryptor
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|_| EddyError::Cipher("ciphertext is not a multiple of the block size".into()))
}
