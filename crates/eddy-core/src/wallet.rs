//! Wallet operations: generate, encrypt, decrypt.
//!
//! Each operation is a pure function from a [`WalletRequest`] to an outcome
//! value; no state survives between invocations and nothing here prints or
//! terminates the process. The caller renders the outcome and decides what
//! a failure means.
//!
//! Decryption carries no authentication tag, so a wrong passphrase still
//! yields *some* 32 bytes. The only correctness signal is the verification
//! protocol: derive an address from the candidate secret and compare it to
//! the address the caller supplied. A mismatch is a normal outcome, not an
//! error.

use std::fmt;
use std::str::FromStr;

use zeroize::ZeroizeOnDrop;

use crate::crypto::cipher;
use crate::currency::Currency;
use crate::error::{EddyError, Result};
use crate::identity;
use crate::kdf::{self, difficulty::Difficulty};
use crate::mnemonic::{self, Language};

/// Length of a wallet secret in bytes.
pub const SECRET_LEN: usize = 32;

/// How the CLI should render secrets and ciphertexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Raw,
    #[default]
    Mnemonic,
}

impl FromStr for OutputFormat {
    type Err = EddyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raw" => Ok(OutputFormat::Raw),
            "mnemonic" => Ok(OutputFormat::Mnemonic),
            other => Err(EddyError::UnsupportedOutput(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Raw => "raw",
            OutputFormat::Mnemonic => "mnemonic",
        })
    }
}

/// A 32-byte private-key secret, zeroized on drop.
#[derive(Clone, ZeroizeOnDrop)]
pub struct WalletSecret {
    bytes: [u8; SECRET_LEN],
}

impl WalletSecret {
    /// Wrap candidate secret bytes; anything but exactly 32 bytes is
    /// rejected.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; SECRET_LEN] = bytes.try_into().map_err(|_| {
            EddyError::InvalidInput(format!(
                "a wallet secret must be exactly {} bytes (got {})",
                SECRET_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self { bytes })
    }

    /// The raw secret bytes. Avoid storing or logging this value.
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.bytes
    }

    /// Hex rendering for raw output mode.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Debug for WalletSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletSecret")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Inputs for one wallet operation.
#[derive(Debug, Clone)]
pub struct WalletRequest {
    pub passphrase: String,
    /// Free-form salt; only consulted in generate mode (encrypt and decrypt
    /// bind the salt to the wallet address instead).
    pub salt: String,
    pub currency: Currency,
    pub difficulty: Difficulty,
    /// Hex-encoded secret (encrypt) or ciphertext (decrypt).
    pub key: Option<String>,
    /// Mnemonic encoding of the secret (encrypt) or ciphertext (decrypt).
    pub mnemonic: Option<String>,
    /// Expected wallet address; required in decrypt mode.
    pub address: Option<String>,
    /// Wordlist for mnemonic inputs.
    pub language: Language,
}

/// Outcome of generate mode.
#[derive(Debug)]
pub struct GeneratedWallet {
    pub address: String,
    pub secret: WalletSecret,
}

/// Outcome of encrypt mode.
#[derive(Debug)]
pub struct EncryptedWallet {
    /// Address of the encrypted wallet; doubles as the KDF salt binding and
    /// must be presented again at decrypt time.
    pub address: String,
    pub ciphertext: Vec<u8>,
}

/// Verdict of the address-comparison protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Candidate secret reproduces the expected address.
    Match,
    /// Candidate secret derives a different address (or none at all):
    /// almost always a wrong passphrase, salt, or difficulty.
    Mismatch,
}

impl Verification {
    pub fn is_match(&self) -> bool {
        matches!(self, Verification::Match)
    }
}

/// Outcome of decrypt mode.
///
/// The secret is returned even on mismatch; the caller decides whether to
/// show it.
#[derive(Debug)]
pub struct DecryptedWallet {
    pub secret: WalletSecret,
    pub verification: Verification,
}

/// Generate a wallet deterministically from passphrase/salt alone.
///
/// The derivation output itself is the entropy source: the scrypt-derived
/// buffer is run through the cipher under the Argon2id-derived key, and the
/// 32-byte result is the new wallet secret. No pre-existing secret and no
/// randomness are involved, which is the whole point: re-running with the
/// same inputs recovers the same wallet.
pub fn generate(request: &WalletRequest) -> Result<GeneratedWallet> {
    require_passphrase(request)?;

    let material = kdf::derive_material(
        &request.passphrase,
        &request.salt,
        request.currency,
        request.difficulty,
    )?;
    let entropy = cipher::decrypt(material.input(), material.key(), &material.iv())?;
    let secret = WalletSecret::from_slice(&entropy)?;
    let address = identity::address_from_entropy(secret.as_bytes())?;

    Ok(GeneratedWallet { address, secret })
}

/// Encrypt an existing wallet secret under the passphrase.
///
/// The secret arrives as a hex key or a mnemonic. Its address becomes the
/// KDF salt, binding the ciphertext to the wallet identity; the address is
/// returned so the caller can keep it for decryption.
pub fn encrypt(request: &WalletRequest) -> Result<EncryptedWallet> {
    require_passphrase(request)?;

    let entropy = resolve_secret_bytes(request, "encryption")?;
    let secret = WalletSecret::from_slice(&entropy)?;
    let address = identity::address_from_entropy(secret.as_bytes())?;

    let material = kdf::derive_material(
        &request.passphrase,
        &address,
        request.currency,
        request.difficulty,
    )?;
    let ciphertext = cipher::encrypt(secret.as_bytes(), material.key(), &material.iv())?;

    Ok(EncryptedWallet {
        address,
        ciphertext,
    })
}

/// Decrypt a ciphertext and verify the result against the expected address.
///
/// The supplied address is used verbatim as the KDF salt, so it must be the
/// exact string reported at encrypt time. A wrong passphrase is not an
/// error here: it decrypts to some other 32 bytes whose address will not
/// match, and the verdict says so.
pub fn decrypt(request: &WalletRequest) -> Result<DecryptedWallet> {
    require_passphrase(request)?;

    let expected = request.address.as_deref().ok_or_else(|| {
        EddyError::InvalidInput(
            "a private key or mnemonic, and an address are required in decryption mode".into(),
        )
    })?;
    let ciphertext = resolve_secret_bytes(request, "decryption")?;

    let material = kdf::derive_material(
        &request.passphrase,
        expected,
        request.currency,
        request.difficulty,
    )?;
    let plaintext = cipher::decrypt(&ciphertext, material.key(), &material.iv())?;
    let secret = WalletSecret::from_slice(&plaintext)?;

    // An out-of-range candidate scalar cannot be the right key; fold the
    // identity failure into the mismatch verdict instead of erroring.
    let verification = match identity::address_from_entropy(secret.as_bytes()) {
        Ok(derived) if identity::addresses_match(&derived, expected) => Verification::Match,
        Ok(_) | Err(_) => Verification::Mismatch,
    };

    Ok(DecryptedWallet {
        secret,
        verification,
    })
}

fn require_passphrase(request: &WalletRequest) -> Result<()> {
    if request.passphrase.is_empty() {
        return Err(EddyError::InvalidInput("a passphrase is required".into()));
    }
    Ok(())
}

/// Resolve the secret/ciphertext bytes from the hex key or the mnemonic,
/// preferring the key when both are present.
fn resolve_secret_bytes(request: &WalletRequest, mode: &str) -> Result<Vec<u8>> {
    match (&request.key, &request.mnemonic) {
        (Some(key), _) => Ok(hex::decode(key)?),
        (None, Some(phrase)) => mnemonic::decode(phrase, request.language),
        (None, None) => Err(EddyError::InvalidInput(format!(
            "a private key or a mnemonic is required in {} mode",
            mode
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> WalletRequest {
        WalletRequest {
            passphrase: "correcthorse".into(),
            salt: "battery".into(),
            currency: Currency::Ethereum,
            difficulty: Difficulty::Minimum,
            key: None,
            mnemonic: None,
            address: None,
            language: Language::English,
        }
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("raw".parse::<OutputFormat>().unwrap(), OutputFormat::Raw);
        assert_eq!(
            "mnemonic".parse::<OutputFormat>().unwrap(),
            OutputFormat::Mnemonic
        );
        assert!(matches!(
            "json".parse::<OutputFormat>(),
            Err(EddyError::UnsupportedOutput(_))
        ));
    }

    #[test]
    fn test_wallet_secret_rejects_wrong_length() {
        assert!(WalletSecret::from_slice(&[0u8; 31]).is_err());
        assert!(WalletSecret::from_slice(&[0u8; 33]).is_err());
        assert!(WalletSecret::from_slice(&[1u8; 32]).is_ok());
    }

    #[test]
    fn test_wallet_secret_debug_redacts() {
        let secret = WalletSecret::from_slice(&[0x7fu8; 32]).unwrap();
        let debug_output = format!("{:?}", secret);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("7f"));
    }

    #[test]
    fn test_empty_passphrase_rejected_everywhere() {
        let mut req = request();
        req.passphrase.clear();
        assert!(matches!(generate(&req), Err(EddyError::InvalidInput(_))));
        assert!(matches!(encrypt(&req), Err(EddyError::InvalidInput(_))));
        assert!(matches!(decrypt(&req), Err(EddyError::InvalidInput(_))));
    }

    #[test]
    fn test_encrypt_requires_key_or_mnemonic() {
        let req = request();
        assert!(matches!(encrypt(&req), Err(EddyError::InvalidInput(_))));
    }

    #[test]
    fn test_decrypt_requires_address() {
        let mut req = request();
        req.key = Some(hex::encode([9u8; 32]));
        assert!(matches!(decrypt(&req), Err(EddyError::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_hex_key_rejected() {
        let mut req = request();
        req.key = Some("not-hex".into());
        req.address = Some("0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf".into());
        assert!(matches!(
            decrypt(&req),
            Err(EddyError::InvalidHex { .. })
        ));
    }
}
