//! End-to-end wallet operation tests.
//!
//! These run the full derive → cipher → verify pipeline. The fast tests use
//! the `minimum` difficulty tier (256 MiB per KDF, a few seconds); the
//! `normal`-tier vector is identical in code path but costs 1 GiB and tens
//! of seconds per KDF, so it is ignored by default.

use eddy_core::wallet::{self, Verification, WalletRequest};
use eddy_core::{identity, mnemonic, Currency, Difficulty, Language};

fn request(passphrase: &str, difficulty: Difficulty) -> WalletRequest {
    WalletRequest {
        passphrase: passphrase.into(),
        salt: "battery".into(),
        currency: Currency::Ethereum,
        difficulty,
        key: None,
        mnemonic: None,
        address: None,
        language: Language::English,
    }
}

/// A fixed 32-byte secret used as the wallet under test.
fn known_secret() -> Vec<u8> {
    (1u8..=32).collect()
}

#[test]
fn test_encrypt_then_decrypt_recovers_secret() {
    let secret = known_secret();

    let mut enc_req = request("correcthorse", Difficulty::Minimum);
    enc_req.key = Some(hex::encode(&secret));
    let encrypted = wallet::encrypt(&enc_req).unwrap();
    assert_eq!(encrypted.ciphertext.len(), secret.len());
    assert_ne!(encrypted.ciphertext, secret);

    let mut dec_req = request("correcthorse", Difficulty::Minimum);
    dec_req.key = Some(hex::encode(&encrypted.ciphertext));
    dec_req.address = Some(encrypted.address.clone());
    let decrypted = wallet::decrypt(&dec_req).unwrap();

    assert_eq!(decrypted.secret.as_bytes().as_slice(), secret.as_slice());
    assert!(decrypted.verification.is_match());

    // The verified address equals the one derived directly from the secret.
    let direct = identity::address_from_entropy(&secret).unwrap();
    assert_eq!(encrypted.address, direct);
}

#[test]
fn test_wrong_passphrase_reports_soft_mismatch() {
    let secret = known_secret();

    let mut enc_req = request("correcthorse", Difficulty::Minimum);
    enc_req.key = Some(hex::encode(&secret));
    let encrypted = wallet::encrypt(&enc_req).unwrap();

    let mut dec_req = request("wrong", Difficulty::Minimum);
    dec_req.key = Some(hex::encode(&encrypted.ciphertext));
    dec_req.address = Some(encrypted.address);

    // Never an error: some 32 bytes come back, they just verify as a
    // mismatch.
    let decrypted = wallet::decrypt(&dec_req).unwrap();
    assert_eq!(decrypted.verification, Verification::Mismatch);
    assert_ne!(decrypted.secret.as_bytes().as_slice(), secret.as_slice());
}

#[test]
fn test_generate_is_deterministic() {
    let a = wallet::generate(&request("correcthorse", Difficulty::Minimum)).unwrap();
    let b = wallet::generate(&request("correcthorse", Difficulty::Minimum)).unwrap();
    assert_eq!(a.secret.as_bytes(), b.secret.as_bytes());
    assert_eq!(a.address, b.address);
    assert_eq!(
        a.address,
        identity::address_from_entropy(a.secret.as_bytes()).unwrap()
    );
}

#[test]
fn test_generate_differs_per_currency() {
    let mut eth = request("correcthorse", Difficulty::Minimum);
    eth.currency = Currency::Ethereum;
    let mut btc = request("correcthorse", Difficulty::Minimum);
    btc.currency = Currency::Bitcoin;

    let eth_wallet = wallet::generate(&eth).unwrap();
    let btc_wallet = wallet::generate(&btc).unwrap();
    assert_ne!(eth_wallet.secret.as_bytes(), btc_wallet.secret.as_bytes());
    assert_ne!(eth_wallet.address, btc_wallet.address);
}

#[test]
fn test_mnemonic_forms_round_trip() {
    let secret = known_secret();
    let phrase = mnemonic::encode(&secret, Language::English).unwrap();

    // Encrypt from the mnemonic form of the secret.
    let mut enc_req = request("correcthorse", Difficulty::Minimum);
    enc_req.mnemonic = Some(phrase);
    let encrypted = wallet::encrypt(&enc_req).unwrap();

    // Decrypt from the mnemonic form of the ciphertext.
    let ciphertext_phrase = mnemonic::encode(&encrypted.ciphertext, Language::English).unwrap();
    let mut dec_req = request("correcthorse", Difficulty::Minimum);
    dec_req.mnemonic = Some(ciphertext_phrase);
    dec_req.address = Some(encrypted.address);

    let decrypted = wallet::decrypt(&dec_req).unwrap();
    assert!(decrypted.verification.is_match());
    assert_eq!(decrypted.secret.as_bytes().as_slice(), secret.as_slice());
}

#[test]
#[ignore = "normal tier costs ~1 GiB and tens of seconds per KDF call"]
fn test_normal_tier_round_trip() {
    let secret = known_secret();

    let mut enc_req = request("correcthorse", Difficulty::Normal);
    enc_req.key = Some(hex::encode(&secret));
    let encrypted = wallet::encrypt(&enc_req).unwrap();

    let mut dec_req = request("correcthorse", Difficulty::Normal);
    dec_req.key = Some(hex::encode(&encrypted.ciphertext));
    dec_req.address = Some(encrypted.address);
    let decrypted = wallet::decrypt(&dec_req).unwrap();

    assert!(decrypted.verification.is_match());
    assert_eq!(decrypted.secret.as_bytes().as_slice(), secret.as_slice());
}
