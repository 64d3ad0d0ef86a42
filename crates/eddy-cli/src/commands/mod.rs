//! Command handlers: assemble a wallet request, run one core operation,
//! render the outcome.

use eddy_core::wallet::{self, WalletRequest};
use eddy_core::{mnemonic, Currency, Difficulty, Language, OutputFormat};

use crate::cli::WalletArgs;

impl WalletArgs {
    fn to_request(&self) -> anyhow::Result<WalletRequest> {
        Ok(WalletRequest {
            passphrase: self.passphrase.clone(),
            salt: self.salt.clone(),
            currency: self.currency.parse::<Currency>()?,
            difficulty: self.difficulty.parse::<Difficulty>()?,
            key: self.key.clone(),
            mnemonic: self.mnemonic.clone(),
            address: self.address.clone(),
            language: self.language.parse::<Language>()?,
        })
    }

    fn output_format(&self) -> anyhow::Result<OutputFormat> {
        Ok(self.output.parse::<OutputFormat>()?)
    }
}

pub fn handle_generate(args: &WalletArgs) -> anyhow::Result<()> {
    let format = args.output_format()?;
    let request = args.to_request()?;

    let generated = wallet::generate(&request)?;
    println!("Wallet Address: {}", generated.address);
    match format {
        OutputFormat::Raw => println!("Private Key: {}", generated.secret.to_hex()),
        OutputFormat::Mnemonic => {
            let phrase = mnemonic::encode(generated.secret.as_bytes(), request.language)?;
            println!("Mnemonic: {}", phrase);
        }
    }
    Ok(())
}

pub fn handle_encrypt(args: &WalletArgs) -> anyhow::Result<()> {
    let format = args.output_format()?;
    let request = args.to_request()?;

    let encrypted = wallet::encrypt(&request)?;
    match format {
        OutputFormat::Raw => {
            println!("Encrypted Private Key: {}", hex::encode(&encrypted.ciphertext));
        }
        OutputFormat::Mnemonic => {
            let phrase = mnemonic::encode(&encrypted.ciphertext, request.language)?;
            println!("Encrypted Mnemonic: {}", phrase);
        }
    }
    // Needed again at decrypt time, verbatim.
    println!("Wallet Address: {}", encrypted.address);
    Ok(())
}

pub fn handle_decrypt(args: &WalletArgs) -> anyhow::Result<()> {
    let format = args.output_format()?;
    let request = args.to_request()?;

    let decrypted = wallet::decrypt(&request)?;
    if !decrypted.verification.is_match() {
        // Expected outcome for a wrong passphrase; not an error.
        println!("Decrypted key does not match the provided address");
        return Ok(());
    }

    println!("Private key successfully decrypted");
    match format {
        OutputFormat::Raw => println!("Decrypted Private Key: {}", decrypted.secret.to_hex()),
        OutputFormat::Mnemonic => {
            let phrase = mnemonic::encode(decrypted.secret.as_bytes(), request.language)?;
            println!("Decrypted Mnemonic: {}", phrase);
        }
    }
    Ok(())
}
