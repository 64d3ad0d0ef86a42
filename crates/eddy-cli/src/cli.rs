//! Command-line argument definitions.
//!
//! Enum-valued flags (currency, difficulty, language, output) are taken as
//! plain strings and parsed by the core, so unsupported values surface
//! through the same BadRequest path regardless of where they come from.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "eddy",
    version,
    about = "Deterministic passphrase-based wallet backup and recovery"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive a brand-new wallet from a passphrase and salt
    Generate(WalletArgs),
    /// Encrypt an existing private key or mnemonic
    Encrypt(WalletArgs),
    /// Decrypt a ciphertext and verify it against an address
    Decrypt(WalletArgs),
}

#[derive(Args)]
pub struct WalletArgs {
    /// Wallet passphrase
    #[arg(short, long, env = "EDDY_PASSPHRASE")]
    pub passphrase: String,

    /// Extra salt mixed into the derivation (generate mode)
    #[arg(short, long, default_value = "")]
    pub salt: String,

    /// Target currency [testnet|bitcoin|ethereum|litecoin|monero|cosmos|polkadot]
    #[arg(short, long, default_value = "ethereum")]
    pub currency: String,

    /// KDF difficulty [minimum|low|normal|strong|super_strong|ridiculously_strong]
    #[arg(short, long, default_value = "normal")]
    pub difficulty: String,

    /// 24-word mnemonic (secret for encrypt, ciphertext for decrypt)
    #[arg(short, long)]
    pub mnemonic: Option<String>,

    /// Hex-encoded private key (secret for encrypt, ciphertext for decrypt)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Mnemonic language [english|spanish|chinese_trad|chinese_simp|czech|french|italian|japanese|korean]
    #[arg(short, long, default_value = "english")]
    pub language: String,

    /// Expected wallet address (decrypt mode)
    #[arg(short, long)]
    pub address: Option<String>,

    /// Output format [raw|mnemonic]
    #[arg(short, long, default_value = "mnemonic")]
    pub output: String,
}
