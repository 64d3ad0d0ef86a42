//! BIP-39 mnemonic encoding/decoding with explicit wordlist selection.
//!
//! The wordlist is a parameter on every call rather than process-wide
//! mutable state, so the engine stays reentrant across call sites. A
//! 32-byte secret encodes to 24 words; decode is the exact inverse for any
//! entropy length the codec supports.

use std::fmt;
use std::str::FromStr;

use crate::error::{EddyError, Result};

/// Supported mnemonic wordlist languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    ChineseTraditional,
    ChineseSimplified,
    Czech,
    French,
    Italian,
    Japanese,
    Korean,
}

impl Language {
    fn to_bip39(self) -> bip39::Language {
        match self {
            Language::English => bip39::Language::English,
            Language::Spanish => bip39::Language::Spanish,
            Language::ChineseTraditional => bip39::Language::TraditionalChinese,
            Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Language::Czech => bip39::Language::Czech,
            Language::French => bip39::Language::French,
            Language::Italian => bip39::Language::Italian,
            Language::Japanese => bip39::Language::Japanese,
            Language::Korean => bip39::Language::Korean,
        }
    }
}

impl FromStr for Language {
    type Err = EddyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "english" => Ok(Language::English),
            "spanish" => Ok(Language::Spanish),
            "chinese_trad" => Ok(Language::ChineseTraditional),
            "chinese_simp" => Ok(Language::ChineseSimplified),
            "czech" => Ok(Language::Czech),
            "french" => Ok(Language::French),
            "italian" => Ok(Language::Italian),
            "japanese" => Ok(Language::Japanese),
            "korean" => Ok(Language::Korean),
            other => Err(EddyError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::ChineseTraditional => "chinese_trad",
            Language::ChineseSimplified => "chinese_simp",
            Language::Czech => "czech",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
        };
        f.write_str(name)
    }
}

/// Encode entropy bytes as a mnemonic phrase in the given language.
pub fn encode(entropy: &[u8], language: Language) -> Result<String> {
    let mnemonic = bip39::Mnemonic::from_entropy_in(language.to_bip39(), entropy)
        .map_err(|e| EddyError::Mnemonic(format!("cannot encode entropy: {}", e)))?;
    Ok(mnemonic.to_string())
}

/// Decode a mnemonic phrase back to its entropy bytes.
pub fn decode(phrase: &str, language: Language) -> Result<Vec<u8>> {
    let mnemonic = bip39::Mnemonic::parse_in(language.to_bip39(), phrase)
        .map_err(|e| EddyError::Mnemonic(format!("cannot decode mnemonic: {}", e)))?;
    Ok(mnemonic.to_entropy())
}
