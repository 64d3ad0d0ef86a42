//! Supported currencies and their domain-separation codes.
//!
//! The currency code feeds only the key-derivation domain separation: the
//! same passphrase and salt yield different key material per currency. It
//! does not change the address form, which is Ethereum-style for every
//! currency.

use std::fmt;
use std::str::FromStr;

use crate::error::EddyError;

/// A supported target currency.
///
/// The discriminant values are part of the derivation protocol (they are
/// mixed into the KDF inputs) and must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Currency {
    Testnet = 0,
    Bitcoin = 1,
    Ethereum = 2,
    Litecoin = 3,
    Monero = 4,
    Cosmos = 5,
    Polkadot = 6,
}

impl Currency {
    /// All supported currencies, in code order.
    pub const ALL: [Currency; 7] = [
        Currency::Testnet,
        Currency::Bitcoin,
        Currency::Ethereum,
        Currency::Litecoin,
        Currency::Monero,
        Currency::Cosmos,
        Currency::Polkadot,
    ];

    /// The small-integer code mixed into the KDF domain separation.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl FromStr for Currency {
    type Err = EddyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "testnet" => Ok(Currency::Testnet),
            "bitcoin" => Ok(Currency::Bitcoin),
            "ethereum" => Ok(Currency::Ethereum),
            "litecoin" => Ok(Currency::Litecoin),
            "monero" => Ok(Currency::Monero),
            "cosmos" => Ok(Currency::Cosmos),
            "polkadot" => Ok(Currency::Polkadot),
            other => Err(EddyError::UnsupportedCurrency(other.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Currency::Testnet => "testnet",
            Currency::Bitcoin => "bitcoin",
            Currency::Ethereum => "ethereum",
            Currency::Litecoin => "litecoin",
            Currency::Monero => "monero",
            Currency::Cosmos => "cosmos",
            Currency::Polkadot => "polkadot",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes_are_stable() {
        assert_eq!(Currency::Testnet.code(), 0);
        assert_eq!(Currency::Bitcoin.code(), 1);
        assert_eq!(Currency::Ethereum.code(), 2);
        assert_eq!(Currency::Litecoin.code(), 3);
        assert_eq!(Currency::Monero.code(), 4);
        assert_eq!(Currency::Cosmos.code(), 5);
        assert_eq!(Currency::Polkadot.code(), 6);
    }

    #[test]
    fn test_parse_round_trip() {
        for currency in Currency::ALL {
            let parsed: Currency = currency.to_string().parse().unwrap();
            assert_eq!(parsed, currency);
        }
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let result = "dogecoin".parse::<Currency>();
        assert!(matches!(result, Err(EddyError::UnsupportedCurrency(_))));
    }
}
