//! Cipher primitives for Eddy.
//!
//! ## Security Model
//!
//! AES-256-CBC with a derived IV and no padding. There is no authentication
//! tag anywhere in the scheme: any ciphertext of the right length decrypts
//! to *some* bytes. Integrity is checked only indirectly, by deriving an
//! address from the decrypted candidate and comparing it to the expected
//! address (see [`crate::wallet`]).

pub mod cipher;

pub use cipher::{decrypt, encrypt, BLOCK_SIZE};
