//! CryptoNote-style block Base58 codec.

pub mod codec;
pub mod error;
pub mod trace;
pub mod types;

pub use codec::{decode, encode};
pub use error::Base58Error;
