//! Hex-string surface over the block codec.

use tracing::debug;

use crate::error::Base58Error;

pub mod block;

pub use block::{
    ALPHABET, ENCODED_BLOCK_SIZES, FULL_BLOCK_SIZE, FULL_ENCODED_BLOCK_SIZE, decode_block,
    decode_bytes, decode_into, decoded_len, encode_block, encode_bytes, encoded_len,
};

/// Encodes a hex string to CryptoNote Base58.
///
/// Upper and lower case hex digits are both accepted.
pub fn encode(hex_str: &str) -> Result<String, Base58Error> {
    let data = hex::decode(hex_str)
        .inspect_err(|e| debug!(len = hex_str.len(), error = %e, "Rejected hex input"))?;
    Ok(encode_bytes(&data))
}

/// Decodes a CryptoNote Base58 string to lowercase hex.
pub fn decode(encoded: &str) -> Result<String, Base58Error> {
    Ok(hex::encode(decode_bytes(encoded)?))
}
