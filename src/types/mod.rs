mod common;

pub use common::{Base58Bytes, HexBytes};
