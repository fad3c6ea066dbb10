use tracing::{debug, trace};

use crate::error::Base58Error;

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Bytes in a full decoded block.
pub const FULL_BLOCK_SIZE: usize = 8;

/// Symbols in a full encoded block.
pub const FULL_ENCODED_BLOCK_SIZE: usize = 11;

/// Encoded symbol count, indexed by decoded block length in bytes.
pub const ENCODED_BLOCK_SIZES: [usize; FULL_BLOCK_SIZE + 1] = [0, 2, 3, 5, 6, 7, 9, 10, 11];

const BASE: u64 = ALPHABET.len() as u64;
const INVALID_SYMBOL: u8 = 0xFF;

const DECODE_MAP: [u8; 256] = {
    let mut map = [INVALID_SYMBOL; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
};

/// Position of `encoded_size` in [`ENCODED_BLOCK_SIZES`], i.e. the decoded byte count.
#[inline(always)]
fn decoded_block_size(encoded_size: usize) -> Option<usize> {
    ENCODED_BLOCK_SIZES.iter().position(|&size| size == encoded_size)
}

/// Number of symbols produced by encoding `byte_len` bytes.
pub fn encoded_len(byte_len: usize) -> usize {
    (byte_len / FULL_BLOCK_SIZE) * FULL_ENCODED_BLOCK_SIZE
        + ENCODED_BLOCK_SIZES[byte_len % FULL_BLOCK_SIZE]
}

/// Number of bytes produced by decoding `encoded_len` symbols.
///
/// Fails with [`Base58Error::InvalidLength`] when the trailing partial block
/// has a length no decoded block can produce (1, 4 or 8 symbols).
pub fn decoded_len(encoded_len: usize) -> Result<usize, Base58Error> {
    let last_block_size = encoded_len % FULL_ENCODED_BLOCK_SIZE;
    let last_block_decoded_size = decoded_block_size(last_block_size)
        .ok_or(Base58Error::InvalidLength { len: encoded_len, last_block_size })?;

    Ok((encoded_len / FULL_ENCODED_BLOCK_SIZE) * FULL_BLOCK_SIZE + last_block_decoded_size)
}

/// Encodes a single block of 1 to 8 bytes into the first
/// `ENCODED_BLOCK_SIZES[block.len()]` positions of `out`.
pub fn encode_block(block: &[u8], out: &mut [u8]) -> Result<(), Base58Error> {
    if block.is_empty() || block.len() > FULL_BLOCK_SIZE {
        return Err(Base58Error::InvalidBlockLength(block.len()));
    }

    let size = ENCODED_BLOCK_SIZES[block.len()];
    if out.len() < size {
        return Err(Base58Error::BufferTooSmall { needed: size, available: out.len() });
    }

    write_block(block, &mut out[..size]);
    Ok(())
}

// `out` must be exactly ENCODED_BLOCK_SIZES[block.len()] long.
#[inline(always)]
fn write_block(block: &[u8], out: &mut [u8]) {
    out.fill(ALPHABET[0]);

    let mut num = block.iter().fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));
    for slot in out.iter_mut().rev() {
        if num == 0 {
            break;
        }
        *slot = ALPHABET[(num % BASE) as usize];
        num /= BASE;
    }
}

/// Decodes a single encoded block of up to 11 symbols into the front of `out`,
/// returning the number of bytes written.
///
/// Symbols are read as raw bytes; a byte outside the alphabet is reported as
/// its Latin-1 character.
pub fn decode_block(block: &[u8], out: &mut [u8]) -> Result<usize, Base58Error> {
    if block.is_empty() || block.len() > FULL_ENCODED_BLOCK_SIZE {
        return Err(Base58Error::InvalidBlockLength(block.len()));
    }

    let size = match decoded_block_size(block.len()) {
        Some(size) if size > 0 => size,
        _ => return Err(Base58Error::InvalidBlockSize(block.len())),
    };

    if out.len() < size {
        return Err(Base58Error::BufferTooSmall { needed: size, available: out.len() });
    }

    let mut value = 0u128;
    let mut order = 1u128;
    for &symbol in block.iter().rev() {
        let digit = DECODE_MAP[symbol as usize];
        if digit == INVALID_SYMBOL {
            return Err(Base58Error::InvalidSymbol(char::from(symbol)));
        }

        value += u128::from(digit) * order;
        if value > u128::from(u64::MAX) {
            return Err(Base58Error::Overflow);
        }
        order *= u128::from(BASE);
    }

    // Bounded by u64::MAX above.
    let value = value as u64;
    if size < FULL_BLOCK_SIZE && value >= 1u64 << (8 * size) {
        return Err(Base58Error::Overflow);
    }

    out[..size].copy_from_slice(&value.to_be_bytes()[FULL_BLOCK_SIZE - size..]);
    Ok(size)
}

fn check_ascii(s: &str) -> Result<(), Base58Error> {
    match s.chars().find(|ch| !ch.is_ascii()) {
        Some(ch) => Err(Base58Error::InvalidSymbol(ch)),
        None => Ok(()),
    }
}

pub fn encode_bytes(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    let mut buf = vec![ALPHABET[0]; encoded_len(data.len())];
    for (block, out) in data.chunks(FULL_BLOCK_SIZE).zip(buf.chunks_mut(FULL_ENCODED_BLOCK_SIZE)) {
        write_block(block, out);
    }

    trace!(bytes = data.len(), symbols = buf.len(), "Encoded base58");

    // SAFETY: every byte comes from ALPHABET, which is ASCII.
    unsafe { String::from_utf8_unchecked(buf) }
}

pub fn decode_bytes(encoded: &str) -> Result<Vec<u8>, Base58Error> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let mut buf = vec![0u8; checked_decoded_len(encoded)?];
    decode_blocks(encoded.as_bytes(), &mut buf)
        .inspect_err(|e| debug!(symbols = encoded.len(), error = %e, "Rejected base58 input"))?;

    trace!(symbols = encoded.len(), bytes = buf.len(), "Decoded base58");
    Ok(buf)
}

/// Decode directly into caller's buffer, returning the number of bytes written.
///
/// The buffer must hold at least [`decoded_len`] bytes. Every block is
/// validated before the first byte is written, so `out` is left untouched
/// on any error.
pub fn decode_into(encoded: &str, out: &mut [u8]) -> Result<usize, Base58Error> {
    if encoded.is_empty() {
        return Ok(0);
    }

    let needed = checked_decoded_len(encoded)?;
    if out.len() < needed {
        return Err(Base58Error::BufferTooSmall { needed, available: out.len() });
    }

    let bytes = encoded.as_bytes();
    let mut scratch = [0u8; FULL_BLOCK_SIZE];
    for block in bytes.chunks(FULL_ENCODED_BLOCK_SIZE) {
        decode_block(block, &mut scratch).inspect_err(
            |e| debug!(symbols = encoded.len(), error = %e, "Rejected base58 input"),
        )?;
    }

    let blocks = bytes.chunks(FULL_ENCODED_BLOCK_SIZE);
    for (block, dst) in blocks.zip(out[..needed].chunks_mut(FULL_BLOCK_SIZE)) {
        let size = decode_block(block, &mut scratch)?;
        dst.copy_from_slice(&scratch[..size]);
    }

    Ok(needed)
}

// Length is checked on characters first, then symbols.
fn checked_decoded_len(encoded: &str) -> Result<usize, Base58Error> {
    decoded_len(encoded.chars().count())
        .and_then(|len| check_ascii(encoded).map(|_| len))
        .inspect_err(|e| debug!(symbols = encoded.len(), error = %e, "Rejected base58 input"))
}

// `out` must be exactly decoded_len(bytes.len()) long.
#[inline(always)]
fn decode_blocks(bytes: &[u8], out: &mut [u8]) -> Result<(), Base58Error> {
    for (block, dst) in bytes.chunks(FULL_ENCODED_BLOCK_SIZE).zip(out.chunks_mut(FULL_BLOCK_SIZE)) {
        decode_block(block, dst)?;
    }
    Ok(())
}
