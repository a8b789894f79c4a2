//! Unsigned varint framing, as used by multicodec prefixes.
//!
//! See https://github.com/multiformats/unsigned-varint

use thiserror::Error;

/// bitmask for 7 least significant bits
const LSB_7: u8 = u8::MAX / 2;
/// bitmask for most significant bit
const MSB: u8 = !LSB_7;

/// Maximum number of bytes of a varint, per the multiformats specification.
pub const MAX_LEN: usize = 9;

#[inline]
const fn msb_is_1(val: u8) -> bool {
    val & MSB == MSB
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct VarintEncoding {
    buf: [u8; MAX_LEN],
    len: u8,
}

impl VarintEncoding {
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

/// Encodes a value as a varint.
///
/// Only values below 2^63 fit into the multiformats length limit.
pub fn encode(mut value: u64) -> VarintEncoding {
    let mut buf = [0; MAX_LEN];
    let mut len = 0;

    loop {
        let chunk = (value as u8) & LSB_7;
        value >>= 7;
        if value == 0 || len == MAX_LEN - 1 {
            buf[len] = chunk;
            len += 1;
            break;
        }
        // turns on MSB to indicate carry.
        buf[len] = chunk | MSB;
        len += 1;
    }

    VarintEncoding { buf, len: len as u8 }
}

/// Decodes a varint from the start of `encoded`.
///
/// Returns the decoded value along with the number of bytes it occupied.
pub fn decode(encoded: &[u8]) -> Result<(u64, usize), DecodeError> {
    let mut result = 0u64;

    for (idx, &byte) in encoded.iter().enumerate() {
        if idx == MAX_LEN {
            return Err(DecodeError::WouldOverflow);
        }

        result |= ((byte & LSB_7) as u64) << (7 * idx);
        if !msb_is_1(byte) {
            // A trailing zero group means the same value fits in fewer bytes.
            if byte == 0 && idx > 0 {
                return Err(DecodeError::NotMinimal);
            }
            return Ok((result, idx + 1));
        }
    }

    Err(DecodeError::MissingBytes)
}

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum DecodeError {
    #[error("expected more bytes than what were provided")]
    MissingBytes,
    #[error("the decoded number is too large to fit into the type without overflowing")]
    WouldOverflow,
    #[error("varint is not minimally encoded")]
    NotMinimal,
}
