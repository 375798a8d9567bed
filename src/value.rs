//! Single-value codec: one number to a self-delimiting run of ASCII bytes.
//!
//! A value is scaled to a fixed-point integer, shifted left one bit with the
//! sign folded into bit 0, then split into 5-bit chunks, least significant
//! first. Every chunk except the last carries a continuation flag (0x20) and
//! each byte is offset by 63 into the printable range `[63, 126]`.

use crate::error::{PolylineError, Result};
use crate::precision::Precision;

const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u8 = 0x1f;
const CONTINUATION: u8 = 0x20;
const ASCII_OFFSET: u8 = 63;
const MAX_BYTE: u8 = ASCII_OFFSET + 0x3f;

/// A 32-bit value never needs more than seven chunks.
const MAX_CHUNKS: u32 = 7;

/// Lazily yields the encoded bytes of one fixed-point value.
#[derive(Debug, Clone)]
pub struct Chunks {
    remaining: u32,
    done: bool,
}

impl Chunks {
    pub fn new(fixed: i32) -> Self {
        let mut shifted = (fixed as u32).wrapping_shl(1);
        if fixed < 0 {
            shifted = !shifted;
        }
        Self {
            remaining: shifted,
            done: false,
        }
    }
}

impl Iterator for Chunks {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }

        let mut chunk = (self.remaining as u8) & CHUNK_MASK;
        self.remaining >>= CHUNK_BITS;
        if self.remaining == 0 {
            self.done = true;
        } else {
            chunk |= CONTINUATION;
        }

        Some(chunk + ASCII_OFFSET)
    }
}

/// Appends the encoding of a fixed-point value to `out`.
pub fn encode_fixed(fixed: i32, out: &mut String) {
    out.extend(Chunks::new(fixed).map(char::from));
}

/// Encodes a single real value at the given precision.
///
/// Values whose scaled magnitude rounds to zero encode as `"?"`.
pub fn encode_value(value: f64, precision: Precision) -> Result<String> {
    let fixed = precision.to_fixed(value)?;
    let mut out = String::new();
    encode_fixed(fixed, &mut out);
    Ok(out)
}

/// Decodes one fixed-point value starting at `*cursor`, advancing the cursor
/// past the bytes consumed.
pub fn decode_fixed(bytes: &[u8], cursor: &mut usize) -> Result<i32> {
    let start = *cursor;
    let mut acc: u64 = 0;
    let mut shift = 0;

    loop {
        let Some(&byte) = bytes.get(*cursor) else {
            return Err(PolylineError::IncompleteValue { position: start });
        };
        if !(ASCII_OFFSET..=MAX_BYTE).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                byte,
                position: *cursor,
            });
        }
        if shift >= MAX_CHUNKS * CHUNK_BITS {
            return Err(PolylineError::ValueTooLong { position: start });
        }

        let chunk = byte - ASCII_OFFSET;
        acc |= u64::from(chunk & CHUNK_MASK) << shift;
        shift += CHUNK_BITS;
        *cursor += 1;

        if chunk & CONTINUATION == 0 {
            break;
        }
    }

    let acc = u32::try_from(acc).map_err(|_| PolylineError::ValueTooLong { position: start })?;
    let magnitude = (acc >> 1) as i32;
    Ok(if acc & 1 == 1 { !magnitude } else { magnitude })
}

/// Decodes one real value starting at `*cursor`.
pub fn decode_value(bytes: &[u8], cursor: &mut usize, precision: Precision) -> Result<f64> {
    decode_fixed(bytes, cursor).map(|fixed| precision.from_fixed(i64::from(fixed)))
}
