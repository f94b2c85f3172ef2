// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! SCALE compact integers.
//!
//! The two low bits of the first byte select the mode:
//!
//! | bits | mode        | range            | width             |
//! |------|-------------|------------------|-------------------|
//! | 00   | single byte | `0 ..= 2^6 - 1`  | 1                 |
//! | 01   | two byte    | `2^6 ..= 2^14-1` | 2                 |
//! | 10   | four byte   | `2^14 ..= 2^30-1`| 4                 |
//! | 11   | big integer | `2^30 ..`        | 1 + (upper6 + 4)  |

use super::CodecError;

const SINGLE_MAX: u128 = 0x3F;
const TWO_MAX: u128 = 0x3FFF;
const FOUR_MAX: u128 = 0x3FFF_FFFF;

/// Append the compact encoding of `value`.
pub fn encode_compact(value: u128, out: &mut Vec<u8>) {
    match value {
        0..=SINGLE_MAX => out.push((value as u8) << 2),
        0..=TWO_MAX => out.extend(&(((value as u16) << 2) | 0b01).to_le_bytes()),
        0..=FOUR_MAX => out.extend(&(((value as u32) << 2) | 0b10).to_le_bytes()),
        _ => {
            let width = big_width(value);
            out.push((((width - 4) as u8) << 2) | 0b11);
            out.extend(&value.to_le_bytes()[..width]);
        }
    }
}

/// Encoded size of `value` in bytes.
pub fn compact_len(value: u128) -> usize {
    match value {
        0..=SINGLE_MAX => 1,
        0..=TWO_MAX => 2,
        0..=FOUR_MAX => 4,
        _ => 1 + big_width(value),
    }
}

/// Decode a compact integer from the front of `input`.
///
/// Returns the value and the number of bytes consumed. Non-canonical
/// encodings (a value written in a wider mode than needed) are rejected.
pub fn decode_compact(input: &[u8]) -> Result<(u128, usize), CodecError> {
    let first = *input.first().ok_or(CodecError::UnexpectedEof { need: 1, have: 0 })?;
    match first & 0b11 {
        0b00 => Ok((u128::from(first >> 2), 1)),
        0b01 => {
            let bytes = take(input, 2)?;
            let value = u16::from_le_bytes([bytes[0], bytes[1]]) >> 2;
            let value = u128::from(value);
            if value <= SINGLE_MAX {
                return Err(CodecError::NonCanonicalCompact);
            }
            Ok((value, 2))
        }
        0b10 => {
            let bytes = take(input, 4)?;
            let value = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) >> 2;
            let value = u128::from(value);
            if value <= TWO_MAX {
                return Err(CodecError::NonCanonicalCompact);
            }
            Ok((value, 4))
        }
        _ => {
            let width = usize::from(first >> 2) + 4;
            if width > 16 {
                return Err(CodecError::CompactOverflow);
            }
            let bytes = take(input, 1 + width)?;
            let mut raw = [0u8; 16];
            raw[..width].copy_from_slice(&bytes[1..]);
            let value = u128::from_le_bytes(raw);
            if value <= FOUR_MAX || bytes[width] == 0 {
                return Err(CodecError::NonCanonicalCompact);
            }
            Ok((value, 1 + width))
        }
    }
}

/// Bytes needed for a big-integer mode payload (at least four).
fn big_width(value: u128) -> usize {
    let significant = 16 - (value.leading_zeros() / 8) as usize;
    significant.max(4)
}

fn take(input: &[u8], count: usize) -> Result<&[u8], CodecError> {
    input.get(..count).ok_or(CodecError::UnexpectedEof {
        need: count,
        have: input.len(),
    })
}
