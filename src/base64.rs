//! Standard-alphabet base64, padded.
//!
//! The decoder reports [`DecodeErrorKind::InvalidEncoding`] with the
//! byte index of the offending character, so it scans the input in
//! place rather than filtering whitespace out first.

use crate::error::{DecodeError, DecodeErrorKind, DecodeResult};
use alloc::string::String;
use alloc::vec::Vec;

const ENCODE_TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Encodes bytes as base64 text with padding and no line breaks.
pub fn encode(input: &[u8]) -> String {
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let b0 = u32::from(chunk[0]);
        let b1 = chunk.get(1).map_or(0, |&b| u32::from(b));
        let b2 = chunk.get(2).map_or(0, |&b| u32::from(b));

        let triple = (b0 << 16) | (b1 << 8) | b2;

        output.push(ENCODE_TABLE[((triple >> 18) & 0x3f) as usize] as char);
        output.push(ENCODE_TABLE[((triple >> 12) & 0x3f) as usize] as char);

        if chunk.len() > 1 {
            output.push(ENCODE_TABLE[((triple >> 6) & 0x3f) as usize] as char);
        } else {
            output.push('=');
        }

        if chunk.len() > 2 {
            output.push(ENCODE_TABLE[(triple & 0x3f) as usize] as char);
        } else {
            output.push('=');
        }
    }

    output
}

/// Decodes padded base64 text, ignoring ASCII whitespace anywhere in the
/// input.
///
/// Fails with `InvalidEncoding` at the offending byte index for
/// non-alphabet characters, interior or misplaced `=`, and data after
/// the final padded group; an input that ends mid-group fails at
/// `text.len()`.
pub fn decode(text: &str) -> DecodeResult<Vec<u8>> {
    let bytes = text.as_bytes();
    let mut output = Vec::with_capacity(bytes.len() / 4 * 3);
    let mut quad = [0u32; 4];
    let mut quad_len = 0;
    let mut pad_len = 0;
    // Set once a padded group has been emitted; only whitespace may
    // follow.
    let mut done = false;

    for (i, &b) in bytes.iter().enumerate() {
        if b.is_ascii_whitespace() {
            continue;
        }
        if done {
            return Err(DecodeError::new(DecodeErrorKind::InvalidEncoding, i));
        }
        if b == b'=' {
            // Padding can only complete a group that already has two
            // data characters.
            if quad_len < 2 {
                return Err(DecodeError::new(DecodeErrorKind::InvalidEncoding, i));
            }
            pad_len += 1;
            if quad_len + pad_len == 4 {
                flush(&mut output, &quad, quad_len);
                quad = [0; 4];
                done = true;
            }
            continue;
        }
        if pad_len > 0 {
            return Err(DecodeError::new(DecodeErrorKind::InvalidEncoding, i));
        }
        match decode_char(b) {
            Some(v) => {
                quad[quad_len] = v;
                quad_len += 1;
            }
            None => return Err(DecodeError::new(DecodeErrorKind::InvalidEncoding, i)),
        }
        if quad_len == 4 {
            flush(&mut output, &quad, 4);
            quad = [0; 4];
            quad_len = 0;
        }
    }

    // A group left open at the end of input means missing padding.
    if quad_len != 0 && !done {
        return Err(DecodeError::new(
            DecodeErrorKind::InvalidEncoding,
            text.len(),
        ));
    }
    Ok(output)
}

// `n` data characters of the group are valid; unset slots are zero.
fn flush(output: &mut Vec<u8>, quad: &[u32; 4], n: usize) {
    let triple = quad[0] << 18 | quad[1] << 12 | quad[2] << 6 | quad[3];
    output.push((triple >> 16) as u8);
    if n >= 3 {
        output.push((triple >> 8) as u8);
    }
    if n == 4 {
        output.push(triple as u8);
    }
}

fn decode_char(c: u8) -> Option<u32> {
    match c {
        b'A'..=b'Z' => Some(u32::from(c - b'A')),
        b'a'..=b'z' => Some(u32::from(c - b'a') + 26),
        b'0'..=b'9' => Some(u32::from(c - b'0') + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}
