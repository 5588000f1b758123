//! PEM framing around a base64-encoded DER payload.

use crate::error::{DecodeError, DecodeErrorKind, DecodeResult};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

const BEGIN_PREFIX: &str = "-----BEGIN ";
const END_PREFIX: &str = "-----END ";
const DASHES_SUFFIX: &str = "-----";

/// Strips PEM framing from the first block in `text` and returns the
/// label together with the base64-decoded body bytes.
///
/// Lines before the BEGIN marker and anything after the END marker are
/// ignored; CRLF line endings are accepted. The label on the END line
/// must match the BEGIN label exactly, including case. Fails with
/// `MalformedPem` at the offending line's byte offset (0 when no BEGIN
/// marker exists, `text.len()` when the END marker is missing), or with
/// `InvalidEncoding` at an offset into the concatenated base64 body.
pub fn strip(text: &str) -> DecodeResult<(String, Vec<u8>)> {
    let mut label: Option<&str> = None;
    let mut body = String::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        let offset = line_start;
        line_start += line.len() + 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        match label {
            None => {
                if let Some(found) = begin_label(line) {
                    label = Some(found);
                }
                // Anything before the BEGIN line is ignored.
            }
            Some(expected) => {
                if let Some(found) = end_label(line) {
                    if found != expected {
                        return Err(DecodeError::new(DecodeErrorKind::MalformedPem, offset));
                    }
                    let data = crate::base64::decode(&body)?;
                    return Ok((String::from(expected), data));
                }
                // A second BEGIN before the END line is out of order.
                if begin_label(line).is_some() {
                    return Err(DecodeError::new(DecodeErrorKind::MalformedPem, offset));
                }
                body.push_str(line);
            }
        }
    }

    match label {
        // The block was opened but never closed.
        Some(_) => Err(DecodeError::new(
            DecodeErrorKind::MalformedPem,
            text.len(),
        )),
        None => Err(DecodeError::new(DecodeErrorKind::MalformedPem, 0)),
    }
}

/// Wraps `data` in PEM framing: base64 body wrapped at 64 columns
/// between matching BEGIN/END marker lines. The output ends with a
/// newline.
pub fn wrap(label: &str, data: &[u8]) -> String {
    let base64 = crate::base64::encode(data);
    let mut output = format!("{BEGIN_PREFIX}{label}{DASHES_SUFFIX}\n");

    let mut rest = base64.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(64));
        output.push_str(line);
        output.push('\n');
        rest = tail;
    }

    output.push_str(END_PREFIX);
    output.push_str(label);
    output.push_str(DASHES_SUFFIX);
    output.push('\n');
    output
}

fn begin_label(line: &str) -> Option<&str> {
    line.strip_prefix(BEGIN_PREFIX)
        .and_then(|rest| rest.strip_suffix(DASHES_SUFFIX))
}

fn end_label(line: &str) -> Option<&str> {
    line.strip_prefix(END_PREFIX)
        .and_then(|rest| rest.strip_suffix(DASHES_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::{strip, wrap};
    use crate::error::{DecodeError, DecodeErrorKind};
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_wrap() {
        assert_eq!(
            wrap("CERTIFICATE", b"\x30\x03\x02\x01\x05"),
            "-----BEGIN CERTIFICATE-----\nMAMCAQU=\n-----END CERTIFICATE-----\n"
        );
        assert_eq!(wrap("X", b""), "-----BEGIN X-----\n-----END X-----\n");
    }

    #[test]
    fn test_wrap_line_wrapping() {
        let data = [0x5a; 100];
        let text = wrap("OCTETS", &data);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "-----BEGIN OCTETS-----");
        assert_eq!(lines[1].len(), 64);
        assert_eq!(lines[2].len(), 64);
        assert_eq!(lines[3].len(), 8);
        assert_eq!(lines[4], "-----END OCTETS-----");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_strip_roundtrip() {
        let long: Vec<u8> = (0..200).collect();
        for label in ["CERTIFICATE", "PUBLIC KEY", "X"] {
            for data in [b"" as &[u8], b"\x00", b"\x30\x03\x02\x01\x05", &long] {
                let text = wrap(label, data);
                assert_eq!(strip(&text), Ok((String::from(label), data.to_vec())));
            }
        }
    }

    #[test]
    fn test_strip_ignores_surrounding_text() {
        let text = "subject=CN=test\n\
                    -----BEGIN CERTIFICATE-----\n\
                    MAMCAQU=\n\
                    -----END CERTIFICATE-----\n\
                    trailing notes\n";
        assert_eq!(
            strip(text),
            Ok((
                String::from("CERTIFICATE"),
                b"\x30\x03\x02\x01\x05".to_vec()
            ))
        );
    }

    #[test]
    fn test_strip_takes_first_block() {
        let text = "-----BEGIN A-----\nAQID\n-----END A-----\n\
                    -----BEGIN B-----\nBAUG\n-----END B-----\n";
        assert_eq!(strip(text), Ok((String::from("A"), vec![1, 2, 3])));
    }

    #[test]
    fn test_strip_crlf() {
        let text = "-----BEGIN X-----\r\nMAMCAQU=\r\n-----END X-----\r\n";
        assert_eq!(
            strip(text),
            Ok((String::from("X"), b"\x30\x03\x02\x01\x05".to_vec()))
        );
    }

    #[test]
    fn test_strip_mismatched_labels() {
        // The END label must match the BEGIN label byte for byte.
        let text = "-----BEGIN CERTIFICATE-----\nMAMCAQU=\n-----END PUBLIC KEY-----\n";
        assert_eq!(
            strip(text),
            Err(DecodeError::new(DecodeErrorKind::MalformedPem, 37))
        );
        let text = "-----BEGIN certificate-----\nMAMCAQU=\n-----END CERTIFICATE-----\n";
        assert_eq!(
            strip(text),
            Err(DecodeError::new(DecodeErrorKind::MalformedPem, 37))
        );
    }

    #[test]
    fn test_strip_missing_markers() {
        assert_eq!(
            strip(""),
            Err(DecodeError::new(DecodeErrorKind::MalformedPem, 0))
        );
        assert_eq!(
            strip("no markers here\n"),
            Err(DecodeError::new(DecodeErrorKind::MalformedPem, 0))
        );
        // END line alone is not a block.
        assert_eq!(
            strip("-----END X-----\n"),
            Err(DecodeError::new(DecodeErrorKind::MalformedPem, 0))
        );
        let text = "-----BEGIN CERTIFICATE-----\nMAMCAQU=\n";
        assert_eq!(
            strip(text),
            Err(DecodeError::new(
                DecodeErrorKind::MalformedPem,
                text.len()
            ))
        );
    }

    #[test]
    fn test_strip_nested_begin() {
        let text = "-----BEGIN A-----\nAQID\n-----BEGIN A-----\n-----END A-----\n";
        assert_eq!(
            strip(text),
            Err(DecodeError::new(DecodeErrorKind::MalformedPem, 23))
        );
    }

    #[test]
    fn test_strip_bad_base64_body() {
        // Base64 offsets are relative to the concatenated body.
        let text = "-----BEGIN X-----\nMAMC!QU=\n-----END X-----\n";
        assert_eq!(
            strip(text),
            Err(DecodeError::new(DecodeErrorKind::InvalidEncoding, 4))
        );
    }
}
