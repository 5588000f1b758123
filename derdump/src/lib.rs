use std::io::Write;

use dertree::{Oid, Tag, TagClass, Tlv, Value};

/// Writes an indented textual rendering of `node` and its children to
/// `out`, one line per element: the tag name, the content length, and for
/// non-empty primitives a value column. Children of a constructed element
/// are indented two further columns.
pub fn render(node: &Tlv<'_>, out: &mut dyn Write, indent: usize) -> std::io::Result<()> {
    write!(out, "{}{} len={}", " ".repeat(indent), node.tag(), node.length())?;
    match node.value() {
        Value::Constructed(children) => {
            writeln!(out)?;
            for child in children {
                render(child, out, indent + 2)?;
            }
        }
        Value::Primitive(data) => {
            if data.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, ": {}", render_primitive(node.tag(), data))?;
            }
        }
    }
    Ok(())
}

// Universal types with a well-known textual form get one; everything else
// is hex. Contents that don't fit the tag's form (a two-byte BOOLEAN, a
// malformed OBJECT IDENTIFIER) fall back to hex rather than failing.
fn render_primitive(tag: Tag, data: &[u8]) -> String {
    if tag.class() == TagClass::Universal {
        match tag.number() {
            // BOOLEAN. DER allows only 0xff and 0x00.
            0x01 => {
                if data == b"\xff" {
                    return "true".to_string();
                } else if data == b"\x00" {
                    return "false".to_string();
                }
            }
            // INTEGER and ENUMERATED.
            0x02 | 0x0a => return render_integer(data),
            // OBJECT IDENTIFIER
            0x06 => {
                if let Some(oid) = Oid::from_der(data) {
                    return oid.to_string();
                }
            }
            // UTF8String, NumericString, PrintableString, IA5String,
            // UTCTime, GeneralizedTime, VisibleString.
            0x0c | 0x12 | 0x13 | 0x16 | 0x17 | 0x18 | 0x1a => {
                if let Ok(s) = std::str::from_utf8(data) {
                    if s.chars().all(|c| !c.is_control()) {
                        return format!("{s:?}");
                    }
                }
            }
            _ => {}
        }
    }
    hex::encode(data)
}

fn render_integer(data: &[u8]) -> String {
    let hex_data = hex::encode(data);
    let mut hex_str = hex_data.trim_start_matches('0');
    if hex_str.is_empty() {
        hex_str = "0";
    }
    let sign = if data.first().is_some_and(|b| b & 0x80 != 0) {
        "-"
    } else {
        ""
    };
    format!("{sign}0x{hex_str}")
}
