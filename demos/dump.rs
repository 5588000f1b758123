//! Builds a small structure, wraps it in PEM framing, then decodes it
//! back and walks the element tree.
//!
//! Run with `cargo run --example dump`.

use dertree::{Tag, Tlv, Value};

fn walk(node: &Tlv<'_>, depth: usize) {
    print!("{}{} len={}", "  ".repeat(depth), node.tag(), node.length());
    match node.value() {
        Value::Primitive(data) => println!(" value={data:02x?}"),
        Value::Constructed(children) => {
            println!();
            for child in children {
                walk(child, depth + 1);
            }
        }
    }
}

fn main() -> Result<(), dertree::DecodeError> {
    let name = Tlv::constructed(
        Tag::constructed(0x10),
        vec![
            Tlv::primitive(Tag::primitive(0x06), b"\x55\x04\x03"),
            Tlv::primitive(Tag::primitive(0x13), b"hello"),
        ],
    );
    let record = Tlv::constructed(
        Tag::constructed(0x10),
        vec![
            Tlv::primitive(Tag::primitive(0x02), b"\x01"),
            name,
            Tlv::primitive(Tag::primitive(0x02), b"\x2a"),
        ],
    );

    let text = dertree::pem::wrap("DEMO RECORD", &record.to_der());
    print!("{text}");

    let (_, der) = dertree::pem::strip(&text)?;
    walk(&dertree::decode(&der)?, 0);
    Ok(())
}
