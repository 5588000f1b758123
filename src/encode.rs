use crate::parser::{Tlv, Value};
use alloc::vec::Vec;

impl Tlv<'_> {
    /// Total encoded size of this element: tag, length field, and value.
    pub fn encoded_len(&self) -> usize {
        self.tag().encoded_len() + length_length(self.length()) + self.length()
    }

    /// Appends the DER encoding of this element to `dest`.
    pub fn write_der(&self, dest: &mut Vec<u8>) {
        self.tag().write_bytes(dest);
        write_length(dest, self.length());
        match self.value() {
            Value::Primitive(data) => dest.extend_from_slice(data),
            Value::Constructed(children) => {
                for child in children {
                    child.write_der(dest);
                }
            }
        }
    }

    /// The DER encoding of this element. Because decoding enforces
    /// minimal encodings, `decode(data)?.to_der()` reproduces `data`
    /// exactly.
    pub fn to_der(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_der(&mut out);
        out
    }
}

// Byte count of the length field for a value of `length` bytes.
pub(crate) fn length_length(length: usize) -> usize {
    if length < 0x80 {
        return 1;
    }
    let mut i = length;
    let mut num_bytes = 1;
    while i > 255 {
        num_bytes += 1;
        i >>= 8;
    }
    1 + num_bytes
}

pub(crate) fn write_length(dest: &mut Vec<u8>, length: usize) {
    if length < 0x80 {
        dest.push(length as u8);
        return;
    }
    let num_bytes = length_length(length) - 1;
    dest.push(0x80 | num_bytes as u8);
    for i in (0..num_bytes).rev() {
        dest.push((length >> (i * 8)) as u8);
    }
}
