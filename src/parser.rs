use crate::base128::{self, Base128Error};
use crate::error::{DecodeError, DecodeErrorKind, DecodeResult};
use crate::tag::{Tag, TagClass, CONSTRUCTED};
use alloc::vec::Vec;

// Bound on constructed nesting, so hostile inputs cannot turn tree
// building into unbounded recursion.
pub(crate) const MAX_DEPTH: usize = 64;

/// The contents of a [`Tlv`]: raw bytes for a primitive element, child
/// elements for a constructed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    Primitive(&'a [u8]),
    Constructed(Vec<Tlv<'a>>),
}

/// One decoded ASN.1 element.
///
/// `length` is the byte count of the value span as encoded; for a
/// constructed element the encoded lengths of the children sum to
/// exactly this value. Nodes borrow primitive contents from the buffer
/// they were decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv<'a> {
    tag: Tag,
    length: usize,
    value: Value<'a>,
}

impl<'a> Tlv<'a> {
    /// Builds a primitive element over `data`. The tag's constructed
    /// flag is forced to agree with the value form.
    pub fn primitive(tag: Tag, data: &'a [u8]) -> Tlv<'a> {
        Tlv {
            tag: Tag::new(tag.number(), tag.class(), false),
            length: data.len(),
            value: Value::Primitive(data),
        }
    }

    /// Builds a constructed element from child elements. The tag's
    /// constructed flag is forced to agree with the value form.
    pub fn constructed(tag: Tag, children: Vec<Tlv<'a>>) -> Tlv<'a> {
        Tlv {
            tag: Tag::new(tag.number(), tag.class(), true),
            length: children.iter().map(|child| child.encoded_len()).sum(),
            value: Value::Constructed(children),
        }
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Byte count of the encoded value span.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn value(&self) -> &Value<'a> {
        &self.value
    }

    pub(crate) fn from_parts(tag: Tag, length: usize, value: Value<'a>) -> Tlv<'a> {
        Tlv { tag, length, value }
    }
}

struct Parser<'a> {
    data: &'a [u8],
    pos: usize,
    // All reads stop at `limit` rather than `data.len()`; it is narrowed
    // to the end of the current constructed value while children are
    // decoded. Invariant: pos <= limit <= data.len().
    limit: usize,
}

impl<'a> Parser<'a> {
    fn new(data: &'a [u8]) -> Parser<'a> {
        Parser {
            data,
            pos: 0,
            limit: data.len(),
        }
    }

    fn read_u8(&mut self) -> DecodeResult<u8> {
        if self.pos >= self.limit {
            return Err(DecodeError::new(DecodeErrorKind::TruncatedInput, self.pos));
        }
        let b = self.data[self.pos];
        self.pos += 1;
        Ok(b)
    }

    fn read_slice(&mut self, length: usize) -> DecodeResult<&'a [u8]> {
        if length > self.limit - self.pos {
            return Err(DecodeError::new(DecodeErrorKind::TruncatedInput, self.pos));
        }
        let out = &self.data[self.pos..self.pos + length];
        self.pos += length;
        Ok(out)
    }

    fn read_tag(&mut self) -> DecodeResult<Tag> {
        let tag_start = self.pos;
        let b = self.read_u8()?;
        let constructed = u32::from(b) & CONSTRUCTED == CONSTRUCTED;
        let class = match b >> 6 {
            0b00 => TagClass::Universal,
            0b01 => TagClass::Application,
            0b10 => TagClass::ContextSpecific,
            0b11 => TagClass::Private,
            _ => unreachable!(),
        };
        let mut number = u32::from(b & 0x1f);

        // High-tag-number form: base-128 bytes, terminated by a byte with
        // the high bit clear.
        if number == 0x1f {
            let rest = &self.data[self.pos..self.limit];
            let (value, remainder) = match base128::read_base128_int(rest) {
                Ok(parsed) => parsed,
                Err(Base128Error::Truncated) => {
                    return Err(DecodeError::new(DecodeErrorKind::TruncatedInput, self.limit));
                }
                Err(Base128Error::Invalid) => {
                    return Err(DecodeError::new(DecodeErrorKind::InvalidTag, tag_start));
                }
            };
            self.pos += rest.len() - remainder.len();
            // Tags must be encoded in minimal form and fit in a u32.
            if value < 0x1f || value > u128::from(u32::MAX) {
                return Err(DecodeError::new(DecodeErrorKind::InvalidTag, tag_start));
            }
            number = value as u32;
        }

        Ok(Tag::new(number, class, constructed))
    }

    fn read_length(&mut self) -> DecodeResult<usize> {
        let length_start = self.pos;
        let b = self.read_u8()?;
        if b & 0x80 == 0 {
            return Ok(usize::from(b));
        }

        let num_bytes = usize::from(b & 0x7f);
        // A count of 0 is the indefinite form, which is not valid DER.
        if num_bytes == 0 {
            return Err(DecodeError::new(
                DecodeErrorKind::InvalidLength,
                length_start,
            ));
        }
        if num_bytes > self.limit - self.pos {
            return Err(DecodeError::new(
                DecodeErrorKind::InvalidLength,
                length_start,
            ));
        }

        let mut length = 0usize;
        for _ in 0..num_bytes {
            let b = self.read_u8()?;
            // Disallow leading 0s.
            if length == 0 && b == 0 {
                return Err(DecodeError::new(
                    DecodeErrorKind::InvalidLength,
                    length_start,
                ));
            }
            if length > usize::MAX >> 8 {
                return Err(DecodeError::new(
                    DecodeErrorKind::InvalidLength,
                    length_start,
                ));
            }
            length = length << 8 | usize::from(b);
        }
        // Lengths below 0x80 must use the short form.
        if length < 0x80 {
            return Err(DecodeError::new(
                DecodeErrorKind::InvalidLength,
                length_start,
            ));
        }
        Ok(length)
    }

    fn read_tlv(&mut self, depth: usize) -> DecodeResult<Tlv<'a>> {
        if depth >= MAX_DEPTH {
            return Err(DecodeError::new(DecodeErrorKind::NestingTooDeep, self.pos));
        }
        let tag = self.read_tag()?;
        let length = self.read_length()?;
        let value_start = self.pos;

        if tag.is_constructed() {
            if length > self.limit - self.pos {
                return Err(DecodeError::new(
                    DecodeErrorKind::TruncatedInput,
                    value_start,
                ));
            }
            let end = value_start + length;
            let outer_limit = self.limit;
            self.limit = end;
            let mut children = Vec::new();
            while self.pos < end {
                children.push(self.read_tlv(depth + 1)?);
            }
            self.limit = outer_limit;
            Ok(Tlv::from_parts(tag, length, Value::Constructed(children)))
        } else {
            let contents = self.read_slice(length)?;
            Ok(Tlv::from_parts(tag, length, Value::Primitive(contents)))
        }
    }
}

/// Decodes a single DER element, requiring that it spans the entire
/// input. Fails with [`DecodeErrorKind::TrailingData`] if bytes remain
/// after the element.
pub fn decode(data: &[u8]) -> DecodeResult<Tlv<'_>> {
    let (tlv, consumed) = decode_partial(data)?;
    if consumed != data.len() {
        return Err(DecodeError::new(DecodeErrorKind::TrailingData, consumed));
    }
    Ok(tlv)
}

/// Decodes a single DER element from the front of `data` and returns it
/// together with the number of bytes consumed, ignoring anything that
/// follows.
pub fn decode_partial(data: &[u8]) -> DecodeResult<(Tlv<'_>, usize)> {
    let mut parser = Parser::new(data);
    let tlv = parser.read_tlv(0)?;
    Ok((tlv, parser.pos))
}
