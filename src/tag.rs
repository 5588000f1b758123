use crate::base128;
use alloc::fmt;
use alloc::vec::Vec;

/// The class of an ASN.1 tag, from bits 7-6 of the initial tag byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TagClass {
    Universal = 0b00,
    Application = 0b01,
    ContextSpecific = 0b10,
    Private = 0b11,
}

pub(crate) const CONSTRUCTED: u32 = 0x20;

/// An ASN.1 tag: class, constructed flag, and tag number.
///
/// `Display` resolves known universal tag numbers to their ASN.1 type
/// names and renders everything else numerically, e.g. `[APPLICATION 3]`
/// or `[0]` for a context-specific tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    number: u32,
    constructed: bool,
    class: TagClass,
}

impl Tag {
    pub const fn new(number: u32, class: TagClass, constructed: bool) -> Tag {
        Tag {
            number,
            constructed,
            class,
        }
    }

    /// A primitive tag in the universal class.
    pub const fn primitive(number: u32) -> Tag {
        Tag::new(number, TagClass::Universal, false)
    }

    /// A constructed tag in the universal class.
    pub const fn constructed(number: u32) -> Tag {
        Tag::new(number, TagClass::Universal, true)
    }

    #[inline]
    pub const fn class(&self) -> TagClass {
        self.class
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[inline]
    pub const fn is_constructed(&self) -> bool {
        self.constructed
    }

    pub(crate) fn encoded_len(&self) -> usize {
        if self.number >= 0x1f {
            1 + base128::base128_length(u128::from(self.number))
        } else {
            1
        }
    }

    pub(crate) fn write_bytes(&self, dest: &mut Vec<u8>) {
        let mut b = ((self.class as u8) << 6)
            | if self.constructed {
                CONSTRUCTED as u8
            } else {
                0
            };
        if self.number >= 0x1f {
            b |= 0x1f;
            dest.push(b);
            base128::write_base128_int(dest, u128::from(self.number));
        } else {
            b |= self.number as u8;
            dest.push(b);
        }
    }
}

// Universal tag numbers 14 and 15 are reserved, 0 is the BER
// end-of-contents octet, and 29 is the unrestricted CHARACTER STRING
// type; all fall through to the numeric form.
const UNIVERSAL_NAMES: [Option<&str>; 31] = [
    None,
    Some("BOOLEAN"),
    Some("INTEGER"),
    Some("BIT STRING"),
    Some("OCTET STRING"),
    Some("NULL"),
    Some("OBJECT IDENTIFIER"),
    Some("ObjectDescriptor"),
    Some("EXTERNAL"),
    Some("REAL"),
    Some("ENUMERATED"),
    Some("EMBEDDED PDV"),
    Some("UTF8String"),
    Some("RELATIVE-OID"),
    None,
    None,
    Some("SEQUENCE"),
    Some("SET"),
    Some("NumericString"),
    Some("PrintableString"),
    Some("TeletexString"),
    Some("VideotexString"),
    Some("IA5String"),
    Some("UTCTime"),
    Some("GeneralizedTime"),
    Some("GraphicString"),
    Some("VisibleString"),
    Some("GeneralString"),
    Some("UniversalString"),
    None,
    Some("BMPString"),
];

fn universal_name(number: u32) -> Option<&'static str> {
    UNIVERSAL_NAMES.get(number as usize).copied().flatten()
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            TagClass::Universal => match universal_name(self.number) {
                Some(name) => f.write_str(name),
                None => write!(f, "[UNIVERSAL {}]", self.number),
            },
            TagClass::Application => write!(f, "[APPLICATION {}]", self.number),
            TagClass::ContextSpecific => write!(f, "[{}]", self.number),
            TagClass::Private => write!(f, "[PRIVATE {}]", self.number),
        }
    }
}
