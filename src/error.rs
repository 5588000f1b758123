use alloc::fmt;

/// The kinds of failure that can occur while decoding DER, PEM framing,
/// or base64 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The base64 body contained a non-alphabet character or its padding
    /// was incorrect.
    InvalidEncoding,
    /// A PEM marker line was missing, mismatched, or out of order.
    MalformedPem,
    /// A tag was not encoded in the minimal DER form, or its number does
    /// not fit in a u32.
    InvalidTag,
    /// A length field used the indefinite form or was not encoded in the
    /// minimal DER form, or it does not fit in a usize.
    InvalidLength,
    /// The input ended before the element it describes.
    TruncatedInput,
    /// Bytes remained after the top-level element.
    TrailingData,
    /// Constructed elements were nested deeper than the decoder's bound.
    NestingTooDeep,
}

impl DecodeErrorKind {
    fn as_str(&self) -> &'static str {
        match self {
            DecodeErrorKind::InvalidEncoding => "invalid base64",
            DecodeErrorKind::MalformedPem => "malformed PEM",
            DecodeErrorKind::InvalidTag => "invalid tag",
            DecodeErrorKind::InvalidLength => "invalid length",
            DecodeErrorKind::TruncatedInput => "truncated input",
            DecodeErrorKind::TrailingData => "trailing data",
            DecodeErrorKind::NestingTooDeep => "nesting too deep",
        }
    }
}

/// A decoding failure together with the byte offset at which it
/// occurred. The offset is relative to the buffer the failing operation
/// was handed: input text for [`crate::pem::strip`] and
/// [`crate::base64::decode`], the DER buffer for [`crate::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    offset: usize,
}

impl DecodeError {
    #[inline]
    pub fn new(kind: DecodeErrorKind, offset: usize) -> DecodeError {
        DecodeError { kind, offset }
    }

    #[inline]
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// Byte offset into the decoded buffer at which the error occurred.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind.as_str(), self.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

pub type DecodeResult<T = ()> = Result<T, DecodeError>;
