//! Strict DER decoding into a tag/length/value tree, with the PEM and
//! base64 plumbing needed to get from text files to raw DER bytes.
//!
//! The decoder is structural: it produces the element tree exactly as
//! encoded, without interpreting values against a schema. Everything
//! BER permits beyond strict DER (indefinite lengths, non-minimal tag
//! and length forms) is rejected, which is what makes [`Tlv::to_der`]
//! reproduce the decoded input byte for byte.
//!
//! ```
//! let tlv = dertree::decode(b"\x30\x03\x02\x01\x05")?;
//! assert_eq!(tlv.tag(), dertree::Tag::constructed(0x10));
//! match tlv.value() {
//!     dertree::Value::Constructed(children) => {
//!         assert_eq!(children.len(), 1);
//!         assert_eq!(children[0].tag(), dertree::Tag::primitive(0x02));
//!         assert_eq!(
//!             children[0].value(),
//!             &dertree::Value::Primitive(b"\x05" as &[u8]),
//!         );
//!     }
//!     dertree::Value::Primitive(_) => unreachable!(),
//! }
//! # Ok::<(), dertree::DecodeError>(())
//! ```
//!
//! Errors carry the byte offset at which decoding failed:
//!
//! ```
//! use dertree::{DecodeError, DecodeErrorKind};
//!
//! assert_eq!(
//!     dertree::decode(b"\x30\x05\x02\x01"),
//!     Err(DecodeError::new(DecodeErrorKind::TruncatedInput, 2)),
//! );
//! ```
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod base128;
pub mod base64;
mod encode;
mod error;
mod oid;
mod parser;
pub mod pem;
mod tag;

pub use crate::error::{DecodeError, DecodeErrorKind, DecodeResult};
pub use crate::oid::Oid;
pub use crate::parser::{decode, decode_partial, Tlv, Value};
pub use crate::tag::{Tag, TagClass};
