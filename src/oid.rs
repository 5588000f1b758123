use crate::base128;
use alloc::fmt;

/// The contents of an `OBJECT IDENTIFIER` element, borrowed from the
/// decoded buffer.
///
/// `Display` renders the dotted form, e.g. `1.2.840.113549`. Arcs are
/// limited to u128, which covers every identifier in real use including
/// the UUID-derived `2.25.*` space.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Oid<'a>(&'a [u8]);

impl<'a> Oid<'a> {
    /// Validates the DER contents of an OBJECT IDENTIFIER value. Returns
    /// `None` for an empty value or any malformed arc.
    pub fn from_der(data: &'a [u8]) -> Option<Oid<'a>> {
        if data.is_empty() {
            return None;
        }
        let mut rest = data;
        while !rest.is_empty() {
            let (_, remainder) = base128::read_base128_int(rest).ok()?;
            rest = remainder;
        }
        Some(Oid(data))
    }

    pub fn as_der(&self) -> &'a [u8] {
        self.0
    }
}

impl fmt::Display for Oid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // from_der checked every arc, so the reads here cannot fail.
        let (first, mut rest) = match base128::read_base128_int(self.0) {
            Ok(parsed) => parsed,
            Err(_) => return Err(fmt::Error),
        };
        // The first subidentifier packs the first two arcs as X*40+Y,
        // with X capped at 2.
        if first < 80 {
            write!(f, "{}.{}", first / 40, first % 40)?;
        } else {
            write!(f, "2.{}", first - 80)?;
        }

        while !rest.is_empty() {
            let (arc, remainder) = match base128::read_base128_int(rest) {
                Ok(parsed) => parsed,
                Err(_) => return Err(fmt::Error),
            };
            write!(f, ".{}", arc)?;
            rest = remainder;
        }

        Ok(())
    }
}
