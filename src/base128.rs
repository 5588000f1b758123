// Base-128 integers: 7 bits per byte, high bit set on every byte except
// the last. Used by high-tag-number forms and OBJECT IDENTIFIER arcs.

// ceil(128 / 7) bytes are enough for any u128.
const MAX_BASE128_BYTES: usize = 19;

/// Why a base-128 read failed. The reader only knows the reason; callers
/// attach the buffer position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Base128Error {
    /// The input ended while the continuation bit was still set.
    Truncated,
    /// A non-minimal encoding, or a value beyond u128.
    Invalid,
}

pub(crate) fn read_base128_int(mut data: &[u8]) -> Result<(u128, &[u8]), Base128Error> {
    let mut ret = 0u128;
    for i in 0..MAX_BASE128_BYTES {
        let b = match data.first() {
            Some(b) => *b,
            None => return Err(Base128Error::Truncated),
        };
        data = &data[1..];
        if ret > u128::MAX >> 7 {
            return Err(Base128Error::Invalid);
        }
        ret <<= 7;
        ret |= u128::from(b & 0x7f);
        // Integers must be minimally encoded. `i == 0 && 0x80` would mean
        // that the first byte had a value of 0, which is non-minimal.
        if i == 0 && b == 0x80 {
            return Err(Base128Error::Invalid);
        }
        if b & 0x80 == 0 {
            return Ok((ret, data));
        }
    }
    Err(Base128Error::Invalid)
}

pub(crate) fn base128_length(mut n: u128) -> usize {
    if n == 0 {
        return 1;
    }

    let mut length = 0;
    while n > 0 {
        length += 1;
        n >>= 7;
    }
    length
}

pub(crate) fn write_base128_int(dest: &mut alloc::vec::Vec<u8>, n: u128) {
    let length = base128_length(n);
    for i in (0..length).rev() {
        let mut o = (n >> (i * 7)) as u8;
        o &= 0x7f;
        if i != 0 {
            o |= 0x80;
        }
        dest.push(o);
    }
}
