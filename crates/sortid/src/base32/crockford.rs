use super::ENCODING_LEN;
use crate::{Error, Result};

/// Crockford's Base32 alphabet. Digits and upper-case letters without the
/// visually ambiguous `I`, `L`, `O` and `U`.
pub const ALPHABET: &[u8; ENCODING_LEN] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

const NO_VALUE: u8 = 255;
const MASK: u64 = 0x1F;
const BITS_PER_CHAR: u32 = 5;

/// Lookup table for decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    // Main alphabet, allow lower-case
    while i < 32 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_uppercase() {
            lut[(c + 32) as usize] = i;
        }
        i += 1;
    }
    // Crockford-specific aliases
    lut[b'O' as usize] = 0;
    lut[b'o' as usize] = 0;
    lut[b'I' as usize] = 1;
    lut[b'i' as usize] = 1;
    lut[b'L' as usize] = 1;
    lut[b'l' as usize] = 1;
    lut
};

/// Maps a digit in `0..32` to its symbol. Higher bits are masked off.
#[inline]
#[must_use]
pub const fn symbol(digit: u8) -> u8 {
    ALPHABET[(digit & 0x1F) as usize]
}

/// Returns the digit value of `byte`, accepting lower case and the
/// Crockford aliases (`O` for `0`, `I`/`L` for `1`).
#[inline]
#[must_use]
pub const fn digit(byte: u8) -> Option<u8> {
    match LOOKUP[byte as usize] {
        NO_VALUE => None,
        v => Some(v),
    }
}

/// Returns `true` if `byte` is one of the 32 canonical (upper-case) symbols.
#[inline]
#[must_use]
pub const fn is_canonical(byte: u8) -> bool {
    match digit(byte) {
        Some(v) => ALPHABET[v as usize] == byte,
        None => false,
    }
}

/// Writes `millis` into `buf` in base 32, most significant digit first.
///
/// Every slot of `buf` is written. The value is consumed from the right,
/// one `millis % 32` digit per slot, so short buffers silently drop the
/// high-order digits and long buffers are left-padded with `0`.
///
/// ```
/// let mut buf = [0_u8; 4];
/// sortid::base32::encode_millis_into(1_000, &mut buf);
/// assert_eq!(&buf, b"00Z8");
///
/// let mut short = [0_u8; 1];
/// sortid::base32::encode_millis_into(1_000, &mut short);
/// assert_eq!(&short, b"8");
/// ```
#[inline]
pub fn encode_millis_into(millis: u64, buf: &mut [u8]) {
    let mut value = millis;
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(value & MASK) as usize];
        value >>= BITS_PER_CHAR;
    }
}

/// Returns `true` if `millis` needs more than `len` digits, i.e. encoding it
/// into `len` slots would truncate.
#[inline]
#[must_use]
pub const fn overflows(millis: u64, len: usize) -> bool {
    let bits = len.saturating_mul(BITS_PER_CHAR as usize);
    bits < u64::BITS as usize && (millis >> bits) != 0
}

/// Decodes a run of base-32 digits into a `u64`, most significant first.
///
/// # Errors
///
/// - [`Error::DecodeInvalidAscii`] for a byte outside the alphabet
/// - [`Error::DecodeOverflow`] if the value does not fit in a `u64`
pub fn decode_digits(encoded: &[u8]) -> Result<u64> {
    let mut acc = 0_u64;
    for (index, &byte) in encoded.iter().enumerate() {
        let val = digit(byte).ok_or(Error::DecodeInvalidAscii { byte, index })?;
        if acc >> (u64::BITS - BITS_PER_CHAR) != 0 {
            return Err(Error::DecodeOverflow);
        }
        acc = (acc << BITS_PER_CHAR) | u64::from(val);
    }
    Ok(acc)
}

/// Adds one to the base-32 number held in `buf`, carrying leftwards.
///
/// Returns `false`, leaving `buf` untouched, when every digit is already
/// `Z`. Bytes outside the alphabet are treated as `0`.
///
/// ```
/// let mut buf = *b"0Z";
/// assert!(sortid::base32::increment(&mut buf));
/// assert_eq!(&buf, b"10");
///
/// let mut full = *b"ZZ";
/// assert!(!sortid::base32::increment(&mut full));
/// assert_eq!(&full, b"ZZ");
/// ```
pub fn increment(buf: &mut [u8]) -> bool {
    let Some(pos) = buf.iter().rposition(|&b| digit(b) != Some(31)) else {
        return false;
    };
    let next = digit(buf[pos]).unwrap_or(0) + 1;
    buf[pos] = symbol(next);
    for slot in &mut buf[pos + 1..] {
        *slot = ALPHABET[0];
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(millis: u64, len: usize) -> alloc::string::String {
        let mut buf = alloc::vec![0_u8; len];
        encode_millis_into(millis, &mut buf);
        alloc::string::String::from_utf8(buf).unwrap()
    }

    #[test]
    fn alphabet_excludes_ambiguous_letters() {
        for c in [b'I', b'L', b'O', b'U'] {
            assert!(!ALPHABET.contains(&c), "{} in alphabet", c as char);
        }
        let mut sorted = *ALPHABET;
        sorted.sort_unstable();
        assert_eq!(&sorted, ALPHABET, "alphabet must be in ascii order");
    }

    #[test]
    fn encodes_small_values_zero_padded() {
        assert_eq!(encode(0, 10), "0000000000");
        assert_eq!(encode(1, 10), "0000000001");
        assert_eq!(encode(31, 10), "000000000Z");
        assert_eq!(encode(32, 10), "0000000010");
    }

    #[test]
    fn encodes_known_timestamp() {
        // 2016-07-30T23:54:10.259Z
        assert_eq!(encode(1_469_922_850_259, 10), "01ARZ3NDEK");
    }

    #[test]
    fn truncates_high_order_digits() {
        assert_eq!(encode(32 * 32 + 5, 2), "05");
        assert_eq!(encode(u64::MAX, 10), "ZZZZZZZZZZ");
        assert_eq!(encode(u64::MAX, 13), "FZZZZZZZZZZZZ");
        assert!(overflows(32, 1));
        assert!(!overflows(31, 1));
        assert!(!overflows(u64::MAX, 13));
        assert!(!overflows(u64::MAX, usize::MAX));
    }

    #[test]
    fn zero_width_buffer_is_untouched() {
        assert_eq!(encode(12345, 0), "");
        assert!(overflows(1, 0));
        assert!(!overflows(0, 0));
    }

    #[test]
    fn decode_accepts_lowercase_and_aliases() {
        assert_eq!(decode_digits(b"01arz3ndek").unwrap(), 1_469_922_850_259);
        assert_eq!(
            decode_digits(b"oIL").unwrap(),
            decode_digits(b"011").unwrap()
        );
    }

    #[test]
    fn decode_rejects_invalid_bytes() {
        assert_eq!(
            decode_digits(b"00U0").unwrap_err(),
            Error::DecodeInvalidAscii {
                byte: b'U',
                index: 2
            }
        );
    }

    #[test]
    fn decode_detects_overflow() {
        assert_eq!(decode_digits(b"FZZZZZZZZZZZZ").unwrap(), u64::MAX);
        assert_eq!(
            decode_digits(b"G000000000000").unwrap_err(),
            Error::DecodeOverflow
        );
    }

    #[test]
    fn canonical_symbols() {
        assert!(ALPHABET.iter().all(|&b| is_canonical(b)));
        assert!(!is_canonical(b'a'));
        assert!(!is_canonical(b'O'));
        assert!(!is_canonical(b'-'));
    }

    #[test]
    fn increment_carries() {
        let mut buf = *b"00ZZ";
        assert!(increment(&mut buf));
        assert_eq!(&buf, b"0100");

        let mut buf = *b"Y";
        assert!(increment(&mut buf));
        assert_eq!(&buf, b"Z");
        assert!(!increment(&mut buf));
    }
}
