use crate::{
    Error, RANDOM_LEN, Result, TIME_LEN,
    base32::{decode_digits, is_canonical},
};

/// Decodes the millisecond timestamp from the default-width time segment of
/// `id`.
///
/// Lower case and the Crockford aliases (`O`, `I`, `L`) are accepted.
///
/// # Errors
///
/// - [`Error::DecodeInvalidLen`] if `id` is shorter than the time segment
/// - [`Error::DecodeInvalidAscii`] for a byte outside the alphabet
///
/// # Example
/// ```
/// assert_eq!(
///     sortid::decode_time("01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap(),
///     1_469_922_850_259
/// );
/// ```
pub fn decode_time(id: &str) -> Result<u64> {
    decode_time_with(id, TIME_LEN)
}

/// Decodes the millisecond timestamp from the first `time_len` characters of
/// `id`.
///
/// A truncated time segment decodes to the truncated value; the dropped
/// high-order digits cannot be recovered.
///
/// # Errors
///
/// - [`Error::DecodeInvalidLen`] if `id` is shorter than `time_len`
/// - [`Error::DecodeInvalidAscii`] for a byte outside the alphabet
/// - [`Error::DecodeOverflow`] if the segment does not fit in a `u64`
pub fn decode_time_with(id: &str, time_len: usize) -> Result<u64> {
    let bytes = id.as_bytes();
    let segment = bytes.get(..time_len).ok_or(Error::DecodeInvalidLen {
        len: bytes.len(),
        expected: time_len,
    })?;
    decode_digits(segment)
}

/// Returns `true` if `id` has the default length and consists only of
/// canonical (upper-case, alias-free) alphabet symbols.
///
/// ```
/// assert!(sortid::is_valid("01ARZ3NDEKTSV4RRFFQ69G5FAV"));
/// assert!(!sortid::is_valid("01arz3ndektsv4rrffq69g5fav"));
/// assert!(!sortid::is_valid("01ARZ3NDEK"));
/// ```
#[must_use]
pub fn is_valid(id: &str) -> bool {
    id.len() == TIME_LEN + RANDOM_LEN && id.bytes().all(is_canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_time_millis;

    #[test]
    fn decodes_what_was_encoded() {
        for millis in [0, 1, 31, 32, 1_469_922_850_259, (1 << 50) - 1] {
            let encoded = encode_time_millis(millis, TIME_LEN);
            assert_eq!(decode_time(&encoded).unwrap(), millis);
        }
    }

    #[test]
    fn ignores_random_segment() {
        assert_eq!(decode_time("0000000001ZZZZZZZZZZZZZZZZ").unwrap(), 1);
        assert_eq!(decode_time("0000000001").unwrap(), 1);
    }

    #[test]
    fn short_input_is_rejected() {
        assert_eq!(
            decode_time("00001").unwrap_err(),
            Error::DecodeInvalidLen {
                len: 5,
                expected: TIME_LEN
            }
        );
    }

    #[test]
    fn invalid_symbol_is_rejected() {
        assert_eq!(
            decode_time("00000U0000").unwrap_err(),
            Error::DecodeInvalidAscii {
                byte: b'U',
                index: 5
            }
        );
    }

    #[test]
    fn custom_width() {
        assert_eq!(decode_time_with("Z8", 2).unwrap(), 1_000);
        assert_eq!(decode_time_with("", 0).unwrap(), 0);
        assert_eq!(
            decode_time_with("ZZZZZZZZZZZZZZ", 14).unwrap_err(),
            Error::DecodeOverflow
        );
    }
}
