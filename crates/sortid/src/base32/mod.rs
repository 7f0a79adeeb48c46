//! The 32-symbol alphabet and the digit-level primitives built on it.

mod crockford;

pub use crockford::*;

/// Number of symbols in [`ALPHABET`].
pub const ENCODING_LEN: usize = 32;

/// Default width of the time segment.
///
/// Ten digits hold `32^10 = 2^50` milliseconds, which runs out in the year
/// 37648.
pub const TIME_LEN: usize = 10;

/// Default width of the random segment (80 bits of entropy).
pub const RANDOM_LEN: usize = 16;

/// Number of digits needed to hold any `u64` millisecond value.
///
/// Encoding a `u64` into a wider segment only adds leading `0`s. A 13 digit
/// segment spans 65 bits, so decoding one can still overflow.
pub const MAX_TIME_LEN: usize = 13;
