use crate::{
    RANDOM_LEN, RandSource, Result, TIME_LEN, TimeSource,
    base32::{self, encode_millis_into},
    rand::draw_to_digit,
    time::secs_to_millis,
};
use alloc::{string::String, vec};
#[cfg(doc)]
use crate::Error;
#[cfg(feature = "tracing")]
use tracing::instrument;

#[cfg(feature = "std")]
type DefaultTime = crate::SystemClock;
#[cfg(not(feature = "std"))]
type DefaultTime = crate::Unavailable;

#[cfg(feature = "std")]
type DefaultRand = crate::ThreadRandom;
#[cfg(not(feature = "std"))]
type DefaultRand = crate::Unavailable;

/// Encodes `millis` as a `len` character time segment.
///
/// High-order digits that do not fit in `len` characters are dropped, so the
/// result always has exactly `len` characters. Lexicographic order matches
/// numeric order as long as no truncation happens.
///
/// ```
/// use sortid::encode_time_millis;
///
/// assert_eq!(encode_time_millis(0, 10), "0000000000");
/// assert_eq!(encode_time_millis(1, 10), "0000000001");
/// assert_eq!(encode_time_millis(1_469_922_850_259, 10), "01ARZ3NDEK");
/// ```
#[must_use]
pub fn encode_time_millis(millis: u64, len: usize) -> String {
    #[cfg(feature = "tracing")]
    {
        if base32::overflows(millis, len) {
            tracing::debug!(millis, len, "time segment truncated");
        }
    }
    let mut buf = vec![0_u8; len];
    encode_millis_into(millis, &mut buf);
    ascii_to_string(&buf)
}

pub(crate) fn ascii_to_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    out.extend(bytes.iter().copied().map(char::from));
    out
}

/// Builds a full identifier from a millisecond timestamp and an already
/// encoded random segment.
pub(crate) fn compose(millis: u64, time_len: usize, random: &[u8]) -> String {
    let mut out = encode_time_millis(millis, time_len);
    out.reserve(random.len());
    out.extend(random.iter().copied().map(char::from));
    out
}

/// A sortable identifier encoder holding its time and random sources.
///
/// The encoder owns the two sources instead of reaching for process-wide
/// state. Whoever embeds it decides which clock and which RNG are used, and
/// can swap either one later.
///
/// Identifiers are `time_len + random_len` characters long (10 + 16 by
/// default). Identifiers made from non-decreasing timestamps sort
/// non-decreasingly as strings, as long as the time segment does not
/// overflow its width.
///
/// ## Features
/// - ✅ Deterministic given fixed sources
/// - ✅ Time-ordered (random within the same millisecond)
/// - ❌ Not monotonic within a millisecond, see [`MonoEncoder`]
///
/// # Example
/// ```
/// use sortid::{Encoder, FnRandom, FnTime};
///
/// let encoder = Encoder::new(FnTime(|| 1_469_922_850.259), FnRandom(|| 0.999));
/// let id = encoder.new_identifier(None).unwrap();
/// assert_eq!(id, "01ARZ3NDEKZZZZZZZZZZZZZZZZ");
/// ```
///
/// [`MonoEncoder`]: crate::MonoEncoder
#[derive(Clone, Debug)]
pub struct Encoder<T = DefaultTime, R = DefaultRand> {
    time: T,
    rng: R,
    time_len: usize,
    random_len: usize,
}

impl Default for Encoder {
    /// Creates an encoder with the platform's default sources.
    ///
    /// With the `std` feature these are [`SystemClock`] and
    /// [`ThreadRandom`]. Without it no default exists and every operation
    /// needing a source fails with [`Error::MissingCapability`] until one is
    /// supplied.
    ///
    /// [`SystemClock`]: crate::SystemClock
    /// [`ThreadRandom`]: crate::ThreadRandom
    fn default() -> Self {
        Self::new(DefaultTime::default(), DefaultRand::default())
    }
}

impl<T, R> Encoder<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`Encoder`] with the default segment widths.
    ///
    /// # Parameters
    /// - `time`: A [`TimeSource`] consulted when no explicit time is given
    /// - `rng`: A [`RandSource`] drawn once per random character
    pub const fn new(time: T, rng: R) -> Self {
        Self {
            time,
            rng,
            time_len: TIME_LEN,
            random_len: RANDOM_LEN,
        }
    }

    /// Sets the segment widths used by [`Self::new_identifier`].
    #[must_use]
    pub fn with_lengths(mut self, time_len: usize, random_len: usize) -> Self {
        self.time_len = time_len;
        self.random_len = random_len;
        self
    }

    /// Returns `(time_len, random_len)`.
    pub const fn lengths(&self) -> (usize, usize) {
        (self.time_len, self.random_len)
    }

    /// Returns the configured time source.
    pub const fn time_source(&self) -> &T {
        &self.time
    }

    /// Returns the configured random source.
    pub const fn rand_source(&self) -> &R {
        &self.rng
    }

    /// Replaces the time source, possibly with one of a different type.
    pub fn with_time_source<T2: TimeSource>(self, time: T2) -> Encoder<T2, R> {
        Encoder {
            time,
            rng: self.rng,
            time_len: self.time_len,
            random_len: self.random_len,
        }
    }

    /// Replaces the random source, possibly with one of a different type.
    pub fn with_rand_source<R2: RandSource>(self, rng: R2) -> Encoder<T, R2> {
        Encoder {
            time: self.time,
            rng,
            time_len: self.time_len,
            random_len: self.random_len,
        }
    }

    /// Replaces the time source for all later encodings.
    ///
    /// The new source is not called until the next encoding, so a stepping
    /// or counting source loses no values. A value outside the time
    /// contract surfaces there as [`Error::InvalidArgument`].
    pub fn set_time_source(&mut self, time: T) {
        self.time = time;
    }

    /// Replaces the random source for all later encodings.
    ///
    /// As with [`Self::set_time_source`], the first draw happens at the next
    /// encoding.
    pub fn set_rand_source(&mut self, rng: R) {
        self.rng = rng;
    }

    /// Reads the time source and returns whole milliseconds since the epoch.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingCapability`] if no clock is configured
    /// - [`Error::InvalidArgument`] if the clock returns a non-finite or
    ///   negative value
    pub fn now_millis(&self) -> Result<u64> {
        secs_to_millis(self.time.current_secs()?)
    }

    /// Encodes a time as a `len` character segment.
    ///
    /// `time` is in seconds since the epoch with millisecond precision; when
    /// `None` the time source is consulted. The segment holds
    /// `floor(time * 1000)` in base 32, most significant digit first and
    /// zero-padded. High-order digits that do not fit are silently dropped,
    /// so the result always has exactly `len` characters.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingCapability`] if `time` is `None` and no clock is
    ///   configured
    /// - [`Error::InvalidArgument`] for a non-finite or negative time
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn encode_time(&self, time: Option<f64>, len: usize) -> Result<String> {
        let millis = match time {
            Some(secs) => secs_to_millis(secs)?,
            None => self.now_millis()?,
        };
        Ok(encode_time_millis(millis, len))
    }

    /// Draws a `len` character random segment.
    ///
    /// Each character is `ALPHABET[floor(r * 32)]` for a fresh draw `r`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingCapability`] if no random source is configured
    /// - [`Error::InvalidArgument`] if a draw falls outside `[0, 1)`
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn encode_random(&self, len: usize) -> Result<String> {
        let mut buf = vec![0_u8; len];
        self.fill_random(&mut buf)?;
        Ok(ascii_to_string(&buf))
    }

    /// Creates a full identifier: the time segment followed by the random
    /// segment, using this encoder's widths.
    ///
    /// # Errors
    ///
    /// Same as [`Self::encode_time`] and [`Self::encode_random`]. Nothing is
    /// returned unless both segments succeed.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn new_identifier(&self, time: Option<f64>) -> Result<String> {
        let mut id = self.encode_time(time, self.time_len)?;
        id.push_str(&self.encode_random(self.random_len)?);
        Ok(id)
    }

    /// Creates a full identifier for an explicit millisecond timestamp.
    ///
    /// # Errors
    ///
    /// Same as [`Self::encode_random`].
    pub fn new_identifier_at_millis(&self, millis: u64) -> Result<String> {
        let mut random = vec![0_u8; self.random_len];
        self.fill_random(&mut random)?;
        Ok(compose(millis, self.time_len, &random))
    }

    pub(crate) fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        for slot in buf.iter_mut() {
            *slot = base32::symbol(draw_to_digit(self.rng.random()?)?);
        }
        Ok(())
    }
}
