use crate::{
    Encoder, Error, RandSource, Result, TimeSource, base32, encoder::basic::compose,
    time::secs_to_millis,
};
use alloc::{string::String, vec, vec::Vec};
use core::cell::RefCell;
#[cfg(feature = "tracing")]
use tracing::instrument;

#[derive(Clone, Debug)]
struct MonoState {
    millis: u64,
    random: Vec<u8>,
}

/// A *monotonic* identifier encoder suitable for single-threaded use.
///
/// Identifiers from one `MonoEncoder` are strictly increasing. When the
/// clock reports the same millisecond as the previous identifier (or an
/// earlier one, after a clock step backwards), the previous timestamp is
/// reused and the previous random segment is incremented by one instead of
/// drawing a new one.
///
/// ## Features
/// - ❌ Not thread-safe
/// - ✅ Strictly increasing within this encoder
/// - ✅ Fresh randomness whenever the clock moves forward
///
/// # Example
/// ```
/// use sortid::{FnRandom, FnTime, MonoEncoder};
///
/// let encoder = MonoEncoder::new(FnTime(|| 0.0), FnRandom(|| 0.0));
/// let a = encoder.new_identifier(None).unwrap();
/// let b = encoder.new_identifier(None).unwrap();
/// assert_eq!(a, "00000000000000000000000000");
/// assert_eq!(b, "00000000000000000000000001");
/// ```
#[derive(Debug)]
pub struct MonoEncoder<T, R> {
    encoder: Encoder<T, R>,
    state: RefCell<Option<MonoState>>,
}

impl<T, R> MonoEncoder<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`MonoEncoder`] with the default segment widths.
    pub fn new(time: T, rng: R) -> Self {
        Self::from_encoder(Encoder::new(time, rng))
    }

    /// Wraps an existing [`Encoder`], keeping its sources and widths.
    pub const fn from_encoder(encoder: Encoder<T, R>) -> Self {
        Self {
            encoder,
            state: RefCell::new(None),
        }
    }

    /// Returns the wrapped encoder.
    pub const fn encoder(&self) -> &Encoder<T, R> {
        &self.encoder
    }

    /// Forgets the previous identifier so the next one draws fresh
    /// randomness regardless of the clock.
    pub fn reset(&self) {
        self.state.replace(None);
    }

    /// Creates the next identifier.
    ///
    /// `time` overrides the time source for this call, in seconds since the
    /// epoch.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingCapability`] if a needed source is not configured
    /// - [`Error::InvalidArgument`] for an out-of-range time or draw
    /// - [`Error::RandomExhausted`] if the random segment of the previous
    ///   identifier is already all `Z` and the clock has not moved forward
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn new_identifier(&self, time: Option<f64>) -> Result<String> {
        let millis = match time {
            Some(secs) => secs_to_millis(secs)?,
            None => self.encoder.now_millis()?,
        };
        self.new_identifier_at_millis(millis)
    }

    /// Creates the next identifier for an explicit millisecond timestamp.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new_identifier`], minus the time source errors.
    pub fn new_identifier_at_millis(&self, millis: u64) -> Result<String> {
        let (time_len, random_len) = self.encoder.lengths();
        let mut state = self.state.borrow_mut();

        if let Some(last) = state.as_mut().filter(|last| millis <= last.millis) {
            if !base32::increment(&mut last.random) {
                return Err(Error::RandomExhausted);
            }
            return Ok(compose(last.millis, time_len, &last.random));
        }

        let mut random = vec![0_u8; random_len];
        self.encoder.fill_random(&mut random)?;
        let id = compose(millis, time_len, &random);
        *state = Some(MonoState { millis, random });
        Ok(id)
    }
}
