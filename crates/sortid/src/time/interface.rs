use crate::{Error, Result, Unavailable};
use alloc::boxed::Box;

/// A trait for time sources that return the current wall-clock time.
///
/// This abstraction allows you to plug in a real system clock or a mocked
/// time source in tests.
///
/// The unit is **seconds** since the Unix epoch with a fractional part of at
/// least millisecond precision. Encoders floor `secs * 1000` to get the
/// millisecond timestamp.
///
/// # Example
///
/// ```
/// use sortid::{Result, TimeSource};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_secs(&self) -> Result<f64> {
///         Ok(1234.5)
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_secs().unwrap(), 1234.5);
/// ```
pub trait TimeSource {
    /// Returns the current time in seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCapability`] if no clock is available.
    fn current_secs(&self) -> Result<f64>;
}

/// Adapts a `Fn() -> f64` closure into a [`TimeSource`].
///
/// ```
/// use sortid::{FnTime, TimeSource};
///
/// let time = FnTime(|| 1.5);
/// assert_eq!(time.current_secs().unwrap(), 1.5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnTime<F>(pub F);

impl<F> TimeSource for FnTime<F>
where
    F: Fn() -> f64,
{
    fn current_secs(&self) -> Result<f64> {
        Ok((self.0)())
    }
}

impl TimeSource for Unavailable {
    fn current_secs(&self) -> Result<f64> {
        Err(Error::missing("no time source is configured"))
    }
}

impl<T> TimeSource for &T
where
    T: TimeSource + ?Sized,
{
    fn current_secs(&self) -> Result<f64> {
        (**self).current_secs()
    }
}

impl<T> TimeSource for Box<T>
where
    T: TimeSource + ?Sized,
{
    fn current_secs(&self) -> Result<f64> {
        (**self).current_secs()
    }
}

/// Converts a time in seconds to whole milliseconds, `floor(secs * 1000)`.
///
/// Millisecond values too large for a `u64` keep their low 64 bits, which is
/// the value a time segment of up to 12 characters would show after dropping
/// its high-order digits.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `secs` is NaN, infinite or negative.
pub fn secs_to_millis(secs: f64) -> Result<u64> {
    if !secs.is_finite() {
        return Err(Error::invalid("time must be a finite number of seconds"));
    }
    if secs < 0.0 {
        return Err(Error::invalid("time must not be before the Unix epoch"));
    }
    // Exact for floats; the cast then floors the non-negative remainder.
    let reduced = (secs * 1000.0) % U64_RANGE;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let millis = reduced as u64;
    Ok(millis)
}

/// `2^64` as a float.
const U64_RANGE: f64 = 18_446_744_073_709_551_616.0;
