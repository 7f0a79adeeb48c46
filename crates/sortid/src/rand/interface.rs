use crate::{ENCODING_LEN, Error, Result, Unavailable};
use alloc::boxed::Box;

/// A trait for random sources that return uniformly distributed floats.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Each call returns a value in `[0, 1)`.
///
/// The quality of the random segment is exactly the quality of this source.
/// Callers that rely on identifiers being hard to guess or collide must
/// supply a cryptographically strong source.
///
/// # Example
/// ```
/// use sortid::{RandSource, Result};
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn random(&self) -> Result<f64> {
///         Ok(0.25)
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.random().unwrap(), 0.25);
/// ```
pub trait RandSource {
    /// Returns a random value in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCapability`] if no randomness is available.
    fn random(&self) -> Result<f64>;
}

/// Adapts a `Fn() -> f64` closure into a [`RandSource`].
///
/// ```
/// use sortid::{FnRandom, RandSource};
///
/// let rng = FnRandom(|| 0.5);
/// assert_eq!(rng.random().unwrap(), 0.5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnRandom<F>(pub F);

impl<F> RandSource for FnRandom<F>
where
    F: Fn() -> f64,
{
    fn random(&self) -> Result<f64> {
        Ok((self.0)())
    }
}

impl RandSource for Unavailable {
    fn random(&self) -> Result<f64> {
        Err(Error::missing("no random source is configured"))
    }
}

impl<R> RandSource for &R
where
    R: RandSource + ?Sized,
{
    fn random(&self) -> Result<f64> {
        (**self).random()
    }
}

impl<R> RandSource for Box<R>
where
    R: RandSource + ?Sized,
{
    fn random(&self) -> Result<f64> {
        (**self).random()
    }
}

#[allow(clippy::cast_precision_loss)]
const SCALE: f64 = ENCODING_LEN as f64;

#[allow(clippy::cast_possible_truncation)]
const MAX_DIGIT: u8 = (ENCODING_LEN - 1) as u8;

/// Maps a draw in `[0, 1)` to a digit in `0..32`, `floor(r * 32)`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `r` is outside `[0, 1)`.
pub fn draw_to_digit(r: f64) -> Result<u8> {
    if !(0.0..1.0).contains(&r) {
        return Err(Error::invalid("random value must be in [0, 1)"));
    }
    // r < 1 keeps the product below 32; `min` guards the rounding edge.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let digit = ((r * SCALE) as u8).min(MAX_DIGIT);
    Ok(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_map_onto_all_digits() {
        assert_eq!(draw_to_digit(0.0).unwrap(), 0);
        assert_eq!(draw_to_digit(1.0 / 32.0).unwrap(), 1);
        assert_eq!(draw_to_digit(0.5).unwrap(), 16);
        assert_eq!(draw_to_digit(0.999_999_999).unwrap(), 31);
        assert_eq!(
            draw_to_digit(f64::from_bits(1.0_f64.to_bits() - 1)).unwrap(),
            31
        );
    }

    #[test]
    fn rejects_out_of_range_draws() {
        for bad in [1.0, -0.1, 32.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(draw_to_digit(bad), Err(Error::InvalidArgument { .. })),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn unavailable_reports_missing_randomness() {
        assert!(matches!(
            Unavailable.random(),
            Err(Error::MissingCapability { .. })
        ));
    }
}
