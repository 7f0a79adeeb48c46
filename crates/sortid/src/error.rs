use alloc::borrow::Cow;

/// A result type defaulting to this crate's [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors `sortid` can produce.
///
/// None of these are transient: they signal a misconfigured source, an
/// out-of-range value or malformed input. Callers get them immediately and
/// no partial identifier is ever returned.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A source or value was rejected.
    ///
    /// Returned when a time is non-finite or negative, or when a random
    /// draw falls outside `[0, 1)`. Values read from a source are checked by
    /// the encoding that reads them.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of what was wrong.
        reason: Cow<'static, str>,
    },

    /// No usable time or random source is configured.
    #[error("missing capability: {capability}")]
    MissingCapability {
        /// Human-readable description of the missing source.
        capability: Cow<'static, str>,
    },

    /// The input is shorter than the segment being decoded.
    #[error("invalid length: {len} (expected at least {expected})")]
    DecodeInvalidLen {
        /// Length of the input.
        len: usize,
        /// Minimum length required.
        expected: usize,
    },

    /// The input contains a byte outside the alphabet.
    #[error("invalid ascii byte {byte:#04x} at index {index}")]
    DecodeInvalidAscii {
        /// The offending byte.
        byte: u8,
        /// Its position in the input.
        index: usize,
    },

    /// The decoded time segment does not fit in a `u64`.
    #[error("decoded time segment overflows u64")]
    DecodeOverflow,

    /// A monotonic random segment is already at its maximum value and
    /// cannot be incremented within the current millisecond.
    #[error("random segment exhausted for the current millisecond")]
    RandomExhausted,

    /// The process-wide encoder lock was poisoned.
    ///
    /// This can happen if another thread panicked while holding the lock.
    /// With the `parking-lot` feature locks do not poison and this variant is
    /// never produced.
    #[cfg_attr(docsrs, doc(cfg(all(feature = "std", not(feature = "parking-lot")))))]
    #[cfg(all(feature = "std", not(feature = "parking-lot")))]
    #[error("lock poisoned")]
    LockPoisoned,
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(capability: impl Into<Cow<'static, str>>) -> Self {
        Self::MissingCapability {
            capability: capability.into(),
        }
    }
}

#[cfg(all(feature = "std", not(feature = "parking-lot")))]
impl<G> From<std::sync::PoisonError<G>> for Error {
    fn from(_: std::sync::PoisonError<G>) -> Self {
        Self::LockPoisoned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            Error::missing("no time source").to_string(),
            "missing capability: no time source"
        );
        assert_eq!(
            Error::invalid("time is NaN").to_string(),
            "invalid argument: time is NaN"
        );
        assert_eq!(
            Error::DecodeInvalidAscii {
                byte: b'!',
                index: 3
            }
            .to_string(),
            "invalid ascii byte 0x21 at index 3"
        );
    }
}
