use crate::{Error, Result, TimeSource};
use std::time::{SystemTime, UNIX_EPOCH};

/// A wall-clock time source backed by [`SystemTime`].
///
/// Unlike a monotonic timer this follows the system clock, so adjustments
/// (NTP steps, manual changes) show up in the returned value. Identifiers
/// produced across such a step can sort out of creation order; use a
/// [`MonoEncoder`] if strict ordering matters within one process.
///
/// [`MonoEncoder`]: crate::MonoEncoder
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    /// Returns the seconds elapsed since the Unix epoch.
    ///
    /// Fails with [`Error::MissingCapability`] if the system clock reads
    /// earlier than the epoch.
    fn current_secs(&self) -> Result<f64> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .map_err(|_| Error::missing("system clock is set before the Unix epoch"))
    }
}
