//! A process-wide [`Encoder`] for callers that do not want to thread one
//! through their code.
//!
//! The shared encoder starts out with [`SystemClock`] and [`ThreadRandom`].
//! Either source can be replaced at any time; the replacement applies to
//! every later call from any thread. Setters take a write lock and encoding
//! takes a read lock, so a setter never races an encoding in progress.
//!
//! ```
//! use sortid::global;
//!
//! let id = global::new_identifier(None).unwrap();
//! assert_eq!(id.len(), 26);
//! ```

use crate::{
    Encoder, RandSource, Result, SystemClock, ThreadRandom, TimeSource, lock::RwLock,
};
use alloc::{boxed::Box, string::String};
use std::sync::LazyLock;

/// Time source type held by the process-wide encoder.
pub type SharedTimeSource = Box<dyn TimeSource + Send + Sync>;

/// Random source type held by the process-wide encoder.
pub type SharedRandSource = Box<dyn RandSource + Send + Sync>;

/// The process-wide encoder type.
pub type GlobalEncoder = Encoder<SharedTimeSource, SharedRandSource>;

static GLOBAL: LazyLock<RwLock<GlobalEncoder>> =
    LazyLock::new(|| RwLock::new(default_encoder()));

fn default_encoder() -> GlobalEncoder {
    Encoder::new(Box::new(SystemClock), Box::new(ThreadRandom))
}

#[cfg(not(feature = "parking-lot"))]
fn with_read<U>(f: impl FnOnce(&GlobalEncoder) -> Result<U>) -> Result<U> {
    let guard = GLOBAL.read()?;
    f(&guard)
}

#[cfg(feature = "parking-lot")]
fn with_read<U>(f: impl FnOnce(&GlobalEncoder) -> Result<U>) -> Result<U> {
    f(&GLOBAL.read())
}

#[cfg(not(feature = "parking-lot"))]
fn with_write<U>(f: impl FnOnce(&mut GlobalEncoder) -> Result<U>) -> Result<U> {
    let mut guard = GLOBAL.write()?;
    f(&mut guard)
}

#[cfg(feature = "parking-lot")]
fn with_write<U>(f: impl FnOnce(&mut GlobalEncoder) -> Result<U>) -> Result<U> {
    f(&mut GLOBAL.write())
}

/// Replaces the process-wide time source.
///
/// The source is first called by the next encoding.
///
/// # Errors
///
/// Returns [`Error::LockPoisoned`] if the lock is poisoned.
///
/// [`Error::LockPoisoned`]: crate::Error
pub fn set_time_source<T>(source: T) -> Result<()>
where
    T: TimeSource + Send + Sync + 'static,
{
    with_write(|encoder| {
        encoder.set_time_source(Box::new(source));
        Ok(())
    })
}

/// Replaces the process-wide random source.
///
/// The source is first drawn from by the next encoding.
///
/// # Errors
///
/// Returns [`Error::LockPoisoned`] if the lock is poisoned.
///
/// [`Error::LockPoisoned`]: crate::Error
pub fn set_rand_source<R>(source: R) -> Result<()>
where
    R: RandSource + Send + Sync + 'static,
{
    with_write(|encoder| {
        encoder.set_rand_source(Box::new(source));
        Ok(())
    })
}

/// Restores [`SystemClock`] and [`ThreadRandom`].
///
/// # Errors
///
/// Returns [`Error::LockPoisoned`] if the lock is poisoned.
///
/// [`Error::LockPoisoned`]: crate::Error
pub fn reset() -> Result<()> {
    with_write(|encoder| {
        *encoder = default_encoder();
        Ok(())
    })
}

/// See [`Encoder::encode_time`].
///
/// # Errors
///
/// See [`Encoder::encode_time`].
pub fn encode_time(time: Option<f64>, len: usize) -> Result<String> {
    with_read(|encoder| encoder.encode_time(time, len))
}

/// See [`Encoder::encode_random`].
///
/// # Errors
///
/// See [`Encoder::encode_random`].
pub fn encode_random(len: usize) -> Result<String> {
    with_read(|encoder| encoder.encode_random(len))
}

/// See [`Encoder::new_identifier`].
///
/// # Errors
///
/// See [`Encoder::new_identifier`].
pub fn new_identifier(time: Option<f64>) -> Result<String> {
    with_read(|encoder| encoder.new_identifier(time))
}
