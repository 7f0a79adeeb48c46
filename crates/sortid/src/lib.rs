//! Lexicographically sortable identifiers.
//!
//! An identifier is a fixed-width time segment (milliseconds since the Unix
//! epoch, base 32, most significant digit first) followed by a fixed-width
//! random segment drawn from the same 32-symbol alphabet:
//!
//! ```text
//!  01ARZ3NDEK   TSV4RRFFQ69G5FAV
//! |----------| |----------------|
//!   time (10)     random (16)
//! ```
//!
//! Sources of time and randomness are injected through the [`TimeSource`]
//! and [`RandSource`] traits and held by an [`Encoder`].
//!
//! ```
//! use sortid::{Encoder, FnRandom, FnTime};
//!
//! let encoder = Encoder::new(FnTime(|| 1.0), FnRandom(|| 0.0));
//! let id = encoder.new_identifier(None).unwrap();
//! assert_eq!(id, "00000000Z80000000000000000");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod base32;
mod decode;
mod encoder;
mod error;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub mod global;
#[cfg(feature = "std")]
mod lock;
mod rand;
mod time;

pub use crate::base32::{ALPHABET, ENCODING_LEN, RANDOM_LEN, TIME_LEN};
pub use crate::decode::*;
pub use crate::encoder::*;
pub use crate::error::*;
pub use crate::rand::*;
pub use crate::time::*;

/// A source that can never produce a value.
///
/// Used as the time and random source when no platform default exists
/// (builds without the `std` feature). Every call fails with
/// [`Error::MissingCapability`].
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unavailable;
