#[cfg(feature = "parking-lot")]
pub use parking_lot::RwLock;
#[cfg(not(feature = "parking-lot"))]
pub use std::sync::RwLock;
