mod basic;
mod mono;

pub use basic::*;
pub use mono::*;
