//! [`rehash_core::ProbeStrategy`] implementations.
mod double;
pub use double::*;
mod kind;
pub use kind::*;
mod linear;
pub use linear::*;
