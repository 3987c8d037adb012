//! [`rehash_core::HashStrategy`] implementations.
pub mod common;
mod division;
pub use division::*;
mod kind;
pub use kind::*;
mod multiplicative;
pub use multiplicative::*;
pub mod primes;
mod universal;
pub use universal::*;
