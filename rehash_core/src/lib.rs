pub mod core;
pub use self::core::*;
pub mod error;
pub use error::*;
pub mod stats;
pub use stats::*;
