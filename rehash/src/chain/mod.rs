//! Hash table with separate chaining.
//!
//! Every slot holds an unordered sequence of keys. The table doubles once it holds as many
//! keys as it has slots and halves once it drops to a quarter of that.
mod core;
pub use self::core::*;
mod ctors;
mod hash_table;
