//! Hash table with open addressing.
//!
//! Every slot holds at most one key; collisions are resolved by walking the probe sequence of
//! the key. The table doubles before its load reaches one half and is quartered once the load
//! drops to an eighth.
mod core;
pub use self::core::*;
mod ctors;
mod hash_table;
