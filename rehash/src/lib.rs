//! Dynamic hash tables of integer keys with pluggable hashing and collision-resolution
//! strategies.
//!
//! Two table families are provided:
//!
//! - [`ChainTable`] - separate chaining, every slot holds an unordered sequence of keys.
//! - [`OpenTable`] - open addressing, every slot holds at most one key and collisions are
//!   resolved by a [`ProbeStrategy`].
//!
//! Both grow and shrink by fully rebuilding their backing array, notifying the strategies of
//! the new length before any key is rehashed.
//!
//! # Examples
//!
//! ```rust
//! use rehash::{HashKind, HashTable, OpenConfig, OpenTable, ProbeKind};
//!
//! let config = OpenConfig::default()
//!     .with_probe(ProbeKind::Double(HashKind::Universal, HashKind::Multiplicative))
//!     .with_seed(42);
//! let mut table = OpenTable::<u32>::from_config(&config).unwrap();
//!
//! for key in 0..100 {
//!     table.insert(key).unwrap();
//! }
//! assert_eq!(table.find(42), Some(42));
//! assert!(table.remove(42));
//! assert_eq!(table.find(42), None);
//! ```
pub mod chain;
pub mod config;
pub mod hashing;
pub mod open;
pub mod probing;

pub use chain::ChainTable;
pub use config::{ChainConfig, OpenConfig, DEFAULT_MIN_LENGTH, DEFAULT_SEED};
pub use hashing::{Division, DynHash, HashKind, Multiplicative, Universal};
pub use open::{OpenTable, Slot};
pub use probing::{DoubleHashing, DynProbe, LinearProbing, ProbeKind};
pub use rehash_core::{
    FromSeed, HashStrategy, HashTable, Key, ProbeStrategy, RehashError, TableStats, MAX_LENGTH,
};
