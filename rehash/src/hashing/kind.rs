//! Runtime selection of hash strategies.
use crate::hashing::{Division, Multiplicative, Universal};
use rehash_core::{HashStrategy, Key, RehashError};

/// A hash strategy selected at runtime.
pub type DynHash<K> = Box<dyn HashStrategy<K>>;

/// Available hash strategy families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashKind {
    /// `k mod M`.
    Division,
    /// Fibonacci hashing, `M` must be a power of two.
    Multiplicative,
    /// Multiply-mod-prime with random coefficients.
    #[default]
    Universal,
}

impl HashKind {
    /// Build a hash strategy of this kind for `modulus` slots.
    pub fn build<K: Key>(self, seed: u64, modulus: u32) -> Result<DynHash<K>, RehashError> {
        let hasher: DynHash<K> = match self {
            HashKind::Division => Box::new(Division::<K>::new(modulus)?),
            HashKind::Multiplicative => Box::new(Multiplicative::<K>::new(modulus)?),
            HashKind::Universal => Box::new(Universal::<K>::new(seed, modulus)?),
        };
        Ok(hasher)
    }
}
