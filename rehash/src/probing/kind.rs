//! Runtime selection of probe strategies.
use crate::hashing::HashKind;
use crate::probing::{DoubleHashing, LinearProbing};
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rehash_core::{Key, ProbeStrategy, RehashError};

/// A probe strategy selected at runtime.
pub type DynProbe<K> = Box<dyn ProbeStrategy<K>>;

/// Available probe strategy families together with the hash strategies backing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    /// Linear probing on top of a single hash strategy.
    Linear(HashKind),
    /// Double hashing: the first strategy picks the slot, the second one picks the step.
    Double(HashKind, HashKind),
}

impl Default for ProbeKind {
    fn default() -> Self {
        ProbeKind::Linear(HashKind::default())
    }
}

impl ProbeKind {
    /// Build a probe strategy of this kind for `modulus` slots.
    ///
    /// Every hash strategy gets its own seed derived from `seed`.
    pub fn build<K: Key>(self, seed: u64, modulus: u32) -> Result<DynProbe<K>, RehashError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

        let prober: DynProbe<K> = match self {
            ProbeKind::Linear(kind) => Box::new(LinearProbing::new(
                kind.build::<K>(rng.next_u64(), modulus)?,
            )),
            ProbeKind::Double(primary, secondary) => Box::new(DoubleHashing::new(
                primary.build::<K>(rng.next_u64(), modulus)?,
                secondary.build::<K>(rng.next_u64(), modulus)?,
            )?),
        };
        Ok(prober)
    }
}
