//! Division hashing: `h(k) = k mod M`.
//!
//! The cheapest strategy and the weakest one - keys that share a residue modulo `M` always
//! collide, so adversarial (or merely regular) key sets can degrade it to a single chain.
use rehash_core::{FromSeed, HashStrategy, Key, RehashError};
use std::marker::PhantomData;

#[derive(Debug, Clone)]
pub struct Division<K: Key> {
    modulus: u32,
    key_type: PhantomData<K>,
}

impl<K: Key> Division<K> {
    /// Create a new division hash function for `modulus` slots.
    pub fn new(modulus: u32) -> Result<Self, RehashError> {
        if modulus == 0 {
            return Err(RehashError::ZeroModulus);
        }
        Ok(Self {
            modulus,
            key_type: PhantomData,
        })
    }
}

impl<K: Key> FromSeed for Division<K> {
    fn from_seed(_seed: u64, modulus: u32) -> Result<Self, RehashError> {
        Self::new(modulus)
    }
}

impl<K: Key> HashStrategy<K> for Division<K> {
    fn modulus(&self) -> u32 {
        self.modulus
    }

    #[inline]
    fn hash(&self, key: K) -> u32 {
        (key.to_u64() % self.modulus as u64) as u32
    }

    fn on_resize(&mut self, modulus: u32) {
        assert!(modulus > 0, r#""modulus" must be > 0"#);

        self.modulus = modulus;
    }
}
