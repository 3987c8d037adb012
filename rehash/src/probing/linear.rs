//! Linear probing: `probe(k, t) = (h(k) + t) mod M`.
use rehash_core::{FromSeed, HashStrategy, Key, ProbeStrategy, RehashError};
use std::marker::PhantomData;

#[derive(Debug, Clone)]
pub struct LinearProbing<K: Key, H: HashStrategy<K>> {
    hasher: H,
    key_type: PhantomData<K>,
}

impl<K: Key, H: HashStrategy<K>> LinearProbing<K, H> {
    /// Create a linear probe sequence on top of `hasher`, adopting its modulus.
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            key_type: PhantomData,
        }
    }

    /// Get the underlying hash strategy.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl<K: Key, H: HashStrategy<K> + FromSeed> FromSeed for LinearProbing<K, H> {
    fn from_seed(seed: u64, modulus: u32) -> Result<Self, RehashError> {
        Ok(Self::new(H::from_seed(seed, modulus)?))
    }
}

impl<K: Key, H: HashStrategy<K>> ProbeStrategy<K> for LinearProbing<K, H> {
    fn modulus(&self) -> u32 {
        self.hasher.modulus()
    }

    #[inline]
    fn probe(&self, key: K, trial: u32) -> u32 {
        ((self.hasher.hash(key) as u64 + trial as u64) % self.hasher.modulus() as u64) as u32
    }

    fn on_resize(&mut self, modulus: u32) {
        self.hasher.on_resize(modulus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::{Division, Multiplicative, Universal};
    use rehash_testing::assert_probe_permutation;

    #[test]
    fn test_linear_probing_wraps_around() {
        let prober = LinearProbing::new(Division::<u32>::new(8).unwrap());
        let sequence: Vec<u32> = (0..8).map(|t| prober.probe(29, t)).collect();
        assert_eq!(sequence, vec![5, 6, 7, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_linear_probing_permutation() {
        for num_bits in 0..=10 {
            let modulus = 1 << num_bits;
            let division = LinearProbing::new(Division::<u32>::new(modulus).unwrap());
            let fibonacci = LinearProbing::new(Multiplicative::<u32>::new(modulus).unwrap());
            let universal = LinearProbing::new(Universal::<u64>::new(9, modulus).unwrap());
            for key in [0, 1, 5, 13, 1 << 20, u32::MAX - 1] {
                assert_probe_permutation(&division, key);
                assert_probe_permutation(&fibonacci, key);
                assert_probe_permutation(&universal, key as u64);
            }
        }
    }

    #[test]
    fn test_linear_probing_resize_reaches_hasher() {
        let mut prober = LinearProbing::new(Multiplicative::<u32>::new(8).unwrap());
        prober.on_resize(256);
        assert_eq!(prober.modulus(), 256);
        assert_eq!(prober.hasher().num_bits(), 8);
    }
}
