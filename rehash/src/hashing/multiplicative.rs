//! Implementation of the multiplicative (Fibonacci) hashing scheme from [Knuth (1973)].
//!
//! Multiplies the key by `2 ** W / phi` (forced odd) and keeps the top `R = log2(M)` bits of the
//! `W`-bit product, which avoids division entirely:
//!
//! ```text
//! h(k) = ((A * k) mod 2 ** W) >> (W - R)
//! ```
//!
//! The multiplier is fixed, so the scheme provides no guarantees against adversarial keys, but
//! it spreads arithmetic progressions of keys very evenly.
//!
//! [Knuth (1973)]: https://en.wikipedia.org/wiki/The_Art_of_Computer_Programming
use crate::hashing::common::num_bits_for_length;
use rehash_core::{FromSeed, HashStrategy, Key, RehashError};
use std::marker::PhantomData;

#[derive(Debug, Clone)]
pub struct Multiplicative<K: Key> {
    modulus: u32,
    /// `R` - bit width of the table length.
    num_bits: u32,
    key_type: PhantomData<K>,
}

impl<K: Key> Multiplicative<K> {
    /// Create a new multiplicative hash function for `modulus` slots.
    ///
    /// `modulus` must be a power of two.
    pub fn new(modulus: u32) -> Result<Self, RehashError> {
        if modulus == 0 {
            return Err(RehashError::ZeroModulus);
        }
        if !modulus.is_power_of_two() {
            return Err(RehashError::NotPowerOfTwo(modulus));
        }
        Ok(Self {
            modulus,
            num_bits: num_bits_for_length(modulus),
            key_type: PhantomData,
        })
    }

    /// Get the number of output bits `R`.
    pub fn num_bits(&self) -> u32 {
        self.num_bits
    }
}

impl<K: Key> FromSeed for Multiplicative<K> {
    fn from_seed(_seed: u64, modulus: u32) -> Result<Self, RehashError> {
        Self::new(modulus)
    }
}

impl<K: Key> HashStrategy<K> for Multiplicative<K> {
    fn modulus(&self) -> u32 {
        self.modulus
    }

    #[inline]
    fn hash(&self, key: K) -> u32 {
        key.fibonacci(self.num_bits)
    }

    fn on_resize(&mut self, modulus: u32) {
        assert!(
            modulus.is_power_of_two(),
            r#""modulus" must be a power of two, got {}"#,
            modulus
        );

        self.modulus = modulus;
        self.num_bits = num_bits_for_length(modulus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rehash_testing::{assert_uniform, generate_keys, seeded_rng};

    #[test]
    fn test_multiplicative_recomputes_num_bits() {
        let mut hasher = Multiplicative::<u32>::new(8).unwrap();
        assert_eq!(hasher.num_bits(), 3);

        hasher.on_resize(1024);
        assert_eq!(hasher.num_bits(), 10);
        assert_eq!(HashStrategy::<u32>::modulus(&hasher), 1024);

        hasher.on_resize(1);
        assert_eq!(hasher.num_bits(), 0);
        assert_eq!(hasher.hash(12345), 0);
    }

    #[test]
    fn test_multiplicative_in_range() {
        let hasher = Multiplicative::<u64>::new(64).unwrap();
        for key in (0..10_000_u64).map(|k| k.wrapping_mul(0x1234_5678_9ABC)) {
            assert!(hasher.hash(key) < 64);
        }
    }

    #[test]
    fn test_multiplicative_spreads_sequential_keys() {
        let hasher = Multiplicative::<u32>::new(16).unwrap();
        let mut counts = [0_u32; 16];
        for key in 0..16 * 64 {
            counts[hasher.hash(key) as usize] += 1;
        }
        assert!(counts.iter().all(|&c| (56..=72).contains(&c)), "{:?}", counts);
    }

    #[test]
    fn test_multiplicative_rejects_non_power_of_two() {
        assert_eq!(
            Multiplicative::<u32>::new(12).unwrap_err(),
            RehashError::NotPowerOfTwo(12)
        );
    }

    #[test]
    #[should_panic]
    fn test_multiplicative_resize_to_non_power_of_two_panics() {
        let mut hasher = Multiplicative::<u32>::new(8).unwrap();
        HashStrategy::<u32>::on_resize(&mut hasher, 24);
    }

    #[test]
    fn test_multiplicative_uniform_on_random_keys() {
        let mut rng = seeded_rng(42);
        let keys: Vec<u64> = generate_keys(&mut rng, 64 * 200);
        assert_uniform(&Multiplicative::<u64>::new(64).unwrap(), &keys, 1e-4);

        let keys: Vec<u32> = generate_keys(&mut rng, 256 * 50);
        assert_uniform(&Multiplicative::<u32>::new(256).unwrap(), &keys, 1e-4);
    }
}
