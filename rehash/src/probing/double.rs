//! Double hashing: `probe(k, t) = (h1(k) + t * (h2(k) | 1)) mod M`.
//!
//! The step `h2(k) | 1` is odd and therefore coprime with the power-of-two modulus, which makes
//! `t * step mod M` a permutation of `[0, M)` for `t` in `[0, M)`.
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rehash_core::{FromSeed, HashStrategy, Key, ProbeStrategy, RehashError};
use std::marker::PhantomData;

#[derive(Debug, Clone)]
pub struct DoubleHashing<K: Key, H1: HashStrategy<K>, H2: HashStrategy<K>> {
    primary: H1,
    secondary: H2,
    key_type: PhantomData<K>,
}

impl<K: Key, H1: HashStrategy<K>, H2: HashStrategy<K>> DoubleHashing<K, H1, H2> {
    /// Create a double hashing probe sequence.
    ///
    /// The modulus of `primary` is adopted by `secondary` if they differ.
    ///
    /// # Errors
    ///
    /// - [`RehashError::NotPowerOfTwo`] if the modulus of `primary` is not a power of two, in
    ///   which case odd steps would not be guaranteed to visit every slot.
    pub fn new(primary: H1, mut secondary: H2) -> Result<Self, RehashError> {
        let modulus = primary.modulus();
        if !modulus.is_power_of_two() {
            return Err(RehashError::NotPowerOfTwo(modulus));
        }
        if secondary.modulus() != modulus {
            secondary.on_resize(modulus);
        }
        Ok(Self {
            primary,
            secondary,
            key_type: PhantomData,
        })
    }

    /// Get the hash strategy that picks the first slot.
    pub fn primary(&self) -> &H1 {
        &self.primary
    }

    /// Get the hash strategy that picks the step.
    pub fn secondary(&self) -> &H2 {
        &self.secondary
    }

    /// Step between two consecutive probes for `key`.
    #[inline]
    pub fn step(&self, key: K) -> u32 {
        self.secondary.hash(key) | 1
    }
}

impl<K, H1, H2> FromSeed for DoubleHashing<K, H1, H2>
where
    K: Key,
    H1: HashStrategy<K> + FromSeed,
    H2: HashStrategy<K> + FromSeed,
{
    fn from_seed(seed: u64, modulus: u32) -> Result<Self, RehashError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let primary = H1::from_seed(rng.next_u64(), modulus)?;
        let secondary = H2::from_seed(rng.next_u64(), modulus)?;
        Self::new(primary, secondary)
    }
}

impl<K: Key, H1: HashStrategy<K>, H2: HashStrategy<K>> ProbeStrategy<K>
    for DoubleHashing<K, H1, H2>
{
    fn modulus(&self) -> u32 {
        self.primary.modulus()
    }

    #[inline]
    fn probe(&self, key: K, trial: u32) -> u32 {
        let offset = trial as u64 * self.step(key) as u64;
        ((self.primary.hash(key) as u64 + offset) % self.primary.modulus() as u64) as u32
    }

    fn on_resize(&mut self, modulus: u32) {
        assert!(
            modulus.is_power_of_two(),
            r#""modulus" must be a power of two, got {}"#,
            modulus
        );

        self.primary.on_resize(modulus);
        self.secondary.on_resize(modulus);
    }
}
