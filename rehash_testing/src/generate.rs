//! Key generation utilities for tests.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Provides capabilities to generate random values of the implementer-type.
pub trait Generate<R: Rng>: Sized {
    /// Parameters for data-generation specific for the type.
    type GenerateParams: Default;

    /// Generates a single random value of the type.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self;

    /// Generates a vector of **unique** random values of the type.
    fn generate_many(rng: &mut R, params: &Self::GenerateParams, size: usize) -> Vec<Self>
    where
        Self: Hash + Eq + Copy,
    {
        let mut seen = HashSet::with_capacity(size);
        let mut values = Vec::with_capacity(size);
        while values.len() < size {
            let value = Self::generate(rng, params);
            if seen.insert(value) {
                values.push(value);
            }
        }
        values
    }
}

/// Inclusive range of generated numbers.
pub struct NumParams<T> {
    min: T,
    max: T,
}

impl<T> NumParams<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

macro_rules! impl_generate_num {
    ($($type:ty),*) => {
        $(
            /// The maximum value is the reserved key and is excluded by default.
            impl Default for NumParams<$type> {
                fn default() -> Self {
                    Self { min: <$type>::MIN, max: <$type>::MAX - 1 }
                }
            }

            impl<R: Rng> Generate<R> for $type {
                type GenerateParams = NumParams<$type>;

                fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
                    rng.random_range(params.min..=params.max)
                }
            }
        )*
    };
}

impl_generate_num!(u32, u64);

/// Creates a deterministic RNG so that failures can be reproduced.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Generates `size` unique storable keys.
pub fn generate_keys<K, R>(rng: &mut R, size: usize) -> Vec<K>
where
    R: Rng,
    K: Generate<R> + Hash + Eq + Copy,
{
    K::generate_many(rng, &K::GenerateParams::default(), size)
}
