//! Implementation of the multiply-mod-prime universal hashing scheme from
//! [Carter & Wegman, 1979].
//!
//! ```text
//! h(k) = ((A * k + B) mod P) mod M
//! ```
//!
//! `P` is the least prime greater than `M`, and `A`, `B` are drawn from a PRNG owned by the
//! hasher. Every resize picks a new prime and draws new coefficients, so for any fixed pair of
//! distinct keys the probability of a collision is about `1 / M` regardless of the key
//! distribution.
//!
//! [Carter & Wegman, 1979]: https://doi.org/10.1016/0022-0000(79)90044-8
use crate::hashing::primes::least_prime_above;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rehash_core::{FromSeed, HashStrategy, Key, RehashError};
use std::marker::PhantomData;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct Universal<K: Key> {
    modulus: u32,
    /// `P` - a prime greater than the modulus.
    prime: u32,
    /// `A` in `[1, P)`.
    multiplier: u32,
    /// `B` in `[0, P)`.
    increment: u32,
    rng: Xoshiro256PlusPlus,
    key_type: PhantomData<K>,
}

/// Draw the parameters of a hash function for `modulus` slots.
fn draw_parameters(
    rng: &mut Xoshiro256PlusPlus,
    modulus: u32,
) -> Result<(u32, u32, u32), RehashError> {
    if modulus == 0 {
        return Err(RehashError::ZeroModulus);
    }
    let prime = least_prime_above(modulus).ok_or(RehashError::PrimeNotFound(modulus))?;
    let multiplier = rng.random_range(1..prime);
    let increment = rng.random_range(0..prime);

    Ok((prime, multiplier, increment))
}

impl<K: Key> Universal<K> {
    /// Create a new universal hash function for `modulus` slots whose coefficients are drawn
    /// from a PRNG seeded with `seed`.
    pub fn new(seed: u64, modulus: u32) -> Result<Self, RehashError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let (prime, multiplier, increment) = draw_parameters(&mut rng, modulus)?;

        Ok(Self {
            modulus,
            prime,
            multiplier,
            increment,
            rng,
            key_type: PhantomData,
        })
    }

    /// Get the prime `P`.
    pub fn prime(&self) -> u32 {
        self.prime
    }

    /// Get the coefficients `(A, B)`.
    pub fn coefficients(&self) -> (u32, u32) {
        (self.multiplier, self.increment)
    }
}

impl<K: Key> FromSeed for Universal<K> {
    fn from_seed(seed: u64, modulus: u32) -> Result<Self, RehashError> {
        Self::new(seed, modulus)
    }
}

impl<K: Key> HashStrategy<K> for Universal<K> {
    fn modulus(&self) -> u32 {
        self.modulus
    }

    #[inline]
    fn hash(&self, key: K) -> u32 {
        let product = self.multiplier as u128 * key.to_u64() as u128 + self.increment as u128;
        (product % self.prime as u128 % self.modulus as u128) as u32
    }

    fn on_resize(&mut self, modulus: u32) {
        match draw_parameters(&mut self.rng, modulus) {
            Ok((prime, multiplier, increment)) => {
                trace!(modulus, prime, multiplier, increment, "redrew universal hash parameters");
                self.modulus = modulus;
                self.prime = prime;
                self.multiplier = multiplier;
                self.increment = increment;
            }
            Err(err) => panic!("unable to resize universal hash function: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_universal_parameters() {
        let hasher = Universal::<u32>::new(0, 8).unwrap();
        assert_eq!(hasher.prime(), 11);

        let (a, b) = hasher.coefficients();
        assert!((1..11).contains(&a));
        assert!(b < 11);
    }

    #[test]
    fn test_universal_is_reproducible_for_seed() {
        let h1 = Universal::<u64>::new(7, 1024).unwrap();
        let h2 = Universal::<u64>::new(7, 1024).unwrap();
        assert_eq!(h1.coefficients(), h2.coefficients());
        for key in [0_u64, 1, 99, 1 << 40, u64::MAX - 1] {
            assert_eq!(h1.hash(key), h2.hash(key));
        }
    }

    #[test]
    fn test_universal_resize_redraws_parameters() {
        let mut hasher = Universal::<u32>::new(3, 16).unwrap();
        assert_eq!(hasher.prime(), 17);

        hasher.on_resize(32);
        assert_eq!(hasher.prime(), 37);
        assert_eq!(HashStrategy::<u32>::modulus(&hasher), 32);
        for key in 0..1000 {
            assert!(hasher.hash(key) < 32);
        }
    }

    #[test]
    fn test_universal_rejects_zero_modulus() {
        assert_eq!(
            Universal::<u32>::new(0, 0).unwrap_err(),
            RehashError::ZeroModulus
        );
    }

    /// For two fixed distinct keys, the collision rate over random hash functions must stay
    /// close to `1 / M`.
    #[test]
    fn test_universal_pairwise_collision_rate() {
        const NUM_BUCKETS: u32 = 16;
        const NUM_TRIALS: u32 = 20_000;

        let mut rng = ChaCha20Rng::seed_from_u64(2_147_483_647);
        let (x, y) = (5_u32, 5 + NUM_BUCKETS);

        let collisions = (0..NUM_TRIALS)
            .filter(|_| {
                let hasher = Universal::<u32>::new(rng.next_u64(), NUM_BUCKETS).unwrap();
                hasher.hash(x) == hasher.hash(y)
            })
            .count();

        let bound = 1.5 * NUM_TRIALS as f64 / NUM_BUCKETS as f64;
        assert!(
            (collisions as f64) < bound,
            "{} collisions, expected below {}",
            collisions,
            bound
        );
    }

    /// Over many random key pairs, the collision rate stays within a small factor of `1 / M`.
    ///
    /// Keys congruent modulo `P` always collide, so such pairs are skipped.
    #[test]
    #[cfg_attr(not(feature = "_slow-tests"), ignore)]
    fn test_universal_collision_rate_over_random_pairs() {
        const NUM_BUCKETS: u32 = 64;
        const NUM_PAIRS: usize = 200;
        const NUM_TRIALS: u32 = 5_000;

        let prime = least_prime_above(NUM_BUCKETS).unwrap() as u64;
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for _ in 0..NUM_PAIRS {
            let x = rng.random_range(0..u64::MAX);
            let y = loop {
                let y = rng.random_range(0..u64::MAX);
                if y % prime != x % prime {
                    break y;
                }
            };
            let collisions = (0..NUM_TRIALS)
                .filter(|_| {
                    let hasher = Universal::<u64>::new(rng.next_u64(), NUM_BUCKETS).unwrap();
                    hasher.hash(x) == hasher.hash(y)
                })
                .count();

            let bound = 2.5 * NUM_TRIALS as f64 / NUM_BUCKETS as f64;
            assert!(
                (collisions as f64) < bound,
                "{} collisions of {} and {}, expected below {}",
                collisions,
                x,
                y,
                bound
            );
        }
    }
}
