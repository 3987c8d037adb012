//! Core trait and type declarations for the whole project.
use crate::error::RehashError;
use crate::stats::TableStats;
use std::fmt::Debug;

/// Largest table length supported by the tables.
///
/// Lengths are powers of two stored in `u32`, so `2 ** 31` is the largest one that fits.
pub const MAX_LENGTH: u32 = 1 << 31;

/// Fixed-width unsigned integer that can be stored in a table.
///
/// The maximum value of the type is reserved as the "not found" marker and can never be
/// inserted.
pub trait Key: Copy + Eq + Debug + 'static {
    /// Width of the key in bits (`W`).
    const BITS: u32;

    /// The value that is never stored in a table.
    const RESERVED: Self;

    /// Fibonacci multiplier: `2 ** W / phi` rounded to an odd integer.
    const GOLDEN: Self;

    /// Widen the key into a 64-bit integer without losing information.
    fn to_u64(self) -> u64;

    /// Multiply the key by [`Key::GOLDEN`] modulo `2 ** W` and extract the top `num_bits` bits.
    ///
    /// `num_bits == 0` maps every key to `0`.
    fn fibonacci(self, num_bits: u32) -> u32;
}

macro_rules! impl_key {
    ($($type:ty => $golden:expr),*) => {
        $(
            impl Key for $type {
                const BITS: u32 = <$type>::BITS;
                const RESERVED: Self = <$type>::MAX;
                const GOLDEN: Self = $golden;

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn fibonacci(self, num_bits: u32) -> u32 {
                    debug_assert!(num_bits <= 32, r#""num_bits" must be <= 32"#);

                    if num_bits == 0 {
                        return 0;
                    }
                    (Self::GOLDEN.wrapping_mul(self) >> (Self::BITS - num_bits)) as u32
                }
            }
        )*
    };
}

impl_key!(u32 => 0x9E37_79B9, u64 => 0x9E37_79B9_7F4A_7C15);

/// Stateful function that maps keys into `[0, M)`.
///
/// The modulus `M` is owned by the strategy. A table notifies the strategy through
/// [`HashStrategy::on_resize`] before rehashing any key at a new length.
pub trait HashStrategy<K: Key>: Debug {
    /// Current modulus `M` (number of slots).
    fn modulus(&self) -> u32;

    /// Hash the given `key` into `[0, M)`.
    fn hash(&self, key: K) -> u32;

    /// Adopt a new modulus and regenerate all parameters that depend on it.
    ///
    /// # Panics
    ///
    /// - If the strategy cannot be configured for `modulus`. Tables validate lengths before
    ///   resizing, so this signals a broken invariant rather than a recoverable condition.
    fn on_resize(&mut self, modulus: u32);
}

/// Maps a `(key, trial)` pair into `[0, M)`.
///
/// For every key, the outputs for `trial` in `0..M` must be a permutation of `0..M`, otherwise
/// a probe sequence can't reach every slot.
pub trait ProbeStrategy<K: Key>: Debug {
    /// Current modulus `M` (number of slots).
    fn modulus(&self) -> u32;

    /// Slot index inspected by the `trial`-th probe for `key`.
    fn probe(&self, key: K, trial: u32) -> u32;

    /// Adopt a new modulus and propagate it to the underlying hash strategies.
    ///
    /// # Panics
    ///
    /// - Same conditions as [`HashStrategy::on_resize`].
    fn on_resize(&mut self, modulus: u32);
}

/// Strategies that can be built from a seed and a modulus.
///
/// Deterministic strategies ignore the seed.
pub trait FromSeed: Sized {
    /// Create a new strategy with the given `seed` for `modulus` slots.
    fn from_seed(seed: u64, modulus: u32) -> Result<Self, RehashError>;
}

impl<K: Key, H: HashStrategy<K> + ?Sized> HashStrategy<K> for Box<H> {
    #[inline]
    fn modulus(&self) -> u32 {
        (**self).modulus()
    }

    #[inline]
    fn hash(&self, key: K) -> u32 {
        (**self).hash(key)
    }

    fn on_resize(&mut self, modulus: u32) {
        (**self).on_resize(modulus)
    }
}

impl<K: Key, P: ProbeStrategy<K> + ?Sized> ProbeStrategy<K> for Box<P> {
    #[inline]
    fn modulus(&self) -> u32 {
        (**self).modulus()
    }

    #[inline]
    fn probe(&self, key: K, trial: u32) -> u32 {
        (**self).probe(key, trial)
    }

    fn on_resize(&mut self, modulus: u32) {
        (**self).on_resize(modulus)
    }
}

/// A dynamic hash table of integer keys.
pub trait HashTable<K: Key> {
    /// Insert the given `key`, growing the table first if it is too dense.
    fn insert(&mut self, key: K) -> Result<(), RehashError>;

    /// Find a stored key equal to `key`.
    fn find(&self, key: K) -> Option<K>;

    /// Remove one occurrence of `key`, shrinking the table afterwards if it is too sparse.
    ///
    /// Returns whether a matching key was present.
    fn remove(&mut self, key: K) -> bool;

    /// Check if the table holds `key`.
    fn contains(&self, key: K) -> bool {
        self.find(key).is_some()
    }

    /// Get the number of stored keys.
    fn len(&self) -> usize;

    /// Check if the table is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the current number of slots.
    fn capacity(&self) -> usize;

    /// Get the load factor of the table.
    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Get the operation counters of the table.
    fn stats(&self) -> &TableStats;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_multipliers_are_odd() {
        assert_eq!(<u32 as Key>::GOLDEN % 2, 1);
        assert_eq!(<u64 as Key>::GOLDEN % 2, 1);
    }

    #[test]
    fn test_fibonacci_stays_within_bits() {
        for num_bits in 0..=31 {
            for key in [0_u32, 1, 7, 12345, u32::MAX - 1] {
                assert!(key.fibonacci(num_bits) < (1 << num_bits).max(1));
            }
            for key in [0_u64, 1, 7, 1 << 40, u64::MAX - 1] {
                assert!(key.fibonacci(num_bits) < (1 << num_bits).max(1));
            }
        }
    }

    #[test]
    fn test_fibonacci_uses_high_bits() {
        // 0x9E3779B9 * 1 has its top 3 bits equal to 0b100.
        assert_eq!(1_u32.fibonacci(3), 0b100);
        assert_eq!(0_u32.fibonacci(3), 0);
    }
}
