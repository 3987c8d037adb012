//! Construction-time configuration of the tables.
use crate::hashing::common::{aligned_length, validate_length};
use crate::hashing::HashKind;
use crate::probing::ProbeKind;
use rehash_core::{RehashError, MAX_LENGTH};

/// Default minimum table length.
pub const DEFAULT_MIN_LENGTH: u32 = 8;

/// Default seed for the randomized strategies.
pub const DEFAULT_SEED: u64 = 2_147_483_647;

/// Configuration of a [`crate::ChainTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainConfig {
    /// Hash strategy used when the table is built with [`crate::ChainTable::from_config`].
    pub hash: HashKind,
    /// The table never shrinks below this length. Must be a power of two.
    pub min_length: u32,
    /// Number of keys the table should hold without growing.
    pub initial_capacity: usize,
    /// The table doubles before an insert once `len / capacity >= grow_load`.
    pub grow_load: f64,
    /// The table halves after a remove once `len / capacity <= shrink_load`.
    pub shrink_load: f64,
    /// Seed of the randomized hash strategies.
    pub seed: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            hash: HashKind::default(),
            min_length: DEFAULT_MIN_LENGTH,
            initial_capacity: 0,
            grow_load: 1.0,
            shrink_load: 0.25,
            seed: DEFAULT_SEED,
        }
    }
}

impl ChainConfig {
    /// Chaining halves the table on shrink.
    pub const SHRINK_FACTOR: u32 = 2;

    pub fn with_hash(mut self, hash: HashKind) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_min_length(mut self, min_length: u32) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_thresholds(mut self, grow_load: f64, shrink_load: f64) -> Self {
        self.grow_load = grow_load;
        self.shrink_load = shrink_load;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the configuration and derive the resize policy from it.
    pub(crate) fn policy(&self) -> Result<ResizePolicy, RehashError> {
        ResizePolicy::new(
            self.min_length,
            self.grow_load,
            self.shrink_load,
            Self::SHRINK_FACTOR,
            false,
        )
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), RehashError> {
        let policy = self.policy()?;
        policy.initial_length(self.initial_capacity)?;
        Ok(())
    }
}

/// Configuration of a [`crate::OpenTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenConfig {
    /// Probe strategy used when the table is built with [`crate::OpenTable::from_config`].
    pub probe: ProbeKind,
    /// The table never shrinks below this length. Must be a power of two.
    pub min_length: u32,
    /// Number of keys the table should hold without growing.
    pub initial_capacity: usize,
    /// The table doubles before an insert once `len / capacity >= grow_load`. Must be below 1.
    pub grow_load: f64,
    /// The table is quartered after a remove once `len / capacity <= shrink_load`.
    pub shrink_load: f64,
    /// Seed of the randomized hash strategies.
    pub seed: u64,
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self {
            probe: ProbeKind::default(),
            min_length: DEFAULT_MIN_LENGTH,
            initial_capacity: 0,
            grow_load: 0.5,
            shrink_load: 0.125,
            seed: DEFAULT_SEED,
        }
    }
}

impl OpenConfig {
    /// Open addressing quarters the table on shrink.
    pub const SHRINK_FACTOR: u32 = 4;

    pub fn with_probe(mut self, probe: ProbeKind) -> Self {
        self.probe = probe;
        self
    }

    pub fn with_min_length(mut self, min_length: u32) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_thresholds(mut self, grow_load: f64, shrink_load: f64) -> Self {
        self.grow_load = grow_load;
        self.shrink_load = shrink_load;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the configuration and derive the resize policy from it.
    pub(crate) fn policy(&self) -> Result<ResizePolicy, RehashError> {
        ResizePolicy::new(
            self.min_length,
            self.grow_load,
            self.shrink_load,
            Self::SHRINK_FACTOR,
            true,
        )
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), RehashError> {
        let policy = self.policy()?;
        policy.initial_length(self.initial_capacity)?;
        Ok(())
    }
}

/// Validated grow/shrink rules shared by both table families.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResizePolicy {
    pub min_length: u32,
    pub grow_load: f64,
    pub shrink_load: f64,
    pub shrink_factor: u32,
}

impl ResizePolicy {
    /// Validate the thresholds.
    ///
    /// Right after growing, the load is `grow_load / 2` and must stay above `shrink_load`; right
    /// after shrinking, the load is at most `shrink_load * shrink_factor` and must not exceed
    /// `grow_load`. Open addressing additionally requires `grow_load < 1` so that a probe
    /// sequence always meets a free slot.
    fn new(
        min_length: u32,
        grow_load: f64,
        shrink_load: f64,
        shrink_factor: u32,
        bounded: bool,
    ) -> Result<Self, RehashError> {
        if !min_length.is_power_of_two() || min_length > MAX_LENGTH {
            return Err(RehashError::InvalidMinLength(min_length));
        }

        let invalid = RehashError::InvalidThresholds {
            grow: grow_load,
            shrink: shrink_load,
        };
        if !(grow_load > 0.0 && shrink_load >= 0.0) || (bounded && grow_load >= 1.0) {
            return Err(invalid);
        }
        if shrink_load >= grow_load / 2.0 || shrink_load * shrink_factor as f64 > grow_load {
            return Err(invalid);
        }

        Ok(Self {
            min_length,
            grow_load,
            shrink_load,
            shrink_factor,
        })
    }

    /// Length of a table that holds `initial_capacity` keys without growing.
    pub fn initial_length(&self, initial_capacity: usize) -> Result<u32, RehashError> {
        // The last insert sees `initial_capacity - 1` keys, which must stay below the threshold.
        aligned_length(initial_capacity, self.grow_load, self.min_length)
    }

    #[inline]
    pub fn should_grow(&self, num_entries: usize, length: usize) -> bool {
        num_entries as f64 >= self.grow_load * length as f64
    }

    /// Length after growing a table of `length` slots.
    pub fn grown_length(&self, length: usize) -> Result<u32, RehashError> {
        validate_length(length as u64 * 2)
    }

    /// Length after shrinking a table of `length` slots holding `num_entries` keys, if it is
    /// sparse enough and the shrunk table wouldn't drop below the minimum length.
    pub fn shrunk_length(&self, num_entries: usize, length: usize) -> Option<u32> {
        let new_length = length / self.shrink_factor as usize;
        if new_length < self.min_length as usize {
            return None;
        }
        if num_entries as f64 > self.shrink_load * length as f64 {
            return None;
        }
        Some(new_length as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs_are_valid() {
        assert!(ChainConfig::default().validate().is_ok());
        assert!(OpenConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_min_length() {
        let config = ChainConfig::default().with_min_length(12);
        assert_eq!(config.validate(), Err(RehashError::InvalidMinLength(12)));

        let config = OpenConfig::default().with_min_length(0);
        assert_eq!(config.validate(), Err(RehashError::InvalidMinLength(0)));
    }

    #[test]
    fn test_invalid_thresholds() {
        // Open addressing can never be allowed to fill up.
        let config = OpenConfig::default().with_thresholds(1.0, 0.1);
        assert!(matches!(
            config.validate(),
            Err(RehashError::InvalidThresholds { .. })
        ));
        // Shrinking would immediately follow growing.
        let config = ChainConfig::default().with_thresholds(1.0, 0.5);
        assert!(matches!(
            config.validate(),
            Err(RehashError::InvalidThresholds { .. })
        ));
        // Growing would immediately follow shrinking.
        let config = OpenConfig::default().with_thresholds(0.5, 0.2);
        assert!(matches!(
            config.validate(),
            Err(RehashError::InvalidThresholds { .. })
        ));
        // Chaining tolerates loads above 1.
        assert!(ChainConfig::default()
            .with_thresholds(2.0, 0.5)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_grown_length_overflow() {
        let policy = ChainConfig::default().policy().unwrap();
        assert_eq!(
            policy.grown_length(MAX_LENGTH as usize),
            Err(RehashError::CapacityOverflow {
                requested: 1 << 32,
                max: MAX_LENGTH
            })
        );
        assert_eq!(policy.grown_length((MAX_LENGTH / 2) as usize), Ok(MAX_LENGTH));
    }

    #[test]
    fn test_initial_capacity_overflow() {
        let config = ChainConfig::default().with_capacity(usize::MAX / 4);
        assert!(matches!(
            config.validate(),
            Err(RehashError::CapacityOverflow { .. })
        ));
    }

    #[test]
    fn test_shrunk_length() {
        let policy = OpenConfig::default().policy().unwrap();
        assert_eq!(policy.shrunk_length(4, 32), Some(8));
        assert_eq!(policy.shrunk_length(5, 32), None);
        // 8 / 4 would drop below the minimum length.
        assert_eq!(policy.shrunk_length(0, 8), None);

        let policy = ChainConfig::default().policy().unwrap();
        assert_eq!(policy.shrunk_length(4, 16), Some(8));
        assert_eq!(policy.shrunk_length(0, 8), None);
    }

    #[test]
    fn test_should_grow() {
        let policy = ChainConfig::default().policy().unwrap();
        assert!(!policy.should_grow(7, 8));
        assert!(policy.should_grow(8, 8));

        let policy = OpenConfig::default().policy().unwrap();
        assert!(!policy.should_grow(3, 8));
        assert!(policy.should_grow(4, 8));
    }
}
