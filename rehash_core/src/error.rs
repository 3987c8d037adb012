//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RehashError {
    /// The key is the value reserved as the "not found" marker.
    #[error("Key {0} is reserved as the \"not found\" marker and cannot be stored.")]
    ReservedKey(u64),

    /// A hash strategy was asked to map keys into zero slots.
    #[error("Modulus must be greater than 0.")]
    ZeroModulus,

    /// The table length (or modulus of a strategy that relies on bit-extraction) is not a
    /// power of two.
    #[error("Length {0} is not a power of two.")]
    NotPowerOfTwo(u32),

    /// Universal hashing could not find a prime greater than the modulus.
    #[error("Unable to find a prime greater than {0} within the search window.")]
    PrimeNotFound(u32),

    /// Growing the table would exceed the maximum supported length.
    #[error("Table cannot grow to {requested} slots, the maximum is {max}.")]
    CapacityOverflow { requested: u64, max: u32 },

    /// Minimum table length must be a power of two within the supported range.
    #[error("Minimum length {0} must be a power of two in [1, {max}].", max = crate::MAX_LENGTH)]
    InvalidMinLength(u32),

    /// Grow and shrink thresholds that would make the table thrash or never terminate probing.
    #[error("Invalid load thresholds: grow at {grow}, shrink at {shrink}.")]
    InvalidThresholds { grow: f64, shrink: f64 },
}
