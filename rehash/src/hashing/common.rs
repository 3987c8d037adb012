use rehash_core::{RehashError, MAX_LENGTH};

/// Calculate the number of bits `R` such that `2 ** R == length`.
///
/// `length` must be a power of two.
#[inline]
pub const fn num_bits_for_length(length: u32) -> u32 {
    debug_assert!(length.is_power_of_two(), r#""length" must be a power of two"#);

    length.ilog2()
}

/// Check that `length` can be used as a table length.
pub fn validate_length(length: u64) -> Result<u32, RehashError> {
    if length > MAX_LENGTH as u64 {
        return Err(RehashError::CapacityOverflow {
            requested: length,
            max: MAX_LENGTH,
        });
    }
    let length = length as u32;
    if !length.is_power_of_two() {
        return Err(RehashError::NotPowerOfTwo(length));
    }
    Ok(length)
}

/// Calculate the smallest power-of-two length that is at least `min_length` and can hold
/// `num_keys` keys below `max_load`.
pub fn aligned_length(num_keys: usize, max_load: f64, min_length: u32) -> Result<u32, RehashError> {
    debug_assert!(max_load > 0.0, r#""max_load" must be > 0"#);

    let required = (num_keys as f64 / max_load).ceil() as u64;
    let length = required
        .max(min_length as u64)
        .checked_next_power_of_two()
        .unwrap_or(u64::MAX);
    validate_length(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_bits_for_length() {
        assert_eq!(num_bits_for_length(1), 0);
        assert_eq!(num_bits_for_length(8), 3);
        assert_eq!(num_bits_for_length(MAX_LENGTH), 31);
    }

    #[test]
    fn test_validate_length() {
        assert_eq!(validate_length(16), Ok(16));
        assert_eq!(validate_length(12), Err(RehashError::NotPowerOfTwo(12)));
        assert_eq!(validate_length(0), Err(RehashError::NotPowerOfTwo(0)));
        assert_eq!(
            validate_length(1 << 32),
            Err(RehashError::CapacityOverflow {
                requested: 1 << 32,
                max: MAX_LENGTH
            })
        );
    }

    #[test]
    fn test_aligned_length() {
        assert_eq!(aligned_length(0, 1.0, 8), Ok(8));
        assert_eq!(aligned_length(60, 1.0, 8), Ok(64));
        assert_eq!(aligned_length(64, 1.0, 8), Ok(64));
        assert_eq!(aligned_length(4, 0.5, 2), Ok(8));
        assert_eq!(aligned_length(5, 0.5, 2), Ok(16));
    }
}
