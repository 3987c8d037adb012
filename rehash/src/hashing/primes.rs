//! Prime search used to pick the field of universal hashing.

/// Check if `n` is prime by trial division over the `6k ± 1` wheel.
pub const fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // Every prime above 3 has the form 6k ± 1, so only 5, 7, 11, 13, ... are tried.
    let n = n as u64;
    let mut i: u64 = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Find the least prime strictly greater than `n`.
///
/// Returns `None` if no such prime fits in `u32`.
pub fn least_prime_above(n: u32) -> Option<u32> {
    let start = n.checked_add(1)?;
    (start..=u32::MAX).find(|&candidate| is_prime(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_values() {
        let primes: Vec<u32> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn test_is_prime_large_values() {
        assert!(is_prime(2_147_483_647));
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(4_294_967_295));
        assert!(!is_prime(65_537 * 65_521));
    }

    #[test]
    fn test_least_prime_above() {
        assert_eq!(least_prime_above(0), Some(2));
        assert_eq!(least_prime_above(1), Some(2));
        assert_eq!(least_prime_above(2), Some(3));
        assert_eq!(least_prime_above(8), Some(11));
        assert_eq!(least_prime_above(16), Some(17));
        assert_eq!(least_prime_above(1 << 31), Some(2_147_483_659));
        assert_eq!(least_prime_above(4_294_967_291), None);
        assert_eq!(least_prime_above(u32::MAX), None);
    }
}
