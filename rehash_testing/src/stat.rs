//! Implements empirical uniformity tests for hash strategies.
use ndarray::prelude::*;
use ndarray::{ScalarOperand, Zip};
use num_traits::{Float, NumAssignOps};
use rehash_core::{HashStrategy, Key};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// A result of a Chi-square test.
#[derive(Debug)]
pub struct Chi2Statistic<V> {
    pub chi2: V,
    pub dof: usize,
    pub p_value: V,
}

/// Calculates the chi-square statistic.
pub fn chi2<V>(observed: &[V], expected: &[V], dof: Option<usize>) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64>,
{
    debug_assert_eq!(observed.len(), expected.len(), "Dimensions must match");
    let chi2: V = Zip::from(observed)
        .and(expected)
        .fold(0.0.into(), |acc, &obs, &exp| {
            let diff = obs - exp;
            acc + diff.powf(2.0.into()) / exp
        });

    let dof = dof.unwrap_or(observed.len() - 1);
    let dist = ChiSquared::new(dof as f64).unwrap();
    let p_value = (1.0 - dist.cdf(chi2.to_f64().unwrap())).into();

    Chi2Statistic { chi2, dof, p_value }
}

/// Performs a Chi-square uniformity test.
pub fn chi2_uniformity<'a, V, A>(observed: A) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64> + ScalarOperand,
    A: AsArray<'a, V>,
{
    let observed: ArrayView1<V> = observed.into();
    let total_sum = observed.sum();
    let num_cells = observed.len();
    let expected_value = total_sum / (num_cells as f64).into();

    let expected = Array1::<V>::from_elem(observed.dim(), expected_value);
    let observed = observed.to_owned();

    chi2(
        observed.as_slice().unwrap(),
        expected.as_slice().unwrap(),
        None,
    )
}

/// Counts how many of `keys` land in each slot of `hasher`.
pub fn slot_counts<K: Key, H: HashStrategy<K>>(hasher: &H, keys: &[K]) -> Array1<f64> {
    let mut counts = Array1::<f64>::zeros(hasher.modulus() as usize);
    for &key in keys {
        counts[hasher.hash(key) as usize] += 1.0;
    }
    counts
}

/// Asserts that `hasher` spreads `keys` over its slots uniformly at significance level `alpha`.
pub fn assert_uniform<K: Key, H: HashStrategy<K>>(hasher: &H, keys: &[K], alpha: f64) {
    let counts = slot_counts(hasher, keys);
    let statistic = chi2_uniformity(&counts);
    assert!(
        statistic.p_value > alpha,
        "Hash values of {:?} are not uniform: {:?}",
        hasher,
        statistic
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chi2_uniformity_of_flat_counts() {
        let counts = array![10.0, 10.0, 10.0, 10.0];
        let statistic = chi2_uniformity(&counts);
        assert_eq!(statistic.chi2, 0.0);
        assert_eq!(statistic.dof, 3);
        assert!((statistic.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_chi2_uniformity_of_skewed_counts() {
        let counts = array![100.0, 0.0, 0.0, 0.0];
        let statistic = chi2_uniformity(&counts);
        assert!(statistic.p_value < 1e-6);
    }
}
