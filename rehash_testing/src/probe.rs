//! Checks of probe sequences.
use bitvec::prelude::*;
use rehash_core::{Key, ProbeStrategy};

/// Asserts that the first `M` trials of `key` visit every slot exactly once.
pub fn assert_probe_permutation<K: Key, P: ProbeStrategy<K>>(prober: &P, key: K) {
    let modulus = prober.modulus();
    let mut seen = bitvec![0; modulus as usize];

    for trial in 0..modulus {
        let idx = prober.probe(key, trial);
        assert!(
            idx < modulus,
            "Trial {} of key {:?} is out of range: {} >= {}",
            trial,
            key,
            idx,
            modulus
        );
        assert!(
            !seen[idx as usize],
            "Trial {} of key {:?} revisits slot {} ({:?})",
            trial,
            key,
            idx,
            prober
        );
        seen.set(idx as usize, true);
    }
    assert!(seen.all());
}
