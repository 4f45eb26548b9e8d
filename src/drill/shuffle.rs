//! Random deck order

use rand::seq::SliceRandom;
use rand::Rng;

/// A fresh uniform random permutation of `0..len`
pub fn random_order<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    proptest! {
        #[test]
        fn random_order_is_permutation(len in 0usize..200, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut order = random_order(len, &mut rng);
            prop_assert_eq!(order.len(), len);
            order.sort_unstable();
            prop_assert_eq!(order, (0..len).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = random_order(30, &mut StdRng::seed_from_u64(42));
        let b = random_order(30, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_permutations_reachable() {
        // 3 items have 6 permutations; each should show up near 1/6 of the time
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
        let trials = 6000;
        for _ in 0..trials {
            *counts.entry(random_order(3, &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((800..1200).contains(count), "skewed count {}", count);
        }
    }
}
