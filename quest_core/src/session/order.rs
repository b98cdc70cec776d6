//! Challenge order shuffling.

use quest_rules::ORDER_SLOTS;
use rand::seq::SliceRandom;
use rand::Rng;

/// A uniform Fisher-Yates permutation of `1..=ORDER_SLOTS`.
pub fn shuffled_order<R: Rng + ?Sized>(rng: &mut R) -> [usize; ORDER_SLOTS] {
    let mut order = [0; ORDER_SLOTS];
    for (slot, value) in order.iter_mut().zip(1..) {
        *slot = value;
    }
    order.shuffle(rng);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_order_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut order = shuffled_order(&mut rng);
            order.sort_unstable();
            assert_eq!(order, [1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_order_is_seed_deterministic() {
        let a = shuffled_order(&mut StdRng::seed_from_u64(9));
        let b = shuffled_order(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_value_reaches_every_slot() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [[false; ORDER_SLOTS]; ORDER_SLOTS];
        for _ in 0..500 {
            for (slot, value) in shuffled_order(&mut rng).iter().enumerate() {
                seen[slot][value - 1] = true;
            }
        }
        assert!(seen.iter().all(|row| row.iter().all(|hit| *hit)));
    }
}
