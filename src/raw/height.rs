use rand_core::RngCore;

/// The number of levels spanned by the sentinels, and the tallest a node can be.
///
/// With promotion probability 1/2, a node reaches this height about once per 4 billion
/// insertions, so the cap bounds memory and search cost without flattening the list.
pub(crate) const MAX_HEIGHT: usize = 33;

/// Returns a random height in `1..=MAX_HEIGHT`.
///
/// Starts at 1 and promotes once per consecutive set low bit of a single `u64` draw,
/// which is a fair-coin geometric distribution truncated at `MAX_HEIGHT`.
pub(crate) fn random_height<R: RngCore + ?Sized>(rng: &mut R) -> usize {
    let promotions = rng.next_u64().trailing_ones() as usize;
    (1 + promotions).min(MAX_HEIGHT)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn zero_bits_never_promote() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(random_height(&mut rng), 1);
    }

    #[test]
    fn all_bits_cap_at_max_height() {
        let mut rng = StepRng::new(u64::MAX, 0);
        assert_eq!(random_height(&mut rng), MAX_HEIGHT);
    }

    #[test]
    fn low_run_of_ones_sets_height() {
        // 0b0111 promotes three times.
        let mut rng = StepRng::new(0b0111, 0);
        assert_eq!(random_height(&mut rng), 4);
    }

    #[test]
    fn heights_are_roughly_geometric() {
        const DRAWS: usize = 100_000;
        let mut rng = SmallRng::seed_from_u64(0x5EED);
        let mut counts = [0usize; MAX_HEIGHT + 1];
        for _ in 0..DRAWS {
            counts[random_height(&mut rng)] += 1;
        }

        assert_eq!(counts[0], 0);
        // Half of all nodes are height 1 and a quarter height 2.
        assert!((45_000..55_000).contains(&counts[1]), "height 1: {}", counts[1]);
        assert!((22_000..28_000).contains(&counts[2]), "height 2: {}", counts[2]);
        assert!(counts[1] > counts[2] && counts[2] > counts[3]);
    }
}
