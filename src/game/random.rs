use rand::{
    rngs::StdRng,
    seq::{IndexedRandom, SliceRandom},
    Rng, RngCore, SeedableRng,
};

pub fn fresh_seed() -> u64 {
    rand::rng().next_u64()
}

/// Seeded generator; a fresh random seed is drawn when none is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(fresh_seed))
}

/// Index of an item drawn with probability proportional to `weight`.
/// Items with zero weight are never drawn; `None` when all weights are zero.
pub fn choose_weighted_index<T, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
    weight: impl Fn(&T) -> usize,
) -> Option<usize> {
    let indices: Vec<usize> = (0..items.len()).filter(|&i| weight(&items[i]) > 0).collect();
    indices
        .choose_weighted(rng, |&i| weight(&items[i]))
        .ok()
        .copied()
}

/// A uniformly random subset of `count` items, in random order.
pub fn random_subset<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], count: usize) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}
