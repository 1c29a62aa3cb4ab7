use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Returns `1..=len` shuffled with the provided random source.
pub fn shuffled_permutation<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<u32> {
    let mut values: Vec<u32> = (1..=len as u32).collect();
    values.shuffle(rng);
    values
}

/// Returns a shuffled `1..=len`. A seed makes the permutation reproducible;
/// without one the generator is seeded from system entropy.
pub fn permutation(len: usize, seed: Option<u64>) -> Vec<u32> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    shuffled_permutation(len, &mut rng)
}
