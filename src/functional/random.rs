//! Random selection with a caller-supplied generator.
//!
//! There is no hidden global source: every function borrows an [`Rng`], so a
//! seeded generator gives reproducible results.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Returns the elements in a random order.
///
/// ```rust
/// use collecta::functional::shuffle;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let first = shuffle(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// let second = shuffle(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Returns a uniformly chosen element, or `None` for an empty slice.
#[must_use]
pub fn random<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}
