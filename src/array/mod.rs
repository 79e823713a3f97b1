//! Array state shown by the visualizer
//!
//! This module provides:
//! - [`ArrayState`]: the sequence being sorted plus the indices highlighted in the
//!   current frame
//! - [`Highlight`]: the small ordered set of indices a step touched
//! - [`generate`]: bounded random sequence generation
//!
//! Sequences are replaced wholesale on reset or size change; nothing here is
//! persisted beyond the session.

use crate::constants::{SIZE_MAX, SIZE_MIN, VALUE_MAX, VALUE_MIN};
use rand::Rng;
use rustc_hash::FxHashMap;

/// Indices touched by a single step, in the order the algorithm reports them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight(Vec<usize>);

impl Highlight {
    pub fn none() -> Self {
        Highlight(Vec::new())
    }

    pub fn one(index: usize) -> Self {
        Highlight(vec![index])
    }

    pub fn pair(a: usize, b: usize) -> Self {
        Highlight(vec![a, b])
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check every index is valid for a sequence of `len` elements
    pub fn in_bounds(&self, len: usize) -> bool {
        self.0.iter().all(|&i| i < len)
    }
}

/// The sequence plus the highlight set for the frame being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayState {
    pub values: Vec<u32>,
    pub highlights: Highlight,
}

impl ArrayState {
    /// Create a fresh random state of `size` elements
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        ArrayState {
            values: generate(size, rng),
            highlights: Highlight::none(),
        }
    }

    /// Wrap an explicit sequence (used by tests and replay)
    pub fn from_values(values: Vec<u32>) -> Self {
        ArrayState {
            values,
            highlights: Highlight::none(),
        }
    }

    /// Discard the current sequence and draw a new one of `size` elements
    pub fn reset<R: Rng + ?Sized>(&mut self, size: usize, rng: &mut R) {
        self.values = generate(size, rng);
        self.highlights = Highlight::none();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rough memory footprint, used by the history budget
    pub fn estimated_size(&self) -> usize {
        self.values.len() * std::mem::size_of::<u32>()
            + self.highlights.indices().len() * std::mem::size_of::<usize>()
    }
}

/// Clamp a requested size into the accepted range
pub fn clamp_size(size: usize) -> usize {
    size.clamp(SIZE_MIN, SIZE_MAX)
}

/// Draw `size` independent values in `[VALUE_MIN, VALUE_MAX]`
///
/// `size` is clamped to `[SIZE_MIN, SIZE_MAX]` first, so the result is never empty.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<u32> {
    (0..clamp_size(size))
        .map(|_| rng.gen_range(VALUE_MIN..=VALUE_MAX))
        .collect()
}

/// Check the slice is in non-decreasing order
pub fn is_sorted(values: &[u32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Check `a` and `b` hold the same multiset of values
pub fn is_permutation_of(a: &[u32], b: &[u32]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut counts: FxHashMap<u32, isize> = FxHashMap::default();
    for &v in a {
        *counts.entry(v).or_insert(0) += 1;
    }
    for &v in b {
        *counts.entry(v).or_insert(0) -= 1;
    }
    counts.values().all(|&c| c == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = generate(50, &mut rng);

        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|&v| (VALUE_MIN..=VALUE_MAX).contains(&v)));
    }

    #[test]
    fn test_generate_clamps_size() {
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(generate(0, &mut rng).len(), SIZE_MIN);
        assert_eq!(generate(1_000, &mut rng).len(), SIZE_MAX);
    }

    #[test]
    fn test_reset_twice_draws_fresh_sequences() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = ArrayState::random(30, &mut rng);
        state.highlights = Highlight::pair(0, 1);

        state.reset(30, &mut rng);
        let first = state.values.clone();
        state.reset(30, &mut rng);
        let second = state.values.clone();

        assert_eq!(first.len(), 30);
        assert_eq!(second.len(), 30);
        assert_ne!(first, second);
        assert!(state.highlights.is_empty());
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2, 9]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_is_permutation_of() {
        assert!(is_permutation_of(&[3, 1, 2, 2], &[2, 1, 2, 3]));
        assert!(!is_permutation_of(&[3, 1, 2, 2], &[3, 1, 1, 2]));
        assert!(!is_permutation_of(&[1, 2], &[1, 2, 3]));
    }

    #[test]
    fn test_highlight_bounds() {
        assert!(Highlight::pair(0, 3).in_bounds(4));
        assert!(!Highlight::one(4).in_bounds(4));
        assert!(Highlight::none().in_bounds(0));
    }
}
