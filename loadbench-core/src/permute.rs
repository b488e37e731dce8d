//! Permutation Generation
//!
//! Exhaustively permuting the operation order removes ordering bias from the
//! comparison: bulk-load timings can depend on which backend's load path ran
//! earlier in the same process (page-cache state, allocator pressure, warmed
//! code paths). [`Permutations`] lazily yields every distinct ordering of the
//! operation indices exactly once, in lexicographic order, so two runs over
//! the same operation set enumerate identically.

/// Lazy iterator over all orderings of the indices `0..n`.
///
/// Forward-only and non-restartable: once exhausted it keeps returning
/// `None`. The identity ordering `[0, 1, .., n-1]` is yielded first and
/// successors follow in lexicographic order.
#[derive(Debug)]
pub struct Permutations {
    /// Current ordering; `None` once the sequence is exhausted.
    state: Option<Vec<usize>>,
}

impl Permutations {
    /// Generator over all orderings of `n` operation indices.
    ///
    /// `n == 0` yields zero permutations (an empty run, not an error);
    /// `n == 1` yields exactly one.
    pub fn new(n: usize) -> Self {
        let state = if n == 0 {
            None
        } else {
            Some((0..n).collect())
        };
        Self { state }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.state.as_ref()?.clone();
        self.state = next_lexicographic(self.state.take()?);
        Some(current)
    }
}

/// Advance to the lexicographic successor, or `None` when `perm` is the
/// final (descending) ordering.
fn next_lexicographic(mut perm: Vec<usize>) -> Option<Vec<usize>> {
    // Longest non-increasing suffix; the element before it is the pivot.
    let pivot = perm.windows(2).rposition(|w| w[0] < w[1])?;
    // Rightmost element greater than the pivot.
    let successor = perm.iter().rposition(|&x| x > perm[pivot])?;
    perm.swap(pivot, successor);
    perm[pivot + 1..].reverse();
    Some(perm)
}

/// Number of scenarios a run over `n` operations produces.
///
/// Returns `None` when `n!` overflows `usize`, so callers can reject
/// oversized operation sets instead of allocating an undersized series.
/// `n == 0` is zero scenarios, matching [`Permutations::new`].
pub fn permutation_count(n: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    (2..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn zero_operations_yield_zero_permutations() {
        assert_eq!(Permutations::new(0).count(), 0);
        assert_eq!(permutation_count(0), Some(0));
    }

    #[test]
    fn single_operation_yields_identity() {
        let all: Vec<_> = Permutations::new(1).collect();
        assert_eq!(all, vec![vec![0]]);
        assert_eq!(permutation_count(1), Some(1));
    }

    #[test]
    fn two_operations_yield_both_orders() {
        let all: Vec<_> = Permutations::new(2).collect();
        assert_eq!(all, vec![vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn yields_n_factorial_distinct_bijections() {
        for (n, expected) in [(2usize, 2usize), (3, 6), (4, 24)] {
            let all: Vec<_> = Permutations::new(n).collect();
            assert_eq!(all.len(), expected);
            assert_eq!(permutation_count(n), Some(expected));

            // No duplicates.
            let distinct: HashSet<_> = all.iter().cloned().collect();
            assert_eq!(distinct.len(), expected);

            // Each ordering is a bijection over 0..n.
            for perm in &all {
                let mut sorted = perm.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, (0..n).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn enumeration_is_lexicographic_and_deterministic() {
        let first: Vec<_> = Permutations::new(3).collect();
        let second: Vec<_> = Permutations::new(3).collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn exhausted_generator_stays_exhausted() {
        let mut perms = Permutations::new(2);
        assert!(perms.next().is_some());
        assert!(perms.next().is_some());
        assert!(perms.next().is_none());
        assert!(perms.next().is_none());
    }

    #[test]
    fn oversized_sets_are_rejected() {
        // 21! overflows a 64-bit usize.
        assert_eq!(permutation_count(21), None);
        assert_eq!(permutation_count(4), Some(24));
    }
}
