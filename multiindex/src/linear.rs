//! Graded (total-degree) enumeration.
//!
//! Stratum `s` holds every multi-index whose components sum to `s`. Inside
//! a stratum the multi-indices follow descending lexicographic order, so in
//! dimension 2 the sequence starts
//!
//! ```text
//! rank   0      1      2      3      4      5      6
//!        (0,0)  (1,0)  (0,1)  (2,0)  (1,1)  (0,2)  (3,0) …
//! ```
//!
//! and in dimension 3 the degree-2 stratum reads
//! `(2,0,0) (1,1,0) (1,0,1) (0,2,0) (0,1,1) (0,0,2)`.

use crate::enumerate::EnumerationFunction;
use crate::error::EnumerationError;
use crate::model::MultiIndex;

/// Linear enumeration rule over `dimension` inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearEnumerateFunction {
    dimension: usize,
}

impl LinearEnumerateFunction {
    /// Creates a linear rule over `dimension` inputs.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::ZeroDimension`] if `dimension` is 0.
    pub fn new(dimension: usize) -> Result<Self, EnumerationError> {
        if dimension == 0 {
            return Err(EnumerationError::ZeroDimension);
        }
        Ok(Self { dimension })
    }

    /// Smallest stratum whose cumulated cardinal exceeds `rank`.
    fn stratum_of(&self, rank: usize) -> usize {
        if self.dimension == 1 {
            return rank;
        }
        let mut stratum = 0;
        loop {
            let cumulated = self.strata_cumulated_cardinal(stratum);
            if cumulated > rank || cumulated == usize::MAX {
                return stratum;
            }
            stratum += 1;
        }
    }
}

impl EnumerationFunction for LinearEnumerateFunction {
    fn call(&self, rank: usize) -> MultiIndex {
        let degree = self.stratum_of(rank);
        let first = self
            .strata_cumulated_cardinal(degree)
            .saturating_sub(self.strata_cardinal(degree));
        MultiIndex::new(unrank_composition(
            rank.saturating_sub(first),
            degree,
            self.dimension,
        ))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn strata_cardinal(&self, stratum: usize) -> usize {
        compositions(stratum, self.dimension)
    }

    fn strata_cumulated_cardinal(&self, stratum: usize) -> usize {
        // Hockey-stick identity: Σ_{k≤s} C(k+d-1, d-1) = C(s+d, d).
        binomial(stratum.saturating_add(self.dimension), self.dimension)
    }

    fn inverse(&self, multi_index: &MultiIndex) -> Option<usize> {
        if multi_index.dimension() != self.dimension {
            return None;
        }
        let degree = multi_index.checked_total_degree()?;
        let first = if degree == 0 {
            0
        } else {
            self.strata_cumulated_cardinal(degree - 1)
        };
        Some(first.saturating_add(rank_composition(multi_index.as_slice())))
    }
}

/// Number of ways to write `total` as an ordered sum of `parts` non-negative
/// integers: `C(total + parts - 1, parts - 1)`.
fn compositions(total: usize, parts: usize) -> usize {
    match parts {
        0 => usize::from(total == 0),
        _ => binomial(total.saturating_add(parts - 1), parts - 1),
    }
}

/// `C(n, k)`, saturating at `usize::MAX`.
fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) stays integral at every step.
        acc = match acc.checked_mul((n - i) as u128) {
            Some(v) => v / (i as u128 + 1),
            None => return usize::MAX,
        };
        if acc > usize::MAX as u128 {
            return usize::MAX;
        }
    }
    acc as usize
}

/// The `local`-th composition of `total` into `parts` parts, in descending
/// lexicographic order.
fn unrank_composition(mut local: usize, total: usize, parts: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(parts);
    let mut remaining = total;
    for slot in 0..parts {
        let slots_left = parts - slot;
        if slots_left == 1 {
            out.push(remaining);
            break;
        }
        let mut value = remaining;
        loop {
            let tail = compositions(remaining - value, slots_left - 1);
            if local < tail || value == 0 {
                break;
            }
            local -= tail;
            value -= 1;
        }
        out.push(value);
        remaining -= value;
    }
    out
}

/// Position of `components` among the compositions of its sum, in
/// descending lexicographic order.
///
/// Compositions with a larger value in the current slot come first; the
/// hockey-stick identity counts them as
/// `compositions(remaining - value - 1, slots_left)`.
fn rank_composition(components: &[usize]) -> usize {
    let mut remaining = components
        .iter()
        .fold(0usize, |acc, &c| acc.saturating_add(c));
    let mut local = 0usize;
    for (slot, &value) in components.iter().enumerate() {
        let slots_left = components.len() - slot;
        if slots_left == 1 {
            break;
        }
        if value < remaining {
            local = local.saturating_add(compositions(remaining - value - 1, slots_left));
        }
        remaining = remaining.saturating_sub(value);
    }
    local
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(d: usize) -> LinearEnumerateFunction {
        match LinearEnumerateFunction::new(d) {
            Ok(r) => r,
            Err(e) => unreachable!("dimension {d} rejected: {e}"),
        }
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            LinearEnumerateFunction::new(0),
            Err(EnumerationError::ZeroDimension)
        );
    }

    #[test]
    fn first_ranks_in_dimension_two() {
        let r = rule(2);
        let got: Vec<Vec<usize>> = (0..10).map(|i| r.call(i).as_slice().to_vec()).collect();
        assert_eq!(
            got,
            vec![
                vec![0, 0],
                vec![1, 0],
                vec![0, 1],
                vec![2, 0],
                vec![1, 1],
                vec![0, 2],
                vec![3, 0],
                vec![2, 1],
                vec![1, 2],
                vec![0, 3],
            ]
        );
    }

    #[test]
    fn degree_two_stratum_in_dimension_three() {
        let r = rule(3);
        let start = r.strata_cumulated_cardinal(1);
        let got: Vec<Vec<usize>> = (start..start + r.strata_cardinal(2))
            .map(|i| r.call(i).as_slice().to_vec())
            .collect();
        assert_eq!(
            got,
            vec![
                vec![2, 0, 0],
                vec![1, 1, 0],
                vec![1, 0, 1],
                vec![0, 2, 0],
                vec![0, 1, 1],
                vec![0, 0, 2],
            ]
        );
    }

    #[test]
    fn cardinals_match_binomials() {
        let r = rule(2);
        assert_eq!(r.strata_cardinal(0), 1);
        assert_eq!(r.strata_cardinal(1), 2);
        assert_eq!(r.strata_cardinal(4), 5);
        assert_eq!(r.strata_cumulated_cardinal(0), 1);
        assert_eq!(r.strata_cumulated_cardinal(1), 3);
        assert_eq!(r.strata_cumulated_cardinal(3), 10);

        let r = rule(4);
        assert_eq!(r.strata_cardinal(3), 20);
        assert_eq!(r.basis_size_from_total_degree(3), 35);
    }

    #[test]
    fn dimension_one_is_the_identity_axis() {
        let r = rule(1);
        assert_eq!(r.call(0).as_slice(), &[0]);
        assert_eq!(r.call(17).as_slice(), &[17]);
        assert_eq!(r.strata_cardinal(9), 1);
        assert_eq!(r.strata_cumulated_cardinal(9), 10);
    }

    #[test]
    fn inverse_recovers_rank() {
        let r = rule(3);
        for rank in 0..200 {
            assert_eq!(r.inverse(&r.call(rank)), Some(rank), "rank {rank}");
        }
    }

    #[test]
    fn inverse_rejects_wrong_dimension() {
        assert_eq!(rule(2).inverse(&MultiIndex::from([1, 0, 0])), None);
    }

    #[test]
    fn inverse_of_oversized_multi_index() {
        let r = rule(2);
        assert_eq!(r.inverse(&MultiIndex::from([usize::MAX, 1])), None);
        assert_eq!(r.inverse(&MultiIndex::from([usize::MAX, 0])), Some(usize::MAX));
        assert_eq!(r.inverse(&MultiIndex::from([0, usize::MAX])), Some(usize::MAX));
    }

    #[test]
    fn binomial_saturates() {
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(2, 5), 0);
        assert_eq!(binomial(10_000, 5_000), usize::MAX);
    }
}
