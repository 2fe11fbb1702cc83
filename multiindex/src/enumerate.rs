//! The enumeration-function capability.
//!
//! Consumers (the explorer, the CLI) depend on this trait only, so any
//! enumeration rule can be plugged in without the consumer knowing about it.

use crate::model::MultiIndex;

/// A bijection from non-negative ranks to fixed-dimension multi-indices,
/// partitioned into consecutive strata.
///
/// Implementors must keep
/// `strata_cumulated_cardinal(s) == Σ_{k=0}^{s} strata_cardinal(k)`, and
/// the cumulated cardinal must be strictly increasing in `s`.
///
/// # Example
///
/// ```
/// use uqdemo_multiindex::{EnumerationFunction, MultiIndex};
///
/// /// Enumerates the single axis `(0), (1), (2), …`, one rank per stratum.
/// struct Axis;
///
/// impl EnumerationFunction for Axis {
///     fn call(&self, rank: usize) -> MultiIndex {
///         MultiIndex::from([rank])
///     }
///     fn dimension(&self) -> usize {
///         1
///     }
///     fn strata_cardinal(&self, _stratum: usize) -> usize {
///         1
///     }
/// }
///
/// assert_eq!(Axis.strata_cumulated_cardinal(4), 5);
/// ```
pub trait EnumerationFunction {
    /// Returns the multi-index at `rank`.
    fn call(&self, rank: usize) -> MultiIndex;

    /// Number of components of every multi-index produced by [`call`](Self::call).
    fn dimension(&self) -> usize;

    /// Number of ranks belonging to stratum `stratum`.
    fn strata_cardinal(&self, stratum: usize) -> usize;

    /// Number of ranks in strata `0..=stratum`.
    fn strata_cumulated_cardinal(&self, stratum: usize) -> usize {
        (0..=stratum).fold(0usize, |acc, s| acc.saturating_add(self.strata_cardinal(s)))
    }

    /// Rank of `multi_index`, or `None` if the rule cannot invert it.
    fn inverse(&self, _multi_index: &MultiIndex) -> Option<usize> {
        None
    }

    /// Number of basis terms up to and including total degree `degree`.
    fn basis_size_from_total_degree(&self, degree: usize) -> usize {
        self.strata_cumulated_cardinal(degree)
    }
}

impl<E: EnumerationFunction + ?Sized> EnumerationFunction for &E {
    fn call(&self, rank: usize) -> MultiIndex {
        (**self).call(rank)
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn strata_cardinal(&self, stratum: usize) -> usize {
        (**self).strata_cardinal(stratum)
    }

    fn strata_cumulated_cardinal(&self, stratum: usize) -> usize {
        (**self).strata_cumulated_cardinal(stratum)
    }

    fn inverse(&self, multi_index: &MultiIndex) -> Option<usize> {
        (**self).inverse(multi_index)
    }

    fn basis_size_from_total_degree(&self, degree: usize) -> usize {
        (**self).basis_size_from_total_degree(degree)
    }
}

impl<E: EnumerationFunction + ?Sized> EnumerationFunction for Box<E> {
    fn call(&self, rank: usize) -> MultiIndex {
        (**self).call(rank)
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn strata_cardinal(&self, stratum: usize) -> usize {
        (**self).strata_cardinal(stratum)
    }

    fn strata_cumulated_cardinal(&self, stratum: usize) -> usize {
        (**self).strata_cumulated_cardinal(stratum)
    }

    fn inverse(&self, multi_index: &MultiIndex) -> Option<usize> {
        (**self).inverse(multi_index)
    }

    fn basis_size_from_total_degree(&self, degree: usize) -> usize {
        (**self).basis_size_from_total_degree(degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl EnumerationFunction for Fixed {
        fn call(&self, rank: usize) -> MultiIndex {
            MultiIndex::from([rank, 0])
        }
        fn dimension(&self) -> usize {
            2
        }
        fn strata_cardinal(&self, stratum: usize) -> usize {
            stratum + 1
        }
    }

    #[test]
    fn default_cumulated_cardinal_sums_strata() {
        assert_eq!(Fixed.strata_cumulated_cardinal(0), 1);
        assert_eq!(Fixed.strata_cumulated_cardinal(1), 3);
        assert_eq!(Fixed.strata_cumulated_cardinal(3), 10);
    }

    #[test]
    fn default_inverse_is_unavailable() {
        assert_eq!(Fixed.inverse(&MultiIndex::from([0, 0])), None);
    }

    #[test]
    fn boxed_rule_forwards() {
        let boxed: Box<dyn EnumerationFunction> = Box::new(Fixed);
        assert_eq!(boxed.dimension(), 2);
        assert_eq!(boxed.call(3).as_slice(), &[3, 0]);
        assert_eq!(boxed.basis_size_from_total_degree(2), 6);
    }
}
