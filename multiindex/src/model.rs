//! The multi-index value type.

use std::fmt;

/// An ordered tuple of non-negative integers, one per input dimension.
///
/// Produced by an [`EnumerationFunction`](crate::EnumerationFunction) and
/// immutable afterwards: the storage is private and only read accessors
/// are exposed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MultiIndex(Vec<usize>);

impl MultiIndex {
    /// Creates a multi-index from its components.
    #[must_use]
    pub fn new(components: Vec<usize>) -> Self {
        Self(components)
    }

    /// Number of components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Component at position `i`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<usize> {
        self.0.get(i).copied()
    }

    /// Sum of all components (the total polynomial degree), saturating at
    /// `usize::MAX`.
    #[must_use]
    pub fn total_degree(&self) -> usize {
        self.0.iter().fold(0usize, |acc, &c| acc.saturating_add(c))
    }

    /// Sum of all components, or `None` if it does not fit in a `usize`.
    #[must_use]
    pub fn checked_total_degree(&self) -> Option<usize> {
        self.0.iter().try_fold(0usize, |acc, &c| acc.checked_add(c))
    }
}

impl From<Vec<usize>> for MultiIndex {
    fn from(components: Vec<usize>) -> Self {
        Self(components)
    }
}

impl<const N: usize> From<[usize; N]> for MultiIndex {
    fn from(components: [usize; N]) -> Self {
        Self(components.to_vec())
    }
}

impl fmt::Display for MultiIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_degree_sums_components() {
        assert_eq!(MultiIndex::from([2, 0, 3]).total_degree(), 5);
        assert_eq!(MultiIndex::new(Vec::new()).total_degree(), 0);
    }

    #[test]
    fn total_degree_saturates() {
        let m = MultiIndex::from([usize::MAX, 1]);
        assert_eq!(m.total_degree(), usize::MAX);
        assert_eq!(m.checked_total_degree(), None);
        assert_eq!(MultiIndex::from([3, 4]).checked_total_degree(), Some(7));
    }

    #[test]
    fn display_matches_bracketed_list() {
        assert_eq!(MultiIndex::from([1, 0]).to_string(), "[1,0]");
        assert_eq!(MultiIndex::from([7]).to_string(), "[7]");
    }

    #[test]
    fn get_is_bounds_checked() {
        let m = MultiIndex::from([4, 5]);
        assert_eq!(m.get(1), Some(5));
        assert_eq!(m.get(2), None);
        assert_eq!(m.dimension(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_array() -> Result<(), serde_json::Error> {
        let m = MultiIndex::from([2, 0, 1]);
        let text = serde_json::to_string(&m)?;
        assert_eq!(text, "[2,0,1]");
        let back: MultiIndex = serde_json::from_str(&text)?;
        assert_eq!(back, m);
        Ok(())
    }
}
