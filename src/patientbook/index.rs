//! User-facing positions into the visible patient list.
//!
//! Users always talk in 1-based numbers ("patient 1" is the first card on
//! screen); the book works 0-based. [`Index`] keeps both views of the same
//! position so callers never do the off-by-one arithmetic themselves.
//!
//! An index is only meaningful relative to the list the user is looking at,
//! which is the *filtered* view, not the full book. Bounds checks belong to
//! whoever resolves the index against that view.

use crate::error::{BookError, Result};
use std::str::FromStr;

pub const INDEX_CONSTRAINTS: &str = "Index is not a non-zero unsigned integer.";

/// A position in the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Panics on 0; parse user input with [`FromStr`] instead.
    pub fn from_one_based(one_based: usize) -> Self {
        assert!(one_based > 0, "one-based index must be positive");
        Self {
            zero_based: one_based - 1,
        }
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

impl FromStr for Index {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 && !s.trim().starts_with('+') => Ok(Index::from_one_based(n)),
            _ => Err(BookError::InvalidField(INDEX_CONSTRAINTS.to_string())),
        }
    }
}

/// An inclusive run of positions, `start..=end`. A single index is a range of
/// one.
///
/// Ranges stay as two endpoints until they are resolved against the visible
/// list, so a huge range from user input costs nothing until its end has been
/// bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    start: Index,
    end: Index,
}

impl IndexRange {
    pub fn new(start: Index, end: Index) -> Result<Self> {
        if start > end {
            return Err(BookError::InvalidIndexRange(format!(
                "start ({}) must be <= end ({})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn single(index: Index) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    pub fn start(&self) -> Index {
        self.start
    }

    pub fn end(&self) -> Index {
        self.end
    }

    pub fn indexes(&self) -> impl Iterator<Item = Index> {
        (self.start.zero_based()..=self.end.zero_based()).map(Index::from_zero_based)
    }
}

impl From<Index> for IndexRange {
    fn from(index: Index) -> Self {
        Self::single(index)
    }
}

impl std::fmt::Display for IndexRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Parses a single input string that may be either a single index or a range.
///
/// Supports formats:
/// - Single index: "3"
/// - Range: "3-5" (covers 3, 4, 5)
///
/// Start must be <= end. Whether the indexes exist is checked later, against
/// the visible list.
pub fn parse_index_or_range(s: &str) -> Result<IndexRange> {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = Index::from_str(&s[..dash_pos])?;
            let end = Index::from_str(&s[dash_pos + 1..])?;
            return IndexRange::new(start, end);
        }
    }

    Index::from_str(s).map(IndexRange::single)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_bases() {
        let idx = Index::from_one_based(3);
        assert_eq!(idx.zero_based(), 2);
        assert_eq!(idx.one_based(), 3);
        assert_eq!(Index::from_zero_based(2), idx);
        assert_eq!(idx.to_string(), "3");
    }

    #[test]
    fn test_parsing() {
        assert_eq!("1".parse::<Index>().unwrap(), Index::from_one_based(1));
        assert_eq!(" 42 ".parse::<Index>().unwrap(), Index::from_one_based(42));

        assert!("".parse::<Index>().is_err());
        assert!("0".parse::<Index>().is_err());
        assert!("-1".parse::<Index>().is_err());
        assert!("+1".parse::<Index>().is_err());
        assert!("abc".parse::<Index>().is_err());
        assert!("12a".parse::<Index>().is_err());
    }

    #[test]
    fn test_parse_single_index() {
        assert_eq!(
            parse_index_or_range("3").unwrap(),
            IndexRange::single(Index::from_one_based(3))
        );
    }

    #[test]
    fn test_parse_range() {
        let range = parse_index_or_range("3-5").unwrap();
        assert_eq!(range.start(), Index::from_one_based(3));
        assert_eq!(range.end(), Index::from_one_based(5));
        assert_eq!(
            range.indexes().collect::<Vec<_>>(),
            vec![
                Index::from_one_based(3),
                Index::from_one_based(4),
                Index::from_one_based(5)
            ]
        );
        assert_eq!(range.to_string(), "3-5");

        // Single element range (start == end)
        assert_eq!(
            parse_index_or_range("3-3").unwrap(),
            IndexRange::single(Index::from_one_based(3))
        );
    }

    #[test]
    fn test_parse_range_invalid_order() {
        match parse_index_or_range("5-3") {
            Err(BookError::InvalidIndexRange(msg)) => assert!(msg.contains("must be <= end")),
            other => panic!("Expected InvalidIndexRange, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_range_invalid_format() {
        assert!(parse_index_or_range("abc-5").is_err());
        assert!(parse_index_or_range("3-xyz").is_err());
        assert!(parse_index_or_range("-5").is_err());
        assert!(parse_index_or_range("3-").is_err());
        assert!(parse_index_or_range("0-2").is_err());
    }

    #[test]
    fn test_parse_range_up_to_usize_max_stays_lazy() {
        let range = parse_index_or_range(&format!("1-{}", usize::MAX)).unwrap();
        assert_eq!(range.end().one_based(), usize::MAX);
        assert_eq!(range.indexes().take(2).count(), 2);
    }
}
