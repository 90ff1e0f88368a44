//! Filters and orderings for the visible patient list.
//!
//! The book accepts any `Fn(&Patient) -> bool` as its filter; the types here
//! are the named ones commands use, kept as plain data so that two commands
//! carrying the same filter compare equal.

use crate::model::Patient;
use std::cmp::Ordering;

/// Matches patients whose name contains any of the keywords as a whole word,
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, patient: &Patient) -> bool {
        let words: Vec<String> = patient
            .name()
            .as_str()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        self.keywords
            .iter()
            .any(|kw| words.iter().any(|w| *w == kw.to_lowercase()))
    }
}

/// Matches patients carrying a tag, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasTag {
    tag: String,
}

impl HasTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn matches(&self, patient: &Patient) -> bool {
        patient
            .tags()
            .iter()
            .any(|t| t.as_str().eq_ignore_ascii_case(&self.tag))
    }
}

/// Orderings the `sort` command understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Alphabetical by name, ignoring case.
    Name,
    /// Most recent dated visit first; undated and unset visits last.
    LastVisit,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::LastVisit => "last visit",
        }
    }

    pub fn compare(&self, a: &Patient, b: &Patient) -> Ordering {
        match self {
            SortKey::Name => a
                .name()
                .as_str()
                .to_lowercase()
                .cmp(&b.name().as_str().to_lowercase()),
            SortKey::LastVisit => {
                match (a.last_visit().as_date(), b.last_visit().as_date()) {
                    (Some(da), Some(db)) => db.cmp(&da),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "visit" | "lastvisit" => Ok(SortKey::LastVisit),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::PatientBuilder;

    #[test]
    fn keyword_matches_whole_words_ignoring_case() {
        let alice = PatientBuilder::new().with_name("Alice Bob").build();
        let pred = |kws: &[&str]| {
            NameContainsKeywords::new(kws.iter().map(|s| s.to_string()).collect())
        };

        assert!(pred(&["alice"]).matches(&alice));
        assert!(pred(&["Carol", "bOB"]).matches(&alice));
        assert!(!pred(&["Ali"]).matches(&alice));
        assert!(!pred(&[]).matches(&alice));
        // Only the name is searched
        assert!(!pred(&["12345"]).matches(&alice));
    }

    #[test]
    fn tag_matches_ignoring_case() {
        let p = PatientBuilder::new().with_tags(&["diabetic"]).build();
        assert!(HasTag::new("Diabetic").matches(&p));
        assert!(!HasTag::new("asthma").matches(&p));
    }

    #[test]
    fn last_visit_order_puts_recent_first_and_undated_last() {
        let old = PatientBuilder::new()
            .with_name("Old")
            .with_last_visit("2023-01-01")
            .build();
        let recent = PatientBuilder::new()
            .with_name("Recent")
            .with_last_visit("2024-06-01")
            .build();
        let undated = PatientBuilder::new()
            .with_name("Undated")
            .with_last_visit("sometime")
            .build();

        let mut list = vec![undated.clone(), old.clone(), recent.clone()];
        list.sort_by(|a, b| SortKey::LastVisit.compare(a, b));
        assert_eq!(list, vec![recent, old, undated]);
    }

    #[test]
    fn parses_sort_keys() {
        assert_eq!("name".parse::<SortKey>(), Ok(SortKey::Name));
        assert_eq!("Visit".parse::<SortKey>(), Ok(SortKey::LastVisit));
        assert!("age".parse::<SortKey>().is_err());
    }
}
