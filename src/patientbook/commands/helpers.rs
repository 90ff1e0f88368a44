use crate::book::PatientBook;
use crate::error::{BookError, Result};
use crate::index::{Index, IndexRange};
use crate::model::Patient;
use std::collections::BTreeSet;

/// The patient shown at `index` in the visible list.
pub fn patient_at(book: &PatientBook, index: Index) -> Result<Patient> {
    book.filtered_get(index.zero_based())
        .cloned()
        .ok_or(BookError::InvalidIndex)
}

/// Resolves every range up front so that one bad index rejects the whole
/// batch. Each range's end is bounds-checked before it is expanded. Repeated
/// indexes resolve once.
pub fn patients_at(book: &PatientBook, ranges: &[IndexRange]) -> Result<Vec<(Index, Patient)>> {
    if ranges
        .iter()
        .any(|range| range.end().zero_based() >= book.filtered_len())
    {
        return Err(BookError::InvalidIndex);
    }

    let mut seen = BTreeSet::new();
    let mut resolved = Vec::new();
    for index in ranges.iter().flat_map(|range| range.indexes()) {
        if seen.insert(index) {
            resolved.push((index, patient_at(book, index)?));
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{alice, benson, typical_book, show_patient_at};

    #[test]
    fn resolves_against_visible_list() {
        let mut book = typical_book();
        assert_eq!(patient_at(&book, Index::from_one_based(2)).unwrap(), benson());

        show_patient_at(&mut book, 1);
        assert_eq!(patient_at(&book, Index::from_one_based(1)).unwrap(), alice());
        assert!(matches!(
            patient_at(&book, Index::from_one_based(2)),
            Err(BookError::InvalidIndex)
        ));
    }

    #[test]
    fn batch_fails_on_any_bad_index() {
        let book = typical_book();
        let ranges = [
            IndexRange::single(Index::from_one_based(1)),
            IndexRange::single(Index::from_one_based(99)),
        ];
        assert!(matches!(
            patients_at(&book, &ranges),
            Err(BookError::InvalidIndex)
        ));
    }

    #[test]
    fn batch_skips_repeats() {
        let book = typical_book();
        let ranges = [
            IndexRange::single(Index::from_one_based(1)),
            IndexRange::new(Index::from_one_based(1), Index::from_one_based(2)).unwrap(),
        ];
        let resolved = patients_at(&book, &ranges).unwrap();
        assert_eq!(
            resolved.into_iter().map(|(_, p)| p).collect::<Vec<_>>(),
            vec![alice(), benson()]
        );
    }

    #[test]
    fn range_past_visible_list_is_rejected_before_expanding() {
        let book = typical_book();
        let ranges =
            [IndexRange::new(Index::from_one_based(1), Index::from_one_based(usize::MAX)).unwrap()];
        assert!(matches!(
            patients_at(&book, &ranges),
            Err(BookError::InvalidIndex)
        ));
    }
}
