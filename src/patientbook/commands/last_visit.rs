use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Index;
use crate::model::LastVisit;

use super::helpers::patient_at;

pub const COMMAND_WORD: &str = "lastvisit";

pub const USAGE: &str = "lastvisit: Edits the last visit of the person identified by the index \
number used in the last person listing. Existing last visit will be overwritten by the input.\n\
Parameters: INDEX (must be a positive integer) lv/[LAST_VISIT]\n\
Example: lastvisit 1 lv/2024-03-15";

pub const MESSAGE_ADD_SUCCESS: &str = "Added last visit to Person: ";
pub const MESSAGE_DELETE_SUCCESS: &str = "Removed last visit from Person: ";

/// Sets, or with an empty value clears, a patient's last-visit marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastVisitCommand {
    index: Index,
    last_visit: LastVisit,
}

impl LastVisitCommand {
    pub fn new(index: Index, last_visit: LastVisit) -> Self {
        Self { index, last_visit }
    }

    pub fn execute(&self, book: &mut PatientBook) -> Result<CmdResult> {
        let target = patient_at(book, self.index)?;
        let edited = target.with_last_visit(self.last_visit.clone());
        book.set_patient(&target, edited.clone())?;

        let prefix = if self.last_visit.is_empty() {
            MESSAGE_DELETE_SUCCESS
        } else {
            MESSAGE_ADD_SUCCESS
        };
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("{}{}", prefix, edited)))
            .with_affected_patients(vec![edited]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use crate::error::BookError;
    use crate::testing::{benson, show_patient_at, typical_book, PatientBuilder};
    use std::cell::Cell;
    use std::rc::Rc;

    const VISIT_STUB: &str = "Checked up";

    fn first() -> Index {
        Index::from_one_based(1)
    }

    fn second() -> Index {
        Index::from_one_based(2)
    }

    #[test]
    fn adds_last_visit_unfiltered() {
        let mut book = typical_book();
        let target = book.filtered_get(0).unwrap().clone();
        let edited = PatientBuilder::from_patient(&target)
            .with_last_visit(VISIT_STUB)
            .build();

        let cmd = LastVisitCommand::new(first(), LastVisit::new(VISIT_STUB));
        let result = cmd.execute(&mut book).unwrap();

        assert_eq!(
            result.feedback(),
            format!("Added last visit to Person: {}", edited)
        );
        assert_eq!(book.patients()[0], edited);
        assert_eq!(book.patients()[0].last_visit().as_str(), VISIT_STUB);
    }

    #[test]
    fn empty_value_removes_last_visit() {
        let mut book = typical_book();
        // Benson has a recorded visit
        assert!(!book.patients()[1].last_visit().is_empty());
        let edited = PatientBuilder::from_patient(&benson())
            .with_last_visit("")
            .build();

        let cmd = LastVisitCommand::new(second(), LastVisit::new(""));
        let result = cmd.execute(&mut book).unwrap();

        assert_eq!(
            result.feedback(),
            format!("Removed last visit from Person: {}", edited)
        );
        assert!(book.patients()[1].last_visit().is_empty());
    }

    #[test]
    fn works_on_filtered_list() {
        let mut book = typical_book();
        show_patient_at(&mut book, 2);

        let cmd = LastVisitCommand::new(first(), LastVisit::new(VISIT_STUB));
        cmd.execute(&mut book).unwrap();

        // The second backing record, the only visible one, was annotated
        assert_eq!(book.patients()[1].last_visit().as_str(), VISIT_STUB);
        assert_eq!(book.patients()[0].last_visit().as_str(), "");
    }

    #[test]
    fn every_valid_index_round_trips() {
        for value in ["2024-01-05", "", "follow up in 2 weeks"] {
            let size = typical_book().filtered_len();
            for i in 1..=size {
                let mut book = typical_book();
                let before: Vec<_> = book.patients().to_vec();
                LastVisitCommand::new(Index::from_one_based(i), LastVisit::new(value))
                    .execute(&mut book)
                    .unwrap();

                assert_eq!(book.patients()[i - 1].last_visit().as_str(), value);
                for (j, p) in book.patients().iter().enumerate() {
                    if j != i - 1 {
                        assert_eq!(*p, before[j]);
                    }
                }
            }
        }
    }

    #[test]
    fn invalid_index_unfiltered_fails_without_change() {
        let mut book = typical_book();
        let before = book.patients().to_vec();
        let notified = Rc::new(Cell::new(false));
        let flag = Rc::clone(&notified);
        book.subscribe(move |_| flag.set(true));

        let out_of_bounds = Index::from_one_based(book.filtered_len() + 1);
        let cmd = LastVisitCommand::new(out_of_bounds, LastVisit::new("x"));

        match cmd.execute(&mut book) {
            Err(e @ BookError::InvalidIndex) => {
                assert_eq!(e.to_string(), "The person index provided is invalid")
            }
            other => panic!("Expected InvalidIndex, got {:?}", other),
        }
        assert_eq!(book.patients(), before.as_slice());
        assert!(!notified.get());
    }

    #[test]
    fn invalid_index_filtered_fails_even_within_backing_bounds() {
        let mut book = typical_book();
        show_patient_at(&mut book, 1);
        // Still inside the backing list
        assert!(second().zero_based() < book.patients().len());

        let cmd = LastVisitCommand::new(second(), LastVisit::new("x"));
        assert!(matches!(
            cmd.execute(&mut book),
            Err(BookError::InvalidIndex)
        ));
    }

    #[test]
    fn two_patient_scenario() {
        let mut book = PatientBook::from_patients(typical_book().patients()[..2].to_vec()).unwrap();
        let cmd = LastVisitCommand::new(first(), LastVisit::new(VISIT_STUB));
        let result = cmd.execute(&mut book).unwrap();

        let edited = &book.patients()[0];
        assert_eq!(edited.last_visit().as_str(), VISIT_STUB);
        assert_eq!(
            result.feedback(),
            format!("Added last visit to Person: {}", edited)
        );

        show_patient_at(&mut book, 1);
        assert!(matches!(
            LastVisitCommand::new(second(), LastVisit::new(VISIT_STUB)).execute(&mut book),
            Err(BookError::InvalidIndex)
        ));
    }

    #[test]
    fn running_twice_overwrites_unconditionally() {
        let mut book = typical_book();
        let cmd = LastVisitCommand::new(first(), LastVisit::new(VISIT_STUB));
        cmd.execute(&mut book).unwrap();
        let after_first = book.patients().to_vec();

        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        book.subscribe(move |_| c.set(c.get() + 1));
        cmd.execute(&mut book).unwrap();

        assert_eq!(book.patients(), after_first.as_slice());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn equality() {
        let standard = LastVisitCommand::new(first(), LastVisit::new("Amy visit"));

        // same values -> equal
        assert_eq!(
            standard,
            LastVisitCommand::new(first(), LastVisit::new("Amy visit"))
        );
        // same object -> equal
        assert_eq!(standard, standard);
        // different index -> not equal
        assert_ne!(
            standard,
            LastVisitCommand::new(second(), LastVisit::new("Amy visit"))
        );
        // different value -> not equal
        assert_ne!(
            standard,
            LastVisitCommand::new(first(), LastVisit::new("Bob visit"))
        );

        let wrapped = Command::LastVisit(standard.clone());
        // different types -> not equal
        assert_ne!(wrapped, Command::Clear);
        // nothing -> not equal
        assert_ne!(Some(wrapped.clone()), None);
        assert_eq!(wrapped, Command::LastVisit(standard));
    }
}
