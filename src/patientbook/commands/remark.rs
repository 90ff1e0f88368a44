use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Index;
use crate::model::Remark;

use super::helpers::patient_at;

pub const COMMAND_WORD: &str = "remark";

pub const USAGE: &str = "remark: Edits the remark of the person identified by the index number \
used in the last person listing. Existing remark will be overwritten by the input.\n\
Parameters: INDEX (must be a positive integer) r/[REMARK]\n\
Example: remark 1 r/Likes to swim.";

pub const MESSAGE_ADD_SUCCESS: &str = "Added remark to Person: ";
pub const MESSAGE_DELETE_SUCCESS: &str = "Removed remark from Person: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCommand {
    index: Index,
    remark: Remark,
}

impl RemarkCommand {
    pub fn new(index: Index, remark: Remark) -> Self {
        Self { index, remark }
    }

    pub fn execute(&self, book: &mut PatientBook) -> Result<CmdResult> {
        let target = patient_at(book, self.index)?;
        let edited = target.with_remark(self.remark.clone());
        book.set_patient(&target, edited.clone())?;

        let prefix = if self.remark.is_empty() {
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
    use crate::error::BookError;
    use crate::testing::{show_patient_at, typical_book};

    #[test]
    fn adds_then_removes_remark() {
        let mut book = typical_book();
        let idx = Index::from_one_based(3);

        let added = RemarkCommand::new(idx, Remark::new("Allergic to latex"))
            .execute(&mut book)
            .unwrap();
        assert!(added.feedback().starts_with("Added remark to Person: Carl Kurz"));
        assert_eq!(book.patients()[2].remark().as_str(), "Allergic to latex");

        let removed = RemarkCommand::new(idx, Remark::new(""))
            .execute(&mut book)
            .unwrap();
        assert!(removed
            .feedback()
            .starts_with("Removed remark from Person: Carl Kurz"));
        assert!(book.patients()[2].remark().is_empty());
    }

    #[test]
    fn rejects_index_outside_filtered_list() {
        let mut book = typical_book();
        show_patient_at(&mut book, 1);
        let cmd = RemarkCommand::new(Index::from_one_based(2), Remark::new("x"));
        assert!(matches!(
            cmd.execute(&mut book),
            Err(BookError::InvalidIndex)
        ));
    }
}
