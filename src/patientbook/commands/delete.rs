use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{Index, IndexRange};

use super::helpers::patients_at;

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete: Deletes the person identified by the index number used in the \
displayed person list. A range deletes every person in it.\n\
Parameters: INDEX (must be a positive integer) or START-END\n\
Example: delete 1";

pub const MESSAGE_SUCCESS: &str = "Deleted Person: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    ranges: Vec<IndexRange>,
}

impl DeleteCommand {
    pub fn new(ranges: Vec<IndexRange>) -> Self {
        Self { ranges }
    }

    pub fn single(index: Index) -> Self {
        Self::new(vec![IndexRange::single(index)])
    }

    pub fn execute(&self, book: &mut PatientBook) -> Result<CmdResult> {
        let resolved = patients_at(book, &self.ranges)?;
        let mut result = CmdResult::default();

        for (_, patient) in resolved {
            book.remove(&patient)?;
            result.add_message(CmdMessage::success(format!(
                "{}{}",
                MESSAGE_SUCCESS, patient
            )));
            result.affected_patients.push(patient);
        }

        Ok(result)
    }
}
