use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Patient;

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds a person to the address book. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [lv/LAST_VISIT] [r/REMARK] [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
t/friends t/owesMoney";

pub const MESSAGE_SUCCESS: &str = "New person added: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    patient: Patient,
}

impl AddCommand {
    pub fn new(patient: Patient) -> Self {
        Self { patient }
    }

    pub fn execute(&self, book: &mut PatientBook) -> Result<CmdResult> {
        book.add(self.patient.clone())?;
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "{}{}",
                MESSAGE_SUCCESS, self.patient
            )))
            .with_affected_patients(vec![self.patient.clone()]))
    }
}
