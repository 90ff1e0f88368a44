use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::predicate::SortKey;

pub const COMMAND_WORD: &str = "sort";

pub const USAGE: &str = "sort: Reorders the address book.\n\
Parameters: name | visit\n\
Example: sort visit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCommand {
    key: SortKey,
}

impl SortCommand {
    pub fn new(key: SortKey) -> Self {
        Self { key }
    }

    pub fn execute(&self, book: &mut PatientBook) -> Result<CmdResult> {
        let key = self.key;
        book.sort_by(|a, b| key.compare(a, b));
        Ok(CmdResult::default().with_message(CmdMessage::success(format!(
            "Sorted persons by {}",
            key.label()
        ))))
    }
}
