use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::predicate::{HasTag, NameContainsKeywords};
use tracing::debug;

pub const COMMAND_WORD: &str = "find";
pub const TAG_COMMAND_WORD: &str = "tag";

pub const USAGE: &str = "find: Finds all persons whose names contain any of the specified \
keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

pub const TAG_USAGE: &str = "tag: Finds all persons carrying the given tag \
(case-insensitive) and displays them as a list with index numbers.\n\
Parameters: TAG\n\
Example: tag diabetic";

fn listed_message(book: &PatientBook) -> CmdMessage {
    CmdMessage::success(format!("{} persons listed!", book.filtered_len()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: NameContainsKeywords,
}

impl FindCommand {
    pub fn new(predicate: NameContainsKeywords) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, book: &mut PatientBook) -> Result<CmdResult> {
        debug!(keywords = ?self.predicate.keywords(), "finding by name");
        let predicate = self.predicate.clone();
        book.update_filter(move |p| predicate.matches(p));
        Ok(CmdResult::default().with_message(listed_message(book)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindTagCommand {
    predicate: HasTag,
}

impl FindTagCommand {
    pub fn new(predicate: HasTag) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, book: &mut PatientBook) -> Result<CmdResult> {
        let predicate = self.predicate.clone();
        book.update_filter(move |p| predicate.matches(p));
        Ok(CmdResult::default().with_message(listed_message(book)))
    }
}
