//! # Command Layer
//!
//! Each module here holds one command: its usage text, its success messages,
//! a struct carrying its validated arguments, and an `execute` method that
//! applies it to a [`PatientBook`].
//!
//! Commands never print. They return a [`CmdResult`] whose messages the
//! presentation layer decides how to show. Parsing user text into a
//! [`Command`] is the parser's job; by the time a command exists its
//! arguments are well-formed, and the only checks left are the ones that
//! depend on the book's current state (index bounds, duplicates).

use crate::book::PatientBook;
use crate::error::Result;
use crate::model::Patient;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod help;
pub mod helpers;
pub mod last_visit;
pub mod list;
pub mod remark;
pub mod sort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_patients: Vec<Patient>,
    pub messages: Vec<CmdMessage>,
    pub show_help: bool,
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_patients(mut self, patients: Vec<Patient>) -> Self {
        self.affected_patients = patients;
        self
    }

    pub fn with_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// All message contents joined by newlines.
    pub fn feedback(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One parsed, ready-to-run user instruction.
///
/// Two commands are equal when they are the same kind of command with the
/// same arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(add::AddCommand),
    Edit(edit::EditCommand),
    Delete(delete::DeleteCommand),
    Clear,
    Find(find::FindCommand),
    FindTag(find::FindTagCommand),
    List,
    LastVisit(last_visit::LastVisitCommand),
    Remark(remark::RemarkCommand),
    Sort(sort::SortCommand),
    Help,
    Exit,
}

impl Command {
    pub fn execute(&self, book: &mut PatientBook) -> Result<CmdResult> {
        match self {
            Command::Add(cmd) => cmd.execute(book),
            Command::Edit(cmd) => cmd.execute(book),
            Command::Delete(cmd) => cmd.execute(book),
            Command::Clear => clear::run(book),
            Command::Find(cmd) => cmd.execute(book),
            Command::FindTag(cmd) => cmd.execute(book),
            Command::List => list::run(book),
            Command::LastVisit(cmd) => cmd.execute(book),
            Command::Remark(cmd) => cmd.execute(book),
            Command::Sort(cmd) => cmd.execute(book),
            Command::Help => help::run(),
            Command::Exit => help::exit(),
        }
    }

    /// Whether a successful run changes the stored patients.
    ///
    /// Filtering only changes what is visible, so it does not count.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Edit(_)
                | Command::Delete(_)
                | Command::Clear
                | Command::LastVisit(_)
                | Command::Remark(_)
                | Command::Sort(_)
        )
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Edit(_) => edit::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::Clear => clear::COMMAND_WORD,
            Command::Find(_) => find::COMMAND_WORD,
            Command::FindTag(_) => find::TAG_COMMAND_WORD,
            Command::List => list::COMMAND_WORD,
            Command::LastVisit(_) => last_visit::COMMAND_WORD,
            Command::Remark(_) => remark::COMMAND_WORD,
            Command::Sort(_) => sort::COMMAND_WORD,
            Command::Help => help::COMMAND_WORD,
            Command::Exit => help::EXIT_COMMAND_WORD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use crate::model::LastVisit;

    #[test]
    fn feedback_joins_messages() {
        let result = CmdResult::default()
            .with_message(CmdMessage::success("one"))
            .with_message(CmdMessage::info("two"));
        assert_eq!(result.feedback(), "one\ntwo");
    }

    #[test]
    fn only_state_changing_commands_are_mutating() {
        let visit = Command::LastVisit(last_visit::LastVisitCommand::new(
            Index::from_one_based(1),
            LastVisit::new("x"),
        ));
        assert!(visit.is_mutating());
        assert!(Command::Clear.is_mutating());
        assert!(!Command::List.is_mutating());
        assert!(!Command::Help.is_mutating());
        assert_eq!(visit.keyword(), "lastvisit");
    }
}
