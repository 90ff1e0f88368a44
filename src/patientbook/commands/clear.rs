use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "clear";

pub const USAGE: &str = "clear: Removes every person from the address book.\nExample: clear";

pub const MESSAGE_SUCCESS: &str = "Address book has been cleared!";

pub fn run(book: &mut PatientBook) -> Result<CmdResult> {
    let removed = book.patients().to_vec();
    book.clear();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(MESSAGE_SUCCESS))
        .with_affected_patients(removed))
}
