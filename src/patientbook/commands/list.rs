use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "list";

pub const USAGE: &str = "list: Lists all persons in the address book.\nExample: list";

pub const MESSAGE_SUCCESS: &str = "Listed all persons";

pub fn run(book: &mut PatientBook) -> Result<CmdResult> {
    book.show_all();
    Ok(CmdResult::default().with_message(CmdMessage::success(MESSAGE_SUCCESS)))
}
