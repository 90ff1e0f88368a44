use crate::commands::{
    add, clear, delete, edit, find, last_visit, list, remark, sort, CmdMessage, CmdResult,
};
use crate::error::Result;

pub const COMMAND_WORD: &str = "help";
pub const EXIT_COMMAND_WORD: &str = "exit";

pub const USAGE: &str = "help: Shows program usage instructions.\nExample: help";
pub const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";

pub const MESSAGE_SHOWING_HELP: &str = "Showing help.";
pub const MESSAGE_EXIT: &str = "Exiting Patient Book as requested ...";

/// Usage text of every command, in the order help lists them.
pub fn usages() -> [&'static str; 12] {
    [
        add::USAGE,
        edit::USAGE,
        delete::USAGE,
        last_visit::USAGE,
        remark::USAGE,
        find::USAGE,
        find::TAG_USAGE,
        list::USAGE,
        sort::USAGE,
        clear::USAGE,
        USAGE,
        EXIT_USAGE,
    ]
}

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(MESSAGE_SHOWING_HELP))
        .with_help())
}

pub fn exit() -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(MESSAGE_EXIT))
        .with_exit())
}
