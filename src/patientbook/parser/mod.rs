//! # Command Parser
//!
//! Turns one line of user text into a [`Command`]. Parsing is stateless:
//! every call looks only at its input and always ends in either a command or
//! a typed error.
//!
//! ## Grammar
//!
//! ```text
//! line      := KEYWORD [ARGS]
//! ARGS      := [PREAMBLE] (PREFIX VALUE)*
//! PREFIX    := n/ | p/ | e/ | a/ | lv/ | r/ | t/
//! ```
//!
//! The keyword picks a per-command argument parser. Errors:
//!
//! - blank input: [`BookError::EmptyCommand`]
//! - unknown keyword: [`BookError::UnknownCommand`]
//! - arguments in the wrong shape: [`BookError::InvalidArgumentFormat`],
//!   carrying that command's usage text
//! - a well-shaped value that breaks a field rule: [`BookError::InvalidField`],
//!   carrying the rule

use crate::commands::add::{self, AddCommand};
use crate::commands::delete::{self, DeleteCommand};
use crate::commands::edit::{self, EditCommand, PatientChanges};
use crate::commands::find::{self, FindCommand, FindTagCommand};
use crate::commands::last_visit::{self, LastVisitCommand};
use crate::commands::remark::{self, RemarkCommand};
use crate::commands::sort::{self, SortCommand};
use crate::commands::{clear, help, list, Command};
use crate::error::{BookError, Result};
use crate::index::{parse_index_or_range, Index};
use crate::model::{Patient, Tag};
use crate::predicate::{HasTag, NameContainsKeywords, SortKey};
use std::collections::BTreeSet;
use tracing::debug;

pub mod fields;
pub mod tokenizer;

use tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_LAST_VISIT,
    PREFIX_NAME, PREFIX_PHONE, PREFIX_REMARK, PREFIX_TAG,
};

pub fn parse_command(input: &str) -> Result<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BookError::EmptyCommand);
    }

    let (keyword, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    debug!(keyword, "parsing command");

    match keyword {
        add::COMMAND_WORD => parse_add(args),
        edit::COMMAND_WORD => parse_edit(args),
        delete::COMMAND_WORD => parse_delete(args),
        clear::COMMAND_WORD => Ok(Command::Clear),
        find::COMMAND_WORD => parse_find(args),
        find::TAG_COMMAND_WORD => parse_find_tag(args),
        list::COMMAND_WORD => Ok(Command::List),
        last_visit::COMMAND_WORD => parse_last_visit(args),
        remark::COMMAND_WORD => parse_remark(args),
        sort::COMMAND_WORD => parse_sort(args),
        help::COMMAND_WORD => Ok(Command::Help),
        help::EXIT_COMMAND_WORD => Ok(Command::Exit),
        _ => Err(BookError::UnknownCommand),
    }
}

fn parse_add(args: &str) -> Result<Command> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_LAST_VISIT,
            PREFIX_REMARK,
            PREFIX_TAG,
        ],
    );

    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !required.iter().all(|&p| map.contains(p)) || !map.preamble().is_empty() {
        return Err(BookError::invalid_format(add::USAGE));
    }
    map.verify_no_duplicates(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_LAST_VISIT,
        PREFIX_REMARK,
    ])?;

    let patient = Patient::new(
        fields::parse_name(required_value(&map, PREFIX_NAME, add::USAGE)?)?,
        fields::parse_phone(required_value(&map, PREFIX_PHONE, add::USAGE)?)?,
        fields::parse_email(required_value(&map, PREFIX_EMAIL, add::USAGE)?)?,
        fields::parse_address(required_value(&map, PREFIX_ADDRESS, add::USAGE)?)?,
        fields::parse_last_visit(map.value(PREFIX_LAST_VISIT).unwrap_or_default()),
        fields::parse_remark(map.value(PREFIX_REMARK).unwrap_or_default()),
        fields::parse_tags(map.all_values(PREFIX_TAG))?,
    );
    Ok(Command::Add(AddCommand::new(patient)))
}

fn parse_edit(args: &str) -> Result<Command> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
        ],
    );
    let index = preamble_index(&map, edit::USAGE)?;
    map.verify_no_duplicates(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])?;

    let changes = PatientChanges {
        name: map.value(PREFIX_NAME).map(fields::parse_name).transpose()?,
        phone: map.value(PREFIX_PHONE).map(fields::parse_phone).transpose()?,
        email: map.value(PREFIX_EMAIL).map(fields::parse_email).transpose()?,
        address: map
            .value(PREFIX_ADDRESS)
            .map(fields::parse_address)
            .transpose()?,
        tags: parse_tags_for_edit(&map)?,
    };
    if changes.is_empty() {
        return Err(BookError::InvalidField(edit::MESSAGE_NOT_EDITED.to_string()));
    }
    Ok(Command::Edit(EditCommand::new(index, changes)))
}

/// No `t/` keeps tags; a lone empty `t/` clears them.
fn parse_tags_for_edit(map: &ArgumentMultimap) -> Result<Option<BTreeSet<Tag>>> {
    let values = map.all_values(PREFIX_TAG);
    match values.as_slice() {
        [] => Ok(None),
        [""] => Ok(Some(BTreeSet::new())),
        _ => fields::parse_tags(values.iter().copied()).map(Some),
    }
}

fn parse_delete(args: &str) -> Result<Command> {
    if args.trim().is_empty() {
        return Err(BookError::invalid_format(delete::USAGE));
    }

    let mut ranges = Vec::new();
    for token in args.split_whitespace() {
        match parse_index_or_range(token) {
            Ok(range) => ranges.push(range),
            Err(e @ BookError::InvalidIndexRange(_)) => return Err(e),
            Err(_) => return Err(BookError::invalid_format(delete::USAGE)),
        }
    }
    Ok(Command::Delete(DeleteCommand::new(ranges)))
}

fn parse_find(args: &str) -> Result<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(BookError::invalid_format(find::USAGE));
    }
    Ok(Command::Find(FindCommand::new(NameContainsKeywords::new(
        keywords,
    ))))
}

fn parse_find_tag(args: &str) -> Result<Command> {
    let tag = args.trim();
    if tag.is_empty() || tag.contains(char::is_whitespace) {
        return Err(BookError::invalid_format(find::TAG_USAGE));
    }
    let tag = fields::parse_tag(tag)?;
    Ok(Command::FindTag(FindTagCommand::new(HasTag::new(
        tag.as_str(),
    ))))
}

fn parse_last_visit(args: &str) -> Result<Command> {
    let map = tokenize(args, &[PREFIX_LAST_VISIT]);
    let index = preamble_index(&map, last_visit::USAGE)?;
    let value = required_value(&map, PREFIX_LAST_VISIT, last_visit::USAGE)?;
    map.verify_no_duplicates(&[PREFIX_LAST_VISIT])?;
    Ok(Command::LastVisit(LastVisitCommand::new(
        index,
        fields::parse_last_visit(value),
    )))
}

fn parse_remark(args: &str) -> Result<Command> {
    let map = tokenize(args, &[PREFIX_REMARK]);
    let index = preamble_index(&map, remark::USAGE)?;
    let value = required_value(&map, PREFIX_REMARK, remark::USAGE)?;
    map.verify_no_duplicates(&[PREFIX_REMARK])?;
    Ok(Command::Remark(RemarkCommand::new(
        index,
        fields::parse_remark(value),
    )))
}

fn parse_sort(args: &str) -> Result<Command> {
    let key: SortKey = args
        .trim()
        .parse()
        .map_err(|_| BookError::invalid_format(sort::USAGE))?;
    Ok(Command::Sort(SortCommand::new(key)))
}

fn preamble_index(map: &ArgumentMultimap, usage: &str) -> Result<Index> {
    fields::parse_index(map.preamble()).map_err(|_| BookError::invalid_format(usage))
}

fn required_value<'a>(map: &'a ArgumentMultimap, prefix: Prefix, usage: &str) -> Result<&'a str> {
    map.value(prefix)
        .ok_or_else(|| BookError::invalid_format(usage))
}
