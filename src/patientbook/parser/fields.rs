//! Field parsers: trim user text and turn it into validated model values.

use crate::error::Result;
use crate::index::Index;
use crate::model::{Address, Email, LastVisit, Name, Phone, Remark, Tag};
use std::collections::BTreeSet;

pub fn parse_index(s: &str) -> Result<Index> {
    s.trim().parse()
}

pub fn parse_name(s: &str) -> Result<Name> {
    Name::new(s.trim())
}

pub fn parse_phone(s: &str) -> Result<Phone> {
    Phone::new(s.trim())
}

pub fn parse_email(s: &str) -> Result<Email> {
    Email::new(s.trim())
}

pub fn parse_address(s: &str) -> Result<Address> {
    Address::new(s.trim())
}

pub fn parse_last_visit(s: &str) -> LastVisit {
    LastVisit::new(s.trim())
}

pub fn parse_remark(s: &str) -> Remark {
    Remark::new(s.trim())
}

pub fn parse_tag(s: &str) -> Result<Tag> {
    Tag::new(s.trim())
}

pub fn parse_tags<'a, I>(values: I) -> Result<BTreeSet<Tag>>
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().map(parse_tag).collect()
}
