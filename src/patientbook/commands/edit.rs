use crate::book::PatientBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Index;
use crate::model::{Address, Email, Name, Patient, Phone, Tag};
use std::collections::BTreeSet;

use super::helpers::patient_at;

pub const COMMAND_WORD: &str = "edit";

pub const USAGE: &str = "edit: Edits the details of the person identified by the index number \
used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

pub const MESSAGE_SUCCESS: &str = "Edited Person: ";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// The fields an edit replaces. `None` keeps the current value; an empty tag
/// set removes every tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientChanges {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl PatientChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.tags.is_none()
    }

    pub fn apply(&self, patient: &Patient) -> Patient {
        let mut edited = patient.clone();
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(phone) = &self.phone {
            edited = edited.with_phone(phone.clone());
        }
        if let Some(email) = &self.email {
            edited = edited.with_email(email.clone());
        }
        if let Some(address) = &self.address {
            edited = edited.with_address(address.clone());
        }
        if let Some(tags) = &self.tags {
            edited = edited.with_tags(tags.clone());
        }
        edited
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    changes: PatientChanges,
}

impl EditCommand {
    pub fn new(index: Index, changes: PatientChanges) -> Self {
        Self { index, changes }
    }

    pub fn execute(&self, book: &mut PatientBook) -> Result<CmdResult> {
        let target = patient_at(book, self.index)?;
        let edited = self.changes.apply(&target);
        book.set_patient(&target, edited.clone())?;

        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("{}{}", MESSAGE_SUCCESS, edited)))
            .with_affected_patients(vec![edited]))
    }
}
