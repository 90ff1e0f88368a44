//! Test fixtures: a patient builder and a small cast of typical patients.

use crate::book::PatientBook;
use crate::model::{Address, Email, LastVisit, Name, Patient, Phone, Remark, Tag};
use std::collections::BTreeSet;

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_ADDRESS: &str = "123, Jurong West Ave 6, #08-111";

/// Builds patients from plain strings; panics on invalid field values.
#[derive(Debug, Clone)]
pub struct PatientBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    last_visit: String,
    remark: String,
    tags: Vec<String>,
}

impl Default for PatientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientBuilder {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            last_visit: String::new(),
            remark: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            name: patient.name().to_string(),
            phone: patient.phone().to_string(),
            email: patient.email().to_string(),
            address: patient.address().to_string(),
            last_visit: patient.last_visit().to_string(),
            remark: patient.remark().to_string(),
            tags: patient.tags().iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn with_last_visit(mut self, last_visit: &str) -> Self {
        self.last_visit = last_visit.to_string();
        self
    }

    pub fn with_remark(mut self, remark: &str) -> Self {
        self.remark = remark.to_string();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Patient {
        let tags: BTreeSet<Tag> = self
            .tags
            .into_iter()
            .map(|t| Tag::new(t).unwrap())
            .collect();
        Patient::new(
            Name::new(self.name).unwrap(),
            Phone::new(self.phone).unwrap(),
            Email::new(self.email).unwrap(),
            Address::new(self.address).unwrap(),
            LastVisit::new(self.last_visit),
            Remark::new(self.remark),
            tags,
        )
    }
}

pub fn alice() -> Patient {
    PatientBuilder::new()
        .with_name("Alice Pauline")
        .with_address("123, Jurong West Ave 6, #08-111")
        .with_email("alice@example.com")
        .with_phone("94351253")
        .with_tags(&["friends"])
        .build()
}

pub fn benson() -> Patient {
    PatientBuilder::new()
        .with_name("Benson Meier")
        .with_address("311, Clementi Ave 2, #02-25")
        .with_email("johnd@example.com")
        .with_phone("98765432")
        .with_last_visit("2024-02-11")
        .with_tags(&["owesMoney", "friends"])
        .build()
}

pub fn carl() -> Patient {
    PatientBuilder::new()
        .with_name("Carl Kurz")
        .with_phone("95352563")
        .with_email("heinz@example.com")
        .with_address("wall street")
        .build()
}

pub fn daniel() -> Patient {
    PatientBuilder::new()
        .with_name("Daniel Meier")
        .with_phone("87652533")
        .with_email("cornelia@example.com")
        .with_address("10th street")
        .with_tags(&["friends"])
        .build()
}

pub fn elle() -> Patient {
    PatientBuilder::new()
        .with_name("Elle Meyer")
        .with_phone("9482224")
        .with_email("werner@example.com")
        .with_address("michegan ave")
        .with_last_visit("2023-11-30")
        .build()
}

pub fn typical_patients() -> Vec<Patient> {
    vec![alice(), benson(), carl(), daniel(), elle()]
}

pub fn typical_book() -> PatientBook {
    PatientBook::from_patients(typical_patients()).unwrap()
}

/// Narrows the book's visible list to the patient at `one_based`.
pub fn show_patient_at(book: &mut PatientBook, one_based: usize) {
    let target = book.filtered_get(one_based - 1).unwrap().clone();
    book.update_filter(move |p| *p == target);
    assert_eq!(book.filtered_len(), 1);
}
