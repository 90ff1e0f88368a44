//! Patients a fresh book starts with, so a new user has something to try
//! commands on.

use crate::error::Result;
use crate::model::{Address, Email, LastVisit, Name, Patient, Phone, Remark, Tag};
use std::collections::BTreeSet;

struct Row {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    last_visit: &'static str,
    tags: &'static [&'static str],
}

const ROWS: &[Row] = &[
    Row {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        last_visit: "",
        tags: &["friends"],
    },
    Row {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        last_visit: "2024-03-02",
        tags: &["colleagues", "friends"],
    },
    Row {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        last_visit: "",
        tags: &["neighbours"],
    },
    Row {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        last_visit: "2023-12-18",
        tags: &["family"],
    },
    Row {
        name: "Irfan Ibrahim",
        phone: "92492021",
        email: "irfan@example.com",
        address: "Blk 47 Tampines Street 20, #17-35",
        last_visit: "",
        tags: &["classmates"],
    },
    Row {
        name: "Roy Balakrishnan",
        phone: "92624417",
        email: "royb@example.com",
        address: "Blk 45 Aljunied Street 85, #11-31",
        last_visit: "",
        tags: &["colleagues"],
    },
];

pub fn sample_patients() -> Result<Vec<Patient>> {
    ROWS.iter().map(build).collect()
}

fn build(row: &Row) -> Result<Patient> {
    let tags = row
        .tags
        .iter()
        .map(|t| Tag::new(*t))
        .collect::<Result<BTreeSet<_>>>()?;
    Ok(Patient::new(
        Name::new(row.name)?,
        Phone::new(row.phone)?,
        Email::new(row.email)?,
        Address::new(row.address)?,
        LastVisit::new(row.last_visit),
        Remark::default(),
        tags,
    ))
}
