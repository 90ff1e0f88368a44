//! # Storage Layer
//!
//! This module defines the persistence boundary for patientbook. The
//! [`DataStore`] trait is the only thing the rest of the crate knows about
//! where patients live between sessions.
//!
//! ## Contract
//!
//! - [`DataStore::load_patients`] is called once, at startup, to seed the
//!   [`PatientBook`](crate::book::PatientBook).
//! - [`DataStore::save_patients`] receives a **full snapshot** of the
//!   backing list after every successful mutating command, on the same
//!   thread, before the next command is accepted. There are no partial
//!   writes and no overlapping saves.
//!
//! How a store lays the snapshot out on disk (or anywhere else) is its own
//! business.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: keeps snapshots in memory. The terminal
//!   client uses it with sample data; tests use it to observe saves.

use crate::error::Result;
use crate::model::Patient;

pub mod memory;

/// Abstract interface for patient persistence.
pub trait DataStore {
    /// The patients to start the session with.
    fn load_patients(&self) -> Result<Vec<Patient>>;

    /// Replace whatever is stored with `patients`.
    fn save_patients(&mut self, patients: &[Patient]) -> Result<()>;
}
