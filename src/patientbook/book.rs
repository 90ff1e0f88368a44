//! # The Patient Book
//!
//! [`PatientBook`] is the in-memory record store every command works
//! against. It holds two things:
//!
//! - the **backing list**: every patient, in order, no two structurally equal
//! - the **visible list**: the patients matching the current filter, in
//!   backing order
//!
//! The visible list is recomputed eagerly, so it is never stale: after any
//! call returns, [`PatientBook::filtered`] already reflects it. It is always
//! a subsequence of the backing list; sorting reorders the backing list
//! itself so this keeps holding.
//!
//! ## Change Notification
//!
//! Presentation code does not poll. It registers a listener with
//! [`PatientBook::subscribe`] and gets called, synchronously and before the
//! mutating call returns, with the new visible list. Failed operations leave
//! the book untouched and notify nobody.

use crate::error::{BookError, Result};
use crate::model::Patient;
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, info};

type Filter = Box<dyn Fn(&Patient) -> bool>;
type Listener = Box<dyn FnMut(&[&Patient])>;

/// Handle returned by [`PatientBook::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

pub struct PatientBook {
    patients: Vec<Patient>,
    filter: Filter,
    // Positions into `patients`, ascending.
    visible: Vec<usize>,
    listeners: Vec<(Subscription, Listener)>,
    next_subscription: u64,
}

impl Default for PatientBook {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PatientBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatientBook")
            .field("patients", &self.patients)
            .field("visible", &self.visible)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl PatientBook {
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            filter: Box::new(|_| true),
            visible: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Builds a book from previously stored patients, rejecting duplicates.
    pub fn from_patients(patients: Vec<Patient>) -> Result<Self> {
        let mut book = Self::new();
        for patient in patients {
            if book.contains(&patient) {
                return Err(BookError::DuplicatePatient);
            }
            book.patients.push(patient);
        }
        book.refresh();
        Ok(book)
    }

    /// The full backing list, ignoring any filter.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn contains(&self, patient: &Patient) -> bool {
        self.patients.contains(patient)
    }

    pub fn filtered(&self) -> Vec<&Patient> {
        self.visible.iter().map(|&i| &self.patients[i]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    pub fn filtered_get(&self, zero_based: usize) -> Option<&Patient> {
        self.visible.get(zero_based).map(|&i| &self.patients[i])
    }

    pub fn add(&mut self, patient: Patient) -> Result<()> {
        if self.contains(&patient) {
            return Err(BookError::DuplicatePatient);
        }
        info!(name = %patient.name(), "adding patient");
        self.patients.push(patient);
        self.changed();
        Ok(())
    }

    pub fn remove(&mut self, target: &Patient) -> Result<()> {
        let pos = self.position_of(target)?;
        info!(name = %target.name(), "removing patient");
        self.patients.remove(pos);
        self.changed();
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// Writing a value equal to `target` is allowed and still counts as a
    /// change.
    pub fn set_patient(&mut self, target: &Patient, edited: Patient) -> Result<()> {
        let pos = self.position_of(target)?;
        if edited != *target && self.contains(&edited) {
            return Err(BookError::DuplicatePatient);
        }
        info!(name = %edited.name(), "replacing patient");
        self.patients[pos] = edited;
        self.changed();
        Ok(())
    }

    pub fn clear(&mut self) {
        info!(count = self.patients.len(), "clearing patient book");
        self.patients.clear();
        self.changed();
    }

    /// Stable sort of the backing list.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Patient, &Patient) -> Ordering,
    {
        self.patients.sort_by(compare);
        self.changed();
    }

    pub fn update_filter<F>(&mut self, filter: F)
    where
        F: Fn(&Patient) -> bool + 'static,
    {
        self.filter = Box::new(filter);
        self.changed();
        debug!(visible = self.visible.len(), "filter updated");
    }

    pub fn show_all(&mut self) {
        self.update_filter(|_| true);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&[&Patient]) + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        subscription
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(s, _)| *s != subscription);
        self.listeners.len() != before
    }

    fn position_of(&self, target: &Patient) -> Result<usize> {
        self.patients
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| BookError::PatientNotFound(target.name().to_string()))
    }

    fn refresh(&mut self) {
        let filter = &self.filter;
        self.visible = self
            .patients
            .iter()
            .enumerate()
            .filter(|(_, p)| filter(*p))
            .map(|(i, _)| i)
            .collect();
    }

    fn changed(&mut self) {
        self.refresh();
        let view: Vec<&Patient> = self.visible.iter().map(|&i| &self.patients[i]).collect();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&view);
        }
    }
}
