//! # API Facade
//!
//! The API layer is a thin facade over the parser and the command layer. It is
//! the single entry point for every patientbook operation, whatever client is
//! driving it.
//!
//! ## Role
//!
//! The facade:
//! - **Parses** one line of user text into a [`Command`]
//! - **Dispatches** it against the owned [`PatientBook`]
//! - **Persists** a full snapshot after each successful mutating command
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! A failed save does not undo the command: the book has already changed and
//! listeners have already seen it. The result comes back `Ok` with a warning
//! message, and the in-memory book stays ahead of storage until the next
//! successful save.
//!
//! It does no printing and no formatting. Business rules live in
//! `commands/*.rs`, grammar in `parser/`.
//!
//! ## Generic Over DataStore
//!
//! `BookApi<S: DataStore>` is generic over the storage backend, so tests run it
//! against [`InMemoryStore`](crate::store::memory::InMemoryStore) and inspect
//! what was saved.

use crate::book::{PatientBook, Subscription};
use crate::commands::{CmdMessage, CmdResult, Command};
use crate::error::Result;
use crate::model::Patient;
use crate::parser;
use crate::store::DataStore;
use tracing::{debug, warn};

pub const MESSAGE_NOT_SAVED: &str = "Change kept for this session but not saved: ";

pub struct BookApi<S: DataStore> {
    store: S,
    book: PatientBook,
}

impl<S: DataStore> BookApi<S> {
    /// Builds the book from whatever the store currently holds.
    pub fn new(store: S) -> Result<Self> {
        let book = PatientBook::from_patients(store.load_patients()?)?;
        debug!(patients = book.patients().len(), "book loaded");
        Ok(Self { store, book })
    }

    /// Parses and runs one line of user input.
    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        let command = parser::parse_command(line).inspect_err(|e| {
            warn!(error = %e, "rejected input");
        })?;
        self.run(&command)
    }

    /// Runs an already parsed command.
    pub fn run(&mut self, command: &Command) -> Result<CmdResult> {
        debug!(command = command.keyword(), "executing");
        let mut result = command.execute(&mut self.book).inspect_err(|e| {
            warn!(command = command.keyword(), error = %e, "command failed");
        })?;
        if command.is_mutating() {
            if let Err(e) = self.store.save_patients(self.book.patients()) {
                warn!(command = command.keyword(), error = %e, "snapshot not saved");
                result.add_message(CmdMessage::warning(format!("{}{}", MESSAGE_NOT_SAVED, e)));
            }
        }
        Ok(result)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&[&Patient]) + 'static,
    {
        self.book.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.book.unsubscribe(subscription)
    }

    pub fn book(&self) -> &PatientBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
