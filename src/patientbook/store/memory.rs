use super::DataStore;
use crate::error::Result;
use crate::model::Patient;

/// Keeps the latest snapshot in memory and counts how many were written.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    patients: Vec<Patient>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patients(patients: Vec<Patient>) -> Self {
        Self { patients, saves: 0 }
    }

    /// Number of snapshots written since creation.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn snapshot(&self) -> &[Patient] {
        &self.patients
    }
}

impl DataStore for InMemoryStore {
    fn load_patients(&self) -> Result<Vec<Patient>> {
        Ok(self.patients.clone())
    }

    fn save_patients(&mut self, patients: &[Patient]) -> Result<()> {
        self.patients = patients.to_vec();
        self.saves += 1;
        Ok(())
    }
}
