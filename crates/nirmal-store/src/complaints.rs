//! Complaint submission and lifecycle.

use crate::error::StoreError;
use crate::json_file::JsonFile;
use nirmal_core::{Complaint, IdStrategy, NewComplaint};
use std::path::PathBuf;

const NOT_FOUND: &str = "Not found";

/// Complaints persisted in a JSON array file.
pub struct ComplaintStore {
    file: JsonFile<Complaint>,
    id_strategy: IdStrategy,
}

impl ComplaintStore {
    /// Create a store over `path`.
    pub fn new(path: impl Into<PathBuf>, id_strategy: IdStrategy) -> Self {
        Self {
            file: JsonFile::new(path),
            id_strategy,
        }
    }

    /// Read every stored complaint.
    pub fn load_complaints(&self) -> Result<Vec<Complaint>, StoreError> {
        self.file.read(|complaints| complaints.to_vec())
    }

    /// Overwrite the stored complaints wholesale.
    pub fn save_complaints(&self, complaints: &[Complaint]) -> Result<(), StoreError> {
        self.file.update(|stored| {
            *stored = complaints.to_vec();
            Ok(())
        })
    }

    /// Submit a new complaint. It starts out pending.
    pub fn create(&self, new: &NewComplaint) -> Result<Complaint, StoreError> {
        let (name, kind, desc) = new.validate()?;

        let complaint = self.file.update(|complaints| {
            let id = self
                .id_strategy
                .next_id(complaints.iter().map(|c| c.id))
                .ok_or(StoreError::IdExhausted)?;
            let complaint = Complaint::new(id, name, kind, desc);
            complaints.push(complaint.clone());
            Ok(complaint)
        })?;

        tracing::info!(id = complaint.id, kind = %complaint.kind, "New complaint");
        Ok(complaint)
    }

    /// All complaints in insertion order.
    pub fn list(&self) -> Result<Vec<Complaint>, StoreError> {
        self.load_complaints()
    }

    /// Mark the complaint with `id` as completed.
    pub fn complete(&self, id: u64) -> Result<Complaint, StoreError> {
        let complaint = self.file.update(|complaints| {
            let complaint = complaints
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| StoreError::NotFound(NOT_FOUND.to_string()))?;
            complaint.complete();
            Ok(complaint.clone())
        })?;

        tracing::info!(id, "Complaint marked as completed");
        Ok(complaint)
    }

    /// Remove every complaint with `id`. Returns how many were removed;
    /// removing nothing is not an error.
    pub fn delete(&self, id: u64) -> Result<usize, StoreError> {
        let removed = self.file.update(|complaints| {
            let before = complaints.len();
            complaints.retain(|c| c.id != id);
            Ok(before - complaints.len())
        })?;

        tracing::info!(id, removed, "Complaint deleted");
        Ok(removed)
    }

    /// Rewrite the collection unchanged. Used when a delete names no
    /// parseable id.
    pub fn touch(&self) -> Result<(), StoreError> {
        self.file.update(|_| Ok(()))
    }
}
