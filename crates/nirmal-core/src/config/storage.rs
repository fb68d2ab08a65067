//! Storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a new complaint id is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `len + 1`. Compatible with existing data files, but an id can repeat
    /// once complaints have been deleted.
    #[default]
    Count,
    /// `max(id) + 1`. Never collides with a record that still exists.
    Max,
}

impl IdStrategy {
    /// Pick the next id for a collection holding `existing`.
    ///
    /// Returns `None` once the id space is used up.
    pub fn next_id(&self, existing: impl ExactSizeIterator<Item = u64>) -> Option<u64> {
        match self {
            IdStrategy::Count => u64::try_from(existing.len()).ok()?.checked_add(1),
            IdStrategy::Max => existing.max().unwrap_or(0).checked_add(1),
        }
    }
}

/// Locations of the JSON collection files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON array of users.
    #[serde(default = "default_users_file")]
    pub users_file: PathBuf,

    /// JSON array of complaints.
    #[serde(default = "default_complaints_file")]
    pub complaints_file: PathBuf,

    /// Complaint id assignment.
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_file: default_users_file(),
            complaints_file: default_complaints_file(),
            id_strategy: IdStrategy::default(),
        }
    }
}

fn default_users_file() -> PathBuf {
    PathBuf::from("users.json")
}

fn default_complaints_file() -> PathBuf {
    PathBuf::from("data.json")
}
