//! # nirmal-store
//!
//! Flat JSON-array storage for the Nirmal complaint service.
//!
//! Each collection lives in a single pretty-printed JSON file that is read
//! and rewritten wholesale on every operation. [`JsonFile`] serializes those
//! read-modify-write cycles behind a mutex so that requests handled by the
//! same process cannot lose each other's updates.
//!
//! - [`UserStore`] handles signup and login against `users.json`
//! - [`ComplaintStore`] handles complaint submission and lifecycle against `data.json`

pub mod complaints;
pub mod error;
pub mod json_file;
pub mod users;

pub use complaints::ComplaintStore;
pub use error::StoreError;
pub use json_file::JsonFile;
pub use users::UserStore;
