//! # nirmal-core
//!
//! Domain types shared across the Nirmal crates: users and their roles,
//! complaints and their lifecycle, the request payloads the HTTP layer
//! accepts, and the layered application configuration.

// Configuration types shared across all Nirmal crates
pub mod config;

pub mod complaint;
pub mod error;
pub mod user;

pub use complaint::{Complaint, ComplaintStatus, NewComplaint};
pub use config::{AppConfig, AuthConfig, IdStrategy, ServerConfig, StorageConfig};
pub use error::{ConfigError, ValidationError};
pub use user::{LoginRequest, Role, SignupRequest, User};

/// Returns the value if it is present and non-empty.
///
/// Empty strings count as missing, the same as an absent field.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
