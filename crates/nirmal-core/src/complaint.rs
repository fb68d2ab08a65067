//! Complaint records and their two-state lifecycle.

use crate::error::ValidationError;
use crate::present;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a complaint. Moves Pending -> Completed only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Completed,
}

/// A stored complaint record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: u64,
    pub name: String,
    /// Complaint category, e.g. "water" or "roads".
    #[serde(rename = "type")]
    pub kind: String,
    pub desc: String,
    #[serde(default)]
    pub status: ComplaintStatus,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Complaint {
    /// Build a pending complaint stamped with the current time.
    ///
    /// The timestamp is truncated to milliseconds, the precision it is
    /// stored with.
    pub fn new(id: u64, name: String, kind: String, desc: String) -> Self {
        Self {
            id,
            name,
            kind,
            desc,
            status: ComplaintStatus::Pending,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Mark the complaint as completed. Completing twice is a no-op.
    pub fn complete(&mut self) {
        self.status = ComplaintStatus::Completed;
    }
}

/// Body of `POST /complaint`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewComplaint {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl NewComplaint {
    /// Convenience constructor with every field present.
    pub fn new(name: impl Into<String>, kind: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind.into()),
            desc: Some(desc.into()),
        }
    }

    /// Check that name, type and desc are all present and non-empty.
    ///
    /// Returns the fields in that order.
    pub fn validate(&self) -> Result<(String, String, String), ValidationError> {
        match (present(&self.name), present(&self.kind), present(&self.desc)) {
            (Some(name), Some(kind), Some(desc)) => {
                Ok((name.to_string(), kind.to_string(), desc.to_string()))
            }
            _ => Err(ValidationError::new("Please fill all fields.")),
        }
    }
}

/// `createdAt` as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_complaint_is_pending() {
        let c = Complaint::new(1, "A".into(), "water".into(), "leak".into());
        assert_eq!(c.status, ComplaintStatus::Pending);
        assert_eq!(c.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_complete_is_one_way() {
        let mut c = Complaint::new(1, "A".into(), "water".into(), "leak".into());
        c.complete();
        c.complete();
        assert_eq!(c.status, ComplaintStatus::Completed);
    }

    #[test]
    fn test_wire_format() {
        let c = Complaint::new(7, "A".into(), "water".into(), "leak".into());
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["type"], "water");
        assert_eq!(value["status"], "Pending");
        let created = value["createdAt"].as_str().unwrap();
        assert!(created.ends_with('Z'));
        assert_eq!(created.len(), "2024-01-01T00:00:00.000Z".len());
    }

    #[test]
    fn test_reads_existing_records() {
        let value = json!({
            "id": 3,
            "name": "Ravi",
            "type": "roads",
            "desc": "pothole",
            "status": "Completed",
            "createdAt": "2025-03-01T10:20:30.456Z"
        });
        let c: Complaint = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(c.kind, "roads");
        assert_eq!(c.status, ComplaintStatus::Completed);
        assert_eq!(serde_json::to_value(&c).unwrap(), value);
    }

    #[test]
    fn test_new_complaint_validate() {
        assert!(NewComplaint::new("A", "water", "leak").validate().is_ok());

        let err = NewComplaint::new("A", "", "leak").validate().unwrap_err();
        assert_eq!(err.message, "Please fill all fields.");

        let partial: NewComplaint = serde_json::from_str(r#"{"name":"A","type":"water"}"#).unwrap();
        assert!(partial.validate().is_err());
    }
}
