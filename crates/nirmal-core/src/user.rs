//! Users, roles and the signup/login payloads.

use crate::error::ValidationError;
use crate::present;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role a user registers and logs in under.
///
/// Stored as a plain string. Strings other than `citizen` and `officer`
/// are kept verbatim as [`Role::Other`] so that older data files load and
/// rewrite unchanged; such records never authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Files complaints.
    Citizen,
    /// Resolves complaints. Requires the officer code.
    Officer,
    /// Any other stored role string.
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Citizen => "citizen",
            Role::Officer => "officer",
            Role::Other(other) => other,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses only the roles a request may ask for.
impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "citizen" => Ok(Role::Citizen),
            "officer" => Ok(Role::Officer),
            other => Err(ValidationError::new(format!("Unknown role: {}", other))),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Role::Other(s))
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

/// A stored user record.
///
/// Passwords are kept in plaintext so existing `users.json` files stay
/// readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl User {
    /// Whether this record has the given `(username, role)` identity.
    pub fn is(&self, username: &str, role: &Role) -> bool {
        self.username == username && self.role == *role
    }

    /// Whether this record matches the full credential triple.
    pub fn matches(&self, username: &str, password: &str, role: &Role) -> bool {
        self.is(username, role) && self.password == password
    }
}

/// Body of `POST /signup`.
///
/// Every field is optional on the wire so that absent and empty fields
/// get the same "Missing fields" answer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub officer_code: Option<String>,
}

impl SignupRequest {
    /// Check presence of the required fields and build the user to store.
    pub fn validate(&self) -> Result<User, ValidationError> {
        let (Some(username), Some(password), Some(role)) = (
            present(&self.username),
            present(&self.password),
            present(&self.role),
        ) else {
            return Err(ValidationError::new("Missing fields"));
        };

        let role = role
            .parse::<Role>()
            .map_err(|_| ValidationError::new("Missing fields"))?;

        Ok(User {
            username: username.to_string(),
            password: password.to_string(),
            role,
        })
    }
}

/// Body of `POST /login`.
///
/// Fields that are not JSON strings read as absent, so a mistyped value
/// fails authentication instead of rejecting the body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "loose_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub officer_code: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Other(IgnoredAny),
}

fn loose_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(text)) => Some(text),
        Some(Loose::Other(_)) | None => None,
    })
}

impl LoginRequest {
    /// The requested role, if it names a known one.
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|r| r.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(username: &str, password: &str, role: &str) -> SignupRequest {
        SignupRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            role: Some(role.to_string()),
            officer_code: None,
        }
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Officer).unwrap(), "\"officer\"");
        let role: Role = serde_json::from_str("\"citizen\"").unwrap();
        assert_eq!(role, Role::Citizen);
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_unknown_stored_role_round_trips() {
        let raw = r#"{"username":"root","password":"pw","role":"admin"}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.role, Role::Other("admin".to_string()));
        assert!(!user.matches("root", "pw", &Role::Citizen));
        assert!(!user.matches("root", "pw", &Role::Officer));
        assert_eq!(serde_json::to_string(&user).unwrap(), raw);
    }

    #[test]
    fn test_login_request_ignores_mistyped_fields() {
        let req: LoginRequest = serde_json::from_str(
            r#"{"username":"a","password":1234,"role":"citizen","officerCode":null}"#,
        )
        .unwrap();
        assert_eq!(req.username.as_deref(), Some("a"));
        assert!(req.password.is_none());
        assert!(req.officer_code.is_none());
        assert_eq!(req.role(), Some(Role::Citizen));
    }

    #[test]
    fn test_signup_validate_ok() {
        let user = signup("asha", "pw", "citizen").validate().unwrap();
        assert_eq!(user.username, "asha");
        assert_eq!(user.role, Role::Citizen);
    }

    #[test]
    fn test_signup_validate_missing_and_empty() {
        let mut req = signup("asha", "pw", "citizen");
        req.password = None;
        assert_eq!(req.validate().unwrap_err().message, "Missing fields");

        let req = signup("", "pw", "citizen");
        assert_eq!(req.validate().unwrap_err().message, "Missing fields");

        let req = signup("asha", "pw", "mayor");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_signup_request_camel_case() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"username":"o","password":"p","role":"officer","officerCode":"s3cret"}"#,
        )
        .unwrap();
        assert_eq!(req.officer_code.as_deref(), Some("s3cret"));
    }

    #[test]
    fn test_user_matches() {
        let user = User {
            username: "asha".to_string(),
            password: "pw".to_string(),
            role: Role::Citizen,
        };
        assert!(user.matches("asha", "pw", &Role::Citizen));
        assert!(!user.matches("asha", "pw", &Role::Officer));
        assert!(!user.matches("asha", "other", &Role::Citizen));
        assert!(user.is("asha", &Role::Citizen));
    }
}
