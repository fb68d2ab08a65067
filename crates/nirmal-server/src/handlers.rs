//! Request handlers.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use nirmal_core::{Complaint, LoginRequest, NewComplaint, SignupRequest};
use serde::Serialize;
use serde_json::{Value, json};

/// Body of every successful mutating request.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    fn json(message: &'static str) -> Json<Self> {
        Json(Self { message })
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Unwrap a JSON body.
///
/// A request without a JSON content type is treated as an empty object so
/// the presence checks report what is missing. A body that claims to be
/// JSON but fails to parse is a 400.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
}

/// Leading decimal digits of a path segment, the way a lenient integer
/// parse reads them ("12abc" is 12, "abc" is nothing).
pub fn parse_id(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
    raw[..end].parse().ok()
}

// =============================================================================
// Users
// =============================================================================

/// `POST /signup`
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let request = body_or_default(payload)?;
    state.users().signup(&request).inspect_err(|err| {
        tracing::warn!(username = ?request.username, error = %err, "Signup rejected");
    })?;
    Ok(MessageResponse::json("Signup successful"))
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let request = body_or_default(payload)?;
    state.users().login(&request).inspect_err(|err| {
        tracing::warn!(username = ?request.username, error = %err, "Login rejected");
    })?;
    Ok(MessageResponse::json("Login successful"))
}

// =============================================================================
// Complaints
// =============================================================================

/// `POST /complaint`
pub async fn create_complaint(
    State(state): State<AppState>,
    payload: Result<Json<NewComplaint>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let new = body_or_default(payload)?;
    state.complaints().create(&new)?;
    Ok(MessageResponse::json("✅ Complaint submitted successfully!"))
}

/// `GET /complaints`
pub async fn list_complaints(State(state): State<AppState>) -> ApiResult<Vec<Complaint>> {
    Ok(Json(state.complaints().list()?))
}

/// `PUT /complaint/{id}`
pub async fn complete_complaint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let id = parse_id(&id).ok_or_else(|| ApiError::NotFound("Not found".to_string()))?;
    state.complaints().complete(id)?;
    Ok(MessageResponse::json("✅ Complaint marked as completed"))
}

/// `DELETE /complaint/{id}`
pub async fn delete_complaint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    match parse_id(&id) {
        Some(id) => {
            state.complaints().delete(id)?;
        }
        None => state.complaints().touch()?,
    }
    Ok(MessageResponse::json("🗑️ Complaint deleted"))
}

// =============================================================================
// Health
// =============================================================================

/// `GET /healthz`
pub async fn healthz() -> Json<Value> {
    Json(json!({ "ok": true, "service": "nirmal-server" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("7"), Some(7));
        assert_eq!(parse_id("12abc"), Some(12));
        assert_eq!(parse_id(" 3"), Some(3));
        assert_eq!(parse_id("+4"), Some(4));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-1"), None);
    }
}
