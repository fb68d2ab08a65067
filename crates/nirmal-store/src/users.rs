//! User registration and login.

use crate::error::StoreError;
use crate::json_file::JsonFile;
use nirmal_core::{LoginRequest, Role, SignupRequest, User};
use std::path::PathBuf;

const INVALID_OFFICER_CODE: &str = "Invalid officer code";
const INVALID_CREDENTIALS: &str = "Invalid credentials";
const USER_EXISTS: &str = "User already exists";

/// Users persisted in a JSON array file.
pub struct UserStore {
    file: JsonFile<User>,
    /// Shared secret for the officer role. `None` disables officer access.
    officer_secret: Option<String>,
}

impl UserStore {
    /// Create a store over `path`.
    pub fn new(path: impl Into<PathBuf>, officer_secret: Option<String>) -> Self {
        Self {
            file: JsonFile::new(path),
            officer_secret: officer_secret.filter(|s| !s.is_empty()),
        }
    }

    /// Read every stored user.
    pub fn load_users(&self) -> Result<Vec<User>, StoreError> {
        self.file.read(|users| users.to_vec())
    }

    /// Overwrite the stored users wholesale.
    pub fn save_users(&self, users: &[User]) -> Result<(), StoreError> {
        self.file.update(|stored| {
            *stored = users.to_vec();
            Ok(())
        })
    }

    /// Register a new user.
    ///
    /// Fails with [`StoreError::Validation`] on a missing field,
    /// [`StoreError::Unauthorized`] on a bad officer code and
    /// [`StoreError::Conflict`] if `(username, role)` is taken.
    pub fn signup(&self, request: &SignupRequest) -> Result<User, StoreError> {
        let user = request.validate()?;

        if user.role == Role::Officer {
            self.check_officer_code(request.officer_code.as_deref())?;
        }

        self.file.update(|users| {
            if users.iter().any(|u| u.is(&user.username, &user.role)) {
                return Err(StoreError::Conflict(USER_EXISTS.to_string()));
            }
            users.push(user.clone());
            Ok(())
        })?;

        tracing::info!(username = %user.username, role = %user.role, "Registered user");
        Ok(user)
    }

    /// Authenticate against the stored users.
    ///
    /// Succeeds only on an exact `(username, password, role)` match and,
    /// for officers, a matching officer code.
    pub fn login(&self, request: &LoginRequest) -> Result<User, StoreError> {
        let role = request.role();

        if role == Some(Role::Officer) {
            self.check_officer_code(request.officer_code.as_deref())?;
        }

        let (Some(username), Some(password), Some(role)) =
            (request.username.as_deref(), request.password.as_deref(), role)
        else {
            return Err(StoreError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        let found = self.file.read(|users| {
            users
                .iter()
                .find(|u| u.matches(username, password, &role))
                .cloned()
        })?;

        let user = found.ok_or_else(|| StoreError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;
        tracing::info!(username = %user.username, role = %user.role, "User logged in");
        Ok(user)
    }

    fn check_officer_code(&self, code: Option<&str>) -> Result<(), StoreError> {
        match (&self.officer_secret, code) {
            (Some(secret), Some(code)) if secret == code => Ok(()),
            _ => Err(StoreError::Unauthorized(INVALID_OFFICER_CODE.to_string())),
        }
    }
}
