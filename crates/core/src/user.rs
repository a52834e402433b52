//! User entity and field validation.
//!
//! A user must have a non-blank email containing `@` and a non-blank login
//! with no whitespace. The display name is optional: when blank or absent
//! it falls back to the login, on creation and on update alike.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::EntityId;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub login: String,
    /// Display name; never blank once stored (defaults to the login).
    #[serde(default)]
    pub name: String,
    pub birthday: NaiveDate,
}

/// Payload for creating a user; the store assigns the identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    pub birthday: NaiveDate,
}

impl User {
    pub fn validate(&self) -> CoreResult<()> {
        validate_fields(&self.email, &self.login, self.birthday)
    }

    /// Fall back to the login when the display name is blank.
    pub fn apply_name_default(&mut self) {
        if self.name.trim().is_empty() {
            self.name = self.login.clone();
        }
    }
}

impl NewUser {
    pub fn validate(&self) -> CoreResult<()> {
        validate_fields(&self.email, &self.login, self.birthday)
    }

    /// Build the stored record once the store has assigned an identifier,
    /// applying the name-defaults-to-login rule.
    pub fn into_user(self, id: EntityId) -> User {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.login.clone(),
        };
        User {
            id,
            email: self.email,
            login: self.login,
            name,
            birthday: self.birthday,
        }
    }
}

fn validate_fields(email: &str, login: &str, birthday: NaiveDate) -> CoreResult<()> {
    if email.trim().is_empty() {
        return Err(CoreError::Validation(
            "user email must not be blank".to_string(),
        ));
    }
    if !email.contains('@') {
        return Err(CoreError::Validation(
            "user email must contain the '@' character".to_string(),
        ));
    }
    if login.trim().is_empty() {
        return Err(CoreError::Validation(
            "user login must not be blank".to_string(),
        ));
    }
    if login.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "user login must not contain whitespace".to_string(),
        ));
    }
    if birthday > Utc::now().date_naive() {
        return Err(CoreError::Validation(
            "user birthday must not be in the future".to_string(),
        ));
    }
    Ok(())
}
