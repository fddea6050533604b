use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    /// Username of the sponsor, if any.
    pub upline: Option<String>,
    pub referral_code: String,
    pub referral_link: String,
    pub joined_date: NaiveDate,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Checks the editable profile fields before saving.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] for a blank username or email.
pub fn validate_profile_update(username: &str, email: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "username" });
    }
    if email.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "email" });
    }
    Ok(())
}
