use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates;
use crate::error::AppError;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub full_name: String,
    pub national_id: String,
    #[serde(with = "dates::br_date")]
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub role: Option<String>,
    pub registration_code: String,
    pub class_name: String,
    pub room: Option<String>,
    pub enrollment_year: Option<String>,
    pub sex: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub education_level: Option<String>,
    pub theology_course: Option<String>,
    pub leadership_course: Option<String>,
    pub baptized: Option<String>,
    pub occupation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted by the create and edit operations. `registration_code`
/// is deliberately absent: it is assigned once at creation and preserved
/// on every edit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonInput {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub national_id: String,
    /// DD/MM/YYYY at the boundary; parsed during validation.
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub class_name: String,
    pub role: Option<String>,
    pub room: Option<String>,
    pub enrollment_year: Option<String>,
    pub sex: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub education_level: Option<String>,
    pub theology_course: Option<String>,
    pub leadership_course: Option<String>,
    pub baptized: Option<String>,
    pub occupation: Option<String>,
}

impl PersonInput {
    /// Check the required fields and return the parsed birth date.
    pub fn validate(&self) -> Result<NaiveDate, AppError> {
        let required = [
            ("full_name", &self.full_name),
            ("national_id", &self.national_id),
            ("birth_date", &self.birth_date),
            ("email", &self.email),
            ("phone", &self.phone),
            ("class_name", &self.class_name),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("Field '{name}' is required")));
            }
        }

        dates::parse_br_date(&self.birth_date).ok_or_else(|| {
            AppError::Validation(format!(
                "Invalid birth_date '{}', expected DD/MM/YYYY",
                self.birth_date
            ))
        })
    }
}
