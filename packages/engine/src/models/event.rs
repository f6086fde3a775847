use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::EngineError;

#[derive(Debug, Deserialize)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub location: String,
}

/// PATCH semantics: absent fields are left unchanged. The organizer is
/// immutable after creation, so there is no field for it.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub location: Option<String>,
}

fn validate_name(name: &str) -> Result<(), EngineError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > 100 {
        return Err(EngineError::Validation(
            "Event name must be 1-100 characters".into(),
        ));
    }
    Ok(())
}

fn validate_location(location: &str) -> Result<(), EngineError> {
    if location.chars().count() > 100 {
        return Err(EngineError::Validation(
            "Location must be at most 100 characters".into(),
        ));
    }
    Ok(())
}

pub fn validate_new_event(req: &NewEvent) -> Result<(), EngineError> {
    validate_name(&req.name)?;
    if req.description.trim().is_empty() {
        return Err(EngineError::Validation(
            "Description must not be empty".into(),
        ));
    }
    validate_location(&req.location)
}

pub fn validate_update_event(req: &UpdateEvent) -> Result<(), EngineError> {
    if let Some(ref name) = req.name {
        validate_name(name)?;
    }
    if let Some(ref description) = req.description
        && description.trim().is_empty()
    {
        return Err(EngineError::Validation(
            "Description must not be empty".into(),
        ));
    }
    if let Some(ref location) = req.location {
        validate_location(location)?;
    }
    Ok(())
}
