use crate::domain::model::{DEPARTMENTS, ENROLLMENT_NUMBER_LENGTH, SPORTS};
use crate::utils::error::{RegistrationError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn rejected(message: String) -> RegistrationError {
    RegistrationError::ValidationError { message }
}

pub fn validate_name(field_name: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(rejected(format!("{} is required", field_name)));
    }

    if trimmed.chars().count() < 2 {
        return Err(rejected(format!(
            "{} must be at least 2 characters",
            field_name
        )));
    }

    Ok(())
}

pub fn validate_sport(sport: &str) -> Result<()> {
    if !SPORTS.contains(&sport.trim()) {
        return Err(rejected("Please select a valid sport".to_string()));
    }
    Ok(())
}

pub fn validate_department(department: &str) -> Result<()> {
    if !DEPARTMENTS.contains(&department.trim()) {
        return Err(rejected("Please select a valid department".to_string()));
    }
    Ok(())
}

pub fn validate_enrollment_number(enrollment_no: &str) -> Result<()> {
    let trimmed = enrollment_no.trim();

    if trimmed.is_empty() {
        return Err(rejected("Enrollment number is required".to_string()));
    }

    if trimmed.chars().count() != ENROLLMENT_NUMBER_LENGTH {
        return Err(rejected(format!(
            "Enrollment number must be exactly {} digits",
            ENROLLMENT_NUMBER_LENGTH
        )));
    }

    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(rejected(
            "Enrollment number must contain only digits".to_string(),
        ));
    }

    Ok(())
}

/// Checks every form field in order, stopping at the first violation.
pub fn validate_all(
    first_name: &str,
    last_name: &str,
    sport: &str,
    department: &str,
    enrollment_no: &str,
) -> Result<()> {
    validate_name("First name", first_name)?;
    validate_name("Last name", last_name)?;
    validate_sport(sport)?;
    validate_department(department)?;
    validate_enrollment_number(enrollment_no)?;
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RegistrationError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(RegistrationError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}
