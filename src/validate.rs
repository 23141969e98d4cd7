use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::model::Employee;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Checks a record for structural completeness, email shape, salary range,
/// and start-date validity. Applied by the mediator before any write
/// fan-out; never applied to records read from a backend.
pub fn validate_employee(employee: &Employee) -> Result<(), ValidationError> {
    let required = [
        ("id", &employee.id),
        ("full_name", &employee.full_name),
        ("email", &employee.email),
        ("position", &employee.position),
        ("department", &employee.department),
        ("start_date", &employee.start_date),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(name));
        }
    }

    validate_email(&employee.email)?;
    validate_salary(employee.salary)?;
    validate_date(&employee.start_date)?;
    Ok(())
}

/// Checks the basic `local@domain.tld` shape: no whitespace, exactly one
/// `@`, at least one dot in the domain part.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmailFormat(email.to_string()))
    }
}

/// Checks that the salary is a finite, non-negative number.
pub fn validate_salary(salary: f64) -> Result<(), ValidationError> {
    if salary.is_finite() && salary >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidSalary(salary))
    }
}

/// Checks that the start date is a real `YYYY-MM-DD` calendar date.
pub fn validate_date(date: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidDate(date.to_string()))
}
