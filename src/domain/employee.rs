//! Employee entity, the raw form it is created from, and the
//! normalization and validation steps in between.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Password;
use crate::config::{DATE_FORMAT, DEFAULT_ROLE};
use crate::errors::{AppError, AppResult};

/// Raw add-employee form. Every field may be missing from the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeForm {
    pub employee_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nic_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    /// Role name; the form calls it `authentication`
    pub authentication: Option<String>,
    pub email: Option<String>,
    pub date_of_joining: Option<String>,
    pub password: Option<String>,
}

/// Normalized form values, not yet validated.
#[derive(Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub nic_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub contact_number: String,
    pub address: String,
    pub department: String,
    pub role: String,
    pub email: String,
    pub date_of_joining: Option<NaiveDate>,
    /// Plain text as submitted (untrimmed)
    pub password: String,
}

impl std::fmt::Debug for EmployeeDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeDraft")
            .field("employee_id", &self.employee_id)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Validated record whose password has been hashed, ready to insert.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub nic_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub contact_number: String,
    pub address: String,
    pub department: String,
    pub role: String,
    pub email: String,
    pub date_of_joining: Option<NaiveDate>,
    pub password: Password,
}

/// Stored employee record
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: Uuid,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub nic_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub contact_number: String,
    pub address: String,
    pub department: String,
    pub role: String,
    pub email: String,
    pub date_of_joining: Option<NaiveDate>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// One row of the listing page, dates already rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeView {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub nic_number: String,
    pub date_of_birth: Option<String>,
    pub contact_number: String,
    pub address: String,
    pub department: String,
    pub role: String,
    pub email: String,
    pub date_of_joining: Option<String>,
}

impl From<Employee> for EmployeeView {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: employee.employee_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            nic_number: employee.nic_number,
            date_of_birth: employee.date_of_birth.map(format_date),
            contact_number: employee.contact_number,
            address: employee.address,
            department: employee.department,
            role: employee.role,
            email: employee.email,
            date_of_joining: employee.date_of_joining.map(format_date),
        }
    }
}

impl EmployeeForm {
    /// Trim every field, lower-case the email, parse the dates and
    /// default the role.
    pub fn normalize(self) -> EmployeeDraft {
        let role = trimmed(self.authentication);

        EmployeeDraft {
            employee_id: trimmed(self.employee_id),
            first_name: trimmed(self.first_name),
            last_name: trimmed(self.last_name),
            nic_number: trimmed(self.nic_number),
            date_of_birth: self.date_of_birth.as_deref().and_then(parse_date),
            contact_number: trimmed(self.contact_number),
            address: trimmed(self.address),
            department: trimmed(self.department),
            role: if role.is_empty() {
                DEFAULT_ROLE.to_string()
            } else {
                role
            },
            email: trimmed(self.email).to_lowercase(),
            date_of_joining: self.date_of_joining.as_deref().and_then(parse_date),
            password: self.password.unwrap_or_default(),
        }
    }
}

impl EmployeeDraft {
    /// Check the password first, then the required fields in form order.
    /// Stops at the first failure.
    pub fn validate(&self) -> AppResult<()> {
        if self.password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        let required = [
            ("Employee ID", &self.employee_id),
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Email", &self.email),
        ];
        for (label, value) in required {
            if value.is_empty() {
                return Err(AppError::validation(format!("{} is required", label)));
            }
        }

        Ok(())
    }

    /// Swap the plain-text password for its hash.
    pub fn into_new_employee(self, password: Password) -> NewEmployee {
        NewEmployee {
            employee_id: self.employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            nic_number: self.nic_number,
            date_of_birth: self.date_of_birth,
            contact_number: self.contact_number,
            address: self.address,
            department: self.department,
            role: self.role,
            email: self.email,
            date_of_joining: self.date_of_joining,
            password,
        }
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Parse a `YYYY-MM-DD` date. Malformed or impossible dates yield `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Render a date in the same `YYYY-MM-DD` form the add page accepts.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
