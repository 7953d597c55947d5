//! Employee service - the add and list use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Employee, EmployeeForm, EmployeeView, Password};
use crate::errors::AppResult;
use crate::infra::EmployeeRepository;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Normalize, validate, hash and insert one submitted form.
    async fn add_employee(&self, form: EmployeeForm) -> AppResult<Employee>;

    /// All employees ordered by employee ID, ready for display.
    async fn list_employees(&self) -> AppResult<Vec<EmployeeView>>;
}

/// Concrete implementation of EmployeeService.
pub struct EmployeeManager {
    employees: Arc<dyn EmployeeRepository>,
}

impl EmployeeManager {
    /// Create new employee service instance
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }
}

#[async_trait]
impl EmployeeService for EmployeeManager {
    async fn add_employee(&self, form: EmployeeForm) -> AppResult<Employee> {
        let draft = form.normalize();
        if let Err(e) = draft.validate() {
            tracing::warn!(employee_id = %draft.employee_id, "Rejected employee form: {}", e);
            return Err(e);
        }

        let password = Password::new(&draft.password)?;
        let record = draft.into_new_employee(password);

        match self.employees.insert(record).await {
            Ok(employee) => {
                tracing::info!(
                    id = %employee.id,
                    employee_id = %employee.employee_id,
                    "Employee created"
                );
                Ok(employee)
            }
            Err(e) => {
                tracing::error!("Employee insert failed: {}", e);
                Err(e)
            }
        }
    }

    async fn list_employees(&self) -> AppResult<Vec<EmployeeView>> {
        let employees = self.employees.list().await?;
        tracing::debug!(count = employees.len(), "Listed employees");
        Ok(employees.into_iter().map(EmployeeView::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::domain::NewEmployee;
    use crate::errors::AppError;
    use crate::infra::MockEmployeeRepository;

    fn stored(record: NewEmployee) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            employee_id: record.employee_id,
            first_name: record.first_name,
            last_name: record.last_name,
            nic_number: record.nic_number,
            date_of_birth: record.date_of_birth,
            contact_number: record.contact_number,
            address: record.address,
            department: record.department,
            role: record.role,
            email: record.email,
            date_of_joining: record.date_of_joining,
            password_hash: record.password.into_string(),
            created_at: Utc::now(),
        }
    }

    fn form() -> EmployeeForm {
        EmployeeForm {
            employee_id: Some("E1".into()),
            first_name: Some("A".into()),
            last_name: Some("B".into()),
            email: Some(" A@X.com ".into()),
            password: Some("p".into()),
            date_of_birth: Some("2024-13-40".into()),
            date_of_joining: Some("2024-01-15".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_employee_hashes_password_and_normalizes() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_insert()
            .times(1)
            .withf(|record| {
                record.email == "a@x.com"
                    && record.role == "User"
                    && record.date_of_birth.is_none()
                    && record.password.as_str() != "p"
                    && record.password.verify("p")
            })
            .returning(|record| Ok(stored(record)));

        let service = EmployeeManager::new(Arc::new(repo));
        let employee = service.add_employee(form()).await.unwrap();

        assert_eq!(employee.employee_id, "E1");
        assert_eq!(employee.date_of_joining, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert!(employee.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_missing_field_never_reaches_store() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_insert().never();

        let service = EmployeeManager::new(Arc::new(repo));
        let result = service
            .add_employee(EmployeeForm {
                last_name: Some("  ".into()),
                ..form()
            })
            .await;

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Last name is required"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_password_never_reaches_store() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_insert().never();

        let service = EmployeeManager::new(Arc::new(repo));
        let result = service
            .add_employee(EmployeeForm {
                password: Some(String::new()),
                ..form()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(msg)) if msg == "Password is required"));
    }

    #[tokio::test]
    async fn test_duplicate_is_passed_through() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_insert().times(1).returning(|_| {
            Err(AppError::Duplicate(
                "duplicate key value violates unique constraint \"idx_employees_employee_id\"".into(),
            ))
        });

        let service = EmployeeManager::new(Arc::new(repo));
        let err = service.add_employee(form()).await.unwrap_err();

        assert!(err.is_store_failure());
        assert!(err.to_string().contains("idx_employees_employee_id"));
    }

    #[tokio::test]
    async fn test_list_employees_formats_dates() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_list().times(1).returning(|| {
            let mut first = stored(form().normalize().into_new_employee(Password::from_hash("h".into())));
            first.date_of_birth = NaiveDate::from_ymd_opt(1990, 5, 6);
            Ok(vec![first])
        });

        let service = EmployeeManager::new(Arc::new(repo));
        let rows = service.list_employees().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date_of_birth.as_deref(), Some("1990-05-06"));
        assert_eq!(rows[0].date_of_joining.as_deref(), Some("2024-01-15"));
    }
}
