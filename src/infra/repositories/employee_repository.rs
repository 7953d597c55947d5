//! Employee repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::{Employee, NewEmployee};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Uniqueness of employee ID and email is left to the store's indexes;
/// nothing here reads before writing.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert one record. A repeated employee ID or email fails with
    /// `AppError::Duplicate`.
    async fn insert(&self, employee: NewEmployee) -> AppResult<Employee>;

    /// Every record, ordered by employee ID ascending
    async fn list(&self) -> AppResult<Vec<Employee>>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn insert(&self, employee: NewEmployee) -> AppResult<Employee> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            employee_id: Set(employee.employee_id),
            first_name: Set(employee.first_name),
            last_name: Set(employee.last_name),
            nic_number: Set(employee.nic_number),
            date_of_birth: Set(employee.date_of_birth),
            contact_number: Set(employee.contact_number),
            address: Set(employee.address),
            department: Set(employee.department),
            role: Set(employee.role),
            email: Set(employee.email),
            date_of_joining: Set(employee.date_of_joining),
            password_hash: Set(employee.password.into_string()),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(AppError::from_insert)?;
        Ok(Employee::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_asc(employee::Column::EmployeeId)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }
}
