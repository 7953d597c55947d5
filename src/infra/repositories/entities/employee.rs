//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Employee;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub nic_number: String,
    pub date_of_birth: Option<Date>,
    pub contact_number: String,
    pub address: String,
    pub department: String,
    pub role: String,
    #[sea_orm(unique)]
    pub email: String,
    pub date_of_joining: Option<Date>,
    pub password_hash: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: model.id,
            employee_id: model.employee_id,
            first_name: model.first_name,
            last_name: model.last_name,
            nic_number: model.nic_number,
            date_of_birth: model.date_of_birth,
            contact_number: model.contact_number,
            address: model.address,
            department: model.department,
            role: model.role,
            email: model.email,
            date_of_joining: model.date_of_joining,
            password_hash: model.password_hash,
            created_at: model.created_at,
        }
    }
}
