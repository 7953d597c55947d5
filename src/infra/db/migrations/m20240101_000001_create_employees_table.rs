//! Migration: Create the employees table and its unique indexes.

use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing order must be byte-wise, whatever the server locale is
        let mut employee_id = ColumnDef::new(Employees::EmployeeId);
        employee_id.string().not_null();
        if manager.get_database_backend() == DatabaseBackend::Postgres {
            employee_id.extra("COLLATE \"C\"");
        }

        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Employees::Id).uuid().not_null().primary_key())
                    .col(employee_id)
                    .col(ColumnDef::new(Employees::FirstName).string().not_null())
                    .col(ColumnDef::new(Employees::LastName).string().not_null())
                    .col(ColumnDef::new(Employees::NicNumber).string().not_null())
                    .col(ColumnDef::new(Employees::DateOfBirth).date().null())
                    .col(ColumnDef::new(Employees::ContactNumber).string().not_null())
                    .col(ColumnDef::new(Employees::Address).string().not_null())
                    .col(ColumnDef::new(Employees::Department).string().not_null())
                    .col(ColumnDef::new(Employees::Role).string().not_null())
                    .col(ColumnDef::new(Employees::Email).string().not_null())
                    .col(ColumnDef::new(Employees::DateOfJoining).date().null())
                    .col(ColumnDef::new(Employees::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Employees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_employee_id")
                    .table(Employees::Table)
                    .col(Employees::EmployeeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_email")
                    .table(Employees::Table)
                    .col(Employees::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Indexes go with the table
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    EmployeeId,
    FirstName,
    LastName,
    NicNumber,
    DateOfBirth,
    ContactNumber,
    Address,
    Department,
    Role,
    Email,
    DateOfJoining,
    PasswordHash,
    CreatedAt,
}
