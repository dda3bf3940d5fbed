//! Migration: Create employees table.

use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut id = ColumnDef::new(Employees::Id);
        // SQLite only accepts AUTOINCREMENT on an INTEGER PRIMARY KEY (64-bit there anyway)
        match manager.get_database_backend() {
            DatabaseBackend::Sqlite => id.integer(),
            _ => id.big_integer(),
        };
        id.not_null().auto_increment().primary_key();

        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(&mut id)
                    .col(ColumnDef::new(Employees::FirstName).string().not_null())
                    .col(ColumnDef::new(Employees::LastName).string().not_null())
                    .col(ColumnDef::new(Employees::Email).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Email uniqueness is enforced here as well as in EmployeeService::create
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
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
}
