use sea_orm_migration::{prelude::*, sea_orm::Schema, MigrationName};

use super::entity::prelude::*;

const SO_NUMBER_INDEX: &str = "idx_work_slips_so_number";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateWorkSlips)]
    }
}

/// Creates `work_slips` unless a database of an earlier deployment already
/// has it.
struct CreateWorkSlips;

impl MigrationName for CreateWorkSlips {
    fn name(&self) -> &str {
        "m20250401_0001_create_work_slips"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateWorkSlips {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());
        manager
            .create_table(
                schema
                    .create_table_from_entity(WorkSlipEntity)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(SO_NUMBER_INDEX)
                    .table(WorkSlipEntity)
                    .col(WorkSlipColumn::SoNumber)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(SO_NUMBER_INDEX)
                    .table(WorkSlipEntity)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(WorkSlipEntity).if_exists().to_owned())
            .await
    }
}
