pub mod entity;
mod migration;
mod orm;

use anyhow::Context;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

pub use migration::Migrator;
pub use orm::OrmRepo;

#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connects and brings the schema up to date.
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let connection = sea_orm::Database::connect(url)
            .await
            .with_context(|| format!("Could not connect to database {url}"))?;
        Migrator::up(&connection, None)
            .await
            .context("Could not migrate database")?;
        Ok(Database { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}
