use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::database::{connection::establish_connection, migrations::Migrator};

/// Creates an in-memory SQLite database with every migration applied.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = establish_connection("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
