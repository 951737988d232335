pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_devices;
mod m20261018_000002_create_channels;
mod m20261018_000003_create_alerts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_devices::Migration),
            Box::new(m20261018_000002_create_channels::Migration),
            Box::new(m20261018_000003_create_alerts::Migration),
        ]
    }
}
