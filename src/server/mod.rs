pub mod app;
pub mod handlers;

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateDirection {
    Up,
    Down,
    Fresh,
}

use crate::app_context::AppContext;
use crate::config::Settings;
use crate::database::{connection::*, migrations::Migrator};
use anyhow::Result;
use sea_orm_migration::MigratorTrait;
use tracing::info;

pub async fn start_server(
    settings: Settings,
    database_path: &str,
    cors_origin: Option<&str>,
) -> Result<()> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    Migrator::up(&db, None).await?;
    info!("Database migrations completed");

    let port = settings.port;
    let playground_enabled = settings.playground_enabled();
    let app = app::create_app(AppContext::new(db, settings), cors_origin).await?;

    log_routes(playground_enabled);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes(playground_enabled: bool) {
    info!("API Endpoints:");
    info!("  /health                     - Health check");

    #[cfg(feature = "graphql")]
    {
        if playground_enabled {
            info!("  /graphql                    - GraphQL API & Playground");
        } else {
            info!("  /graphql                    - GraphQL API (playground disabled)");
        }
    }
    #[cfg(not(feature = "graphql"))]
    let _ = playground_enabled;
}

pub async fn migrate_database(database_path: &str, direction: MigrateDirection) -> Result<()> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    match direction {
        MigrateDirection::Up => {
            info!("Running migrations up");
            Migrator::up(&db, None).await?;
        }
        MigrateDirection::Down => {
            info!("Running migrations down");
            Migrator::down(&db, None).await?;
        }
        MigrateDirection::Fresh => {
            info!("Running fresh migrations (down then up)");
            Migrator::down(&db, None).await?;
            Migrator::up(&db, None).await?;
        }
    }

    info!("Database migration completed");
    Ok(())
}
