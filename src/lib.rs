pub mod config;
pub mod errors;

pub mod app_context;
pub use app_context::AppContext;
pub mod database;
pub mod server;
pub mod services;

#[cfg(feature = "graphql")]
pub mod graphql;
