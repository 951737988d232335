use anyhow::{anyhow, Result};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

#[cfg(feature = "graphql")]
use axum::{extract::State, routing::post};
#[cfg(feature = "graphql")]
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
#[cfg(feature = "graphql")]
use crate::graphql::{build_schema, GraphQLSchema};

use super::handlers::health;
use crate::app_context::AppContext;

#[derive(Clone)]
pub struct AppState {
    pub app: AppContext,
    #[cfg(feature = "graphql")]
    pub graphql_schema: GraphQLSchema,
}

pub async fn create_app(app: AppContext, cors_origin: Option<&str>) -> Result<Router> {
    let playground_enabled = app.settings().playground_enabled();

    let state = AppState {
        #[cfg(feature = "graphql")]
        graphql_schema: build_schema(app.clone()),
        app,
    };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any),
    };

    #[allow(unused_mut)]
    let mut router: Router<AppState> = Router::new().route("/health", get(health::health_check));

    #[cfg(feature = "graphql")]
    {
        router = if playground_enabled {
            router.route("/graphql", get(graphql_playground).post(graphql_handler))
        } else {
            router.route("/graphql", post(graphql_handler))
        };
    }
    #[cfg(not(feature = "graphql"))]
    let _ = playground_enabled;

    Ok(router
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state))
}

#[cfg(feature = "graphql")]
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    tracing::debug!("GraphQL request received");
    state.graphql_schema.execute(req.into_inner()).await.into()
}

#[cfg(feature = "graphql")]
async fn graphql_playground() -> impl axum::response::IntoResponse {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
