//! Animal shelter adoption API.
//!
//! A small REST service over a single `animals` table: list, fetch, create,
//! replace and delete, with interactive documentation served at `/docs`.

pub mod config;
pub mod entity;
pub mod errors;
pub mod handlers;
pub mod migrations;
pub mod models;
pub mod store;

use axum::Router;
use axum::http::{HeaderValue, header::InvalidHeaderValue};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

use crate::config::Config;
use crate::handlers::ANIMALS_PATH;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Animal Shelter API",
        description = "Adoption listings for a local animal shelter. Browse the animals, register new arrivals, edit their records and remove them once adopted.",
        license(name = "MIT")
    ),
    tags(
        (name = "animals", description = "Animals available for adoption")
    )
)]
struct ApiDoc;

/// Assembles the application router: animal routes under
/// [`ANIMALS_PATH`], Scalar docs at `/docs`, CORS and request tracing.
///
/// # Errors
///
/// Fails if the configured CORS origin is not a valid header value.
pub fn build_router(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<Router, InvalidHeaderValue> {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any);

    let (router, api_docs) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest(ANIMALS_PATH, handlers::router(db))
        .split_for_parts();

    Ok(router
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
