//! # ebe Waiting-Room API
//!
//! The API crate provides the web server for ebe's book-club meeting
//! waiting room. It exposes the admission endpoints participants and
//! moderators use around a video meeting, plus the meeting directory
//! surface those endpoints depend on.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like authentication and error handling
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database interactions.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for authentication, authorization, and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// This struct encapsulates dependencies that are shared across the
/// application: the database connection pool and the secret used to
/// validate bearer tokens issued by the main ebe application.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,

    /// Secret used to validate bearer tokens on protected routes
    pub jwt_secret: String,
}

/// Starts the API server with the provided configuration and database connection
///
/// This function initializes the application, sets up logging, configures routes,
/// and starts the HTTP server.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `db_pool` - PostgreSQL connection pool for database operations
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        db_pool,
        jwt_secret: config.jwt_secret.clone(),
    });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Meeting directory endpoints
        .merge(routes::meeting::routes(state.clone()))
        // Waiting-room admission endpoints
        .merge(routes::waiting_room::routes(state.clone()))
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .filter_map(|origin| origin.parse::<axum::http::HeaderValue>().ok())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(
                |_: tower::BoxError| async { axum::http::StatusCode::REQUEST_TIMEOUT },
            ))
            .timeout(std::time::Duration::from_secs(config.request_timeout))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
