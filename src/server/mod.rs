//! REST API for card number validation.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/api/v1/validate/` | Validate a card number |
//! | GET | `/api/v1/health/` | Liveness check |
//! | GET | `/swagger-ui` | Interactive API documentation |
//!
//! Every response carries an `x-request-id` header, and every request produces
//! one access-log event (see [`middleware::access_log`]).

pub mod config;
pub mod handlers;
pub mod logging;
pub mod middleware;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::ServerConfig;
pub use logging::{init_logging, LogFormat};

/// Path of the validation endpoint.
pub const VALIDATE_PATH: &str = "/api/v1/validate/";

/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/api/v1/health/";

/// Path serving the OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI description of the service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Validator API",
        version = "0.1.0",
        description = "Validates payment card numbers: Luhn checksum and scheme detection. Numbers are never stored and only their last four digits are logged.",
        license(name = "MIT")
    ),
    tags(
        (name = "Validation", description = "Card number validation endpoints"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(handlers::validate_card, handlers::health),
    components(schemas(
        handlers::ValidateRequest,
        handlers::ValidateResponse,
        handlers::ErrorResponse,
        handlers::HealthResponse,
    ))
)]
pub struct ApiDoc;

/// Builds the application router with documentation, CORS, request ids and
/// access logging.
///
/// Layers from outermost to innermost: removal of client request ids,
/// request-id assignment, request-id propagation to the response, access log,
/// CORS.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, ApiDoc::openapi()))
        .route(VALIDATE_PATH, post(handlers::validate_card))
        .route(HEALTH_PATH, get(handlers::health))
        .layer(cors)
        .layer(axum::middleware::from_fn(middleware::access_log))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(axum::middleware::map_request(
            middleware::strip_client_request_id,
        ))
}

/// Binds the configured address and serves [`router`] until Ctrl-C or
/// SIGTERM.
pub async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown())
        .await
}

async fn shutdown() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("fail to install the `Ctrl+C` handler: {err}");
            std::future::pending::<()>().await;
        }
    };
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("fail to install the terminate signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
    tracing::warn!("signal received, starting graceful shutdown");
}
