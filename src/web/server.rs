use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::feed::Feeds;
use crate::preference::ThemeToggle;
use crate::render::Board;
use crate::telemetry::SystemClock;

use super::api::telemetry as telemetry_handlers;
use super::api::theme as theme_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::state::AppState;
use super::ui::handlers as ui_handlers;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.config.web.static_dir.clone();

    Router::new()
        // UI routes
        .route("/", get(ui_handlers::dashboard))
        .route("/fragments/{region}", get(ui_handlers::fragment))
        // Telemetry API endpoints
        .route("/api/telemetry/{link}", get(telemetry_handlers::latest))
        // Theme API endpoints
        .route("/api/theme", get(theme_handlers::current))
        .route("/api/theme/toggle", post(theme_handlers::toggle))
        // Static files
        .nest_service("/static", ServeDir::new(static_dir))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the dashboard with both feeds running until Ctrl-C.
pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();

    let theme =
        ThemeToggle::load(config.preferences.open_store()).map_err(std::io::Error::other)?;
    log::info!("Display theme is {}", theme.theme());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    let board = Arc::new(Board::new());
    let feeds = Feeds::start(&config.feeds, Arc::new(SystemClock), board.clone());

    let state = AppState::new(config, board, theme);
    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    feeds.shutdown().await;
    served
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
