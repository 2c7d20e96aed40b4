//! Routes serving the deployment smoke-test page.
use crate::services::display::ConfigDisplay;
use axum::{extract::Json, response::Html, routing::get, Router};
use serde::Serialize;
use tracing::debug;

/// Create a router for the smoke-test routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(page))
        .route("/config", get(config))
        .route("/healthz", get(healthz))
}

/// Serve the rendered configuration page.
async fn page() -> Html<String> {
    debug!("configuration page requested");
    Html(ConfigDisplay::from_ambient().render())
}

#[derive(Serialize)]
/// The response model for /config.
struct ConfigResponse {
    /// The deployment environment name, `null` when unset.
    environment: Option<String>,
    /// The backend API base URL, `null` when unset.
    api_base_url: Option<String>,
}

impl From<ConfigDisplay> for ConfigResponse {
    fn from(display: ConfigDisplay) -> Self {
        Self {
            environment: display.environment_name().map(str::to_owned),
            api_base_url: display.api_base_url().map(str::to_owned),
        }
    }
}

/// Mirror the ambient configuration values as JSON.
async fn config() -> Json<ConfigResponse> {
    debug!("configuration snapshot requested");
    Json(ConfigResponse::from(ConfigDisplay::from_ambient()))
}

/// Simply returns a happy message :)
async fn healthz() -> Json<String> {
    Json("RECSDI UI service is running!".to_owned())
}
