mod constants;
mod routes;
mod services;

use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();
    let app = axum::Router::new().merge(routes::status::create_router());
    let listener = tokio::net::TcpListener::bind(constants::api::BIND_ADDR.as_str())
        .await
        .expect("Failed to bind listener");
    info!(
        address = %*constants::api::BIND_ADDR,
        environment = constants::deployment::ENVIRONMENT_NAME.as_deref().unwrap_or(""),
        "RECSDI UI service listening"
    );
    axum::serve(listener, app)
        .await
        .expect("Failed to init Axum service");
}
