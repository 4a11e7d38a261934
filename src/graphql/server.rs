use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tokio::net::TcpListener;

use super::HolocronSchema;
use crate::config::ServerSettings;

fn router(schema: HolocronSchema, settings: &ServerSettings) -> Router {
    let endpoint = settings.endpoint();
    let service = GraphQL::new(schema);

    let route = if settings.graphiql {
        let page = GraphiQLSource::build().endpoint(&endpoint).finish();
        get(move || async move { Html(page) }).post_service(service)
    } else {
        axum::routing::post_service(service)
    };

    Router::new().route(&endpoint, route)
}

/// Serves the schema over HTTP until Ctrl-C.
pub async fn run_server(schema: HolocronSchema, settings: &ServerSettings) -> std::io::Result<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, endpoint = %settings.endpoint(), "GraphQL server listening");

    axum::serve(listener, router(schema, settings))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
