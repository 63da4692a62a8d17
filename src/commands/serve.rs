use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::client::UsersClient;
use crate::error::Result;
use crate::orchestrator::Orchestrator;
use crate::page::Page;

pub async fn serve(client: Arc<UsersClient>, addr: SocketAddr) -> Result<()> {
    let app = build_router(client);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "serving user directory");
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(client: Arc<UsersClient>) -> Router {
    Router::new()
        .route("/", get(user_page))
        .route("/healthz", get(healthz))
        .with_state(client)
}

/// Every page load is its own pipeline run, so a stalled upstream request
/// only holds up the page that made it. A failed fetch still yields the
/// page, with the error region visible.
async fn user_page(State(client): State<Arc<UsersClient>>) -> (StatusCode, Html<String>) {
    let mut page = Page::new();
    let state = Orchestrator::new(client).run(&mut page).await;
    let status = if state.is_error() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    (status, Html(page.into_document()))
}

async fn healthz() -> &'static str {
    "ok"
}
