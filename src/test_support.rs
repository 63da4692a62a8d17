//! In-process HTTP backends for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use tokio::net::TcpListener;
use url::Url;

/// Serve `body` with `status` for every request on an ephemeral port.
pub async fn spawn_backend(status: u16, body: &'static str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind backend");
    let addr = listener.local_addr().expect("backend addr");
    let status = StatusCode::from_u16(status).expect("valid status");

    let app = Router::new().fallback(move || async move {
        (
            status,
            [("content-type", "application/json")],
            body,
        )
    });
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Url::parse(&format!("http://{addr}/users")).expect("backend url")
}

/// Like `spawn_backend` with status 200, except the first request never gets
/// a response. Returns the number of requests received so far.
pub async fn spawn_stalling_backend(body: &'static str) -> (Url, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind backend");
    let addr = listener.local_addr().expect("backend addr");
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = hits.clone();
    let app = Router::new().fallback(move || {
        let counter = counter.clone();
        async move {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                std::future::pending::<()>().await;
            }
            ([("content-type", "application/json")], body)
        }
    });
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let url = Url::parse(&format!("http://{addr}/users")).expect("backend url");
    (url, hits)
}

/// An endpoint on a port nothing is listening on.
pub async fn unreachable_endpoint() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind unused port");
    let addr = listener.local_addr().expect("unused port addr");
    drop(listener);
    Url::parse(&format!("http://{addr}/users")).expect("unreachable url")
}
