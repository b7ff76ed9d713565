//! One-line request log: `METHOD path - ip`.

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

/// Logs each incoming request before passing it on.
///
/// The peer address comes from [`ConnectInfo`]; requests without it (tests,
/// in-process clients) are logged with `-`.
pub async fn layer(req: Request, next: Next) -> Response {
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info!("{} {} - {}", req.method(), req.uri().path(), ip);

    next.run(req).await
}
