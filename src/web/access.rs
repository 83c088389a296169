use crate::logger::ACCESS_TARGET;
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// One access line per request: method, path, status, elapsed ms.
pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();
    let resp = next.run(req).await;
    log::info!(
        target: ACCESS_TARGET,
        "{method} {path} {} {}ms",
        resp.status().as_u16(),
        start.elapsed().as_millis()
    );
    resp
}
