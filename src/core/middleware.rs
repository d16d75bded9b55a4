//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// 慢请求阈值
const SLOW_REQUEST: Duration = Duration::from_secs(1);

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    if duration >= SLOW_REQUEST {
        warn!(
            "慢请求 {} {} - {} - {}ms",
            method,
            uri,
            status,
            duration.as_millis()
        );
    } else {
        info!("{} {} - {} - {}ms", method, uri, status, duration.as_millis());
    }

    response
}
