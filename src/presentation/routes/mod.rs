// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::request_supervisor::RequestSupervisor;
use crate::presentation::handlers::message_handler;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `supervisor` - 处理消息的请求监督器
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(supervisor: Arc<RequestSupervisor>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let message_routes = Router::new()
        .route("/v1/getInfo", post(message_handler::get_info))
        .layer(Extension(supervisor));

    Router::new()
        .merge(public_routes)
        .merge(message_routes)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
