// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::models::outcome::Outcome;

pub const TIMEOUT_BODY: &str = "Timed out";

/// 将请求结果映射为 HTTP 响应
///
/// 服务器错误只返回通用信息，不暴露内部细节
impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Success(results) => (StatusCode::OK, Json(results)).into_response(),
            Outcome::ClientError { reason } => {
                (StatusCode::BAD_REQUEST, Json(reason)).into_response()
            }
            Outcome::Timeout => (StatusCode::REQUEST_TIMEOUT, TIMEOUT_BODY).into_response(),
            Outcome::ServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Server Error" })),
            )
                .into_response(),
        }
    }
}
