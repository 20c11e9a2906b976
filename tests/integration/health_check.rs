// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{app, body_string, StaticFetcher};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::util::ServiceExt;

/// 健康检查测试
#[tokio::test]
async fn health_check_works() {
    let response = app(StaticFetcher::default())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response.into_body()).await, "OK");
}

#[tokio::test]
async fn version_reports_crate_version() {
    let response = app(StaticFetcher::default())
        .oneshot(
            Request::builder()
                .uri("/v1/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response.into_body()).await,
        env!("CARGO_PKG_VERSION")
    );
}
