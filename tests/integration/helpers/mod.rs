// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use msginfo::domain::services::extraction_coordinator::ExtractionCoordinator;
use msginfo::domain::services::request_supervisor::RequestSupervisor;
use msginfo::engines::traits::{FetchError, PageFetcher};
use msginfo::presentation::routes;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Serves canned pages; any other url fails. Optionally sleeps before answering.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    delay: Option<Duration>,
}

impl StaticFetcher {
    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Other(format!("no page for {}", url)))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

pub fn app_with(
    fetcher: StaticFetcher,
    fetch_timeout: Duration,
    request_timeout: Duration,
) -> Router {
    let coordinator =
        ExtractionCoordinator::with_default_extractors(Arc::new(fetcher), fetch_timeout).unwrap();
    let supervisor = RequestSupervisor::new(Arc::new(coordinator), request_timeout);
    routes::routes(Arc::new(supervisor))
}

pub fn app(fetcher: StaticFetcher) -> Router {
    app_with(fetcher, Duration::from_secs(3), Duration::from_secs(5))
}

pub fn form_request(body: &str) -> Request<Body> {
    Request::builder()
        .uri("/v1/getInfo")
        .method("POST")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
