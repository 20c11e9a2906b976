// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use msginfo::domain::extractors::url_extractor::fetch_url_info;
use msginfo::engines::reqwest_engine::ReqwestFetcher;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new(Duration::from_secs(3), "msginfo-test").unwrap()
}

/// 抓取真实 HTTP 页面并解析标题
#[tokio::test]
async fn fetches_and_parses_title_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<html><head><title>Breaking</title></head></html>"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/article", server.uri());
    let info = fetch_url_info(&fetcher(), url.clone(), Duration::from_secs(3))
        .await
        .expect("page should be fetched");

    assert_eq!(info.url, url);
    assert_eq!(info.title, "Breaking");
}

#[tokio::test]
async fn page_without_title_yields_empty_title() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
        .mount(&server)
        .await;

    let info = fetch_url_info(&fetcher(), server.uri(), Duration::from_secs(3))
        .await
        .expect("page should be fetched");
    assert_eq!(info.title, "");
}

#[tokio::test]
async fn slow_page_is_dropped_after_fetch_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<title>late</title>")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let started = std::time::Instant::now();
    let info = fetch_url_info(&fetcher(), server.uri(), Duration::from_millis(200)).await;

    assert!(info.is_none());
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn connection_refused_is_dropped() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    assert!(fetch_url_info(&fetcher(), uri, Duration::from_secs(3))
        .await
        .is_none());
}
