// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use msginfo::config::settings::Settings;
use msginfo::domain::services::extraction_coordinator::ExtractionCoordinator;
use msginfo::domain::services::request_supervisor::RequestSupervisor;
use msginfo::engines::reqwest_engine::ReqwestFetcher;
use msginfo::infrastructure::metrics::init_metrics;
use msginfo::presentation::routes;
use msginfo::utils::telemetry;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting msginfo...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(
        fetch_timeout_ms = settings.extraction.fetch_timeout_ms,
        request_timeout_ms = settings.extraction.request_timeout_ms,
        "Configuration loaded"
    );

    if settings.metrics.enabled {
        init_metrics(SocketAddr::from(([0, 0, 0, 0], settings.metrics.port)));
    }

    // 3. Build the extraction pipeline
    let fetcher = Arc::new(ReqwestFetcher::from_settings(&settings.extraction)?);
    let coordinator = ExtractionCoordinator::with_default_extractors(
        fetcher,
        settings.extraction.fetch_timeout(),
    )?;
    let supervisor = Arc::new(RequestSupervisor::new(
        Arc::new(coordinator),
        settings.extraction.request_timeout(),
    ));

    // 4. Start HTTP server
    let app = routes::routes(supervisor);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Unable to listen for shutdown signal: {}", e),
    }
}
