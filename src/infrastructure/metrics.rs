// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::outcome::Outcome;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

pub const REQUESTS_TOTAL: &str = "msginfo_requests_total";
pub const PIPELINE_DURATION: &str = "msginfo_pipeline_duration_seconds";

/// 初始化指标系统
///
/// 启动 Prometheus 导出器并注册指标说明
pub fn init_metrics(addr: SocketAddr) {
    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}", e);
        return;
    }

    describe_counter!(REQUESTS_TOTAL, "Total number of processed messages by outcome");
    describe_histogram!(
        PIPELINE_DURATION,
        "Time from accepting a message to producing its outcome"
    );

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次请求结果
pub fn record_outcome(outcome: &Outcome, elapsed: Duration) {
    counter!(REQUESTS_TOTAL, "outcome" => outcome.label()).increment(1);
    histogram!(PIPELINE_DURATION, "outcome" => outcome.label()).record(elapsed.as_secs_f64());
}
