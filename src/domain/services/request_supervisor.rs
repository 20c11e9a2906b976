// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::outcome::{Outcome, EMPTY_MESSAGE_REASON};
use crate::domain::services::extraction_coordinator::ExtractionCoordinator;
use crate::infrastructure::metrics::record_outcome;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// 请求监督器
///
/// 为每条消息启动一次提取流水线，并用请求截止时间约束它
pub struct RequestSupervisor {
    coordinator: Arc<ExtractionCoordinator>,
    request_timeout: Duration,
}

impl RequestSupervisor {
    pub fn new(coordinator: Arc<ExtractionCoordinator>, request_timeout: Duration) -> Self {
        Self {
            coordinator,
            request_timeout,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// 处理一条消息
    ///
    /// 空消息直接返回 `ClientError`，不会启动流水线。
    /// 超过截止时间时立即返回 `Timeout`；流水线任务不会被中止，
    /// 它会自行运行结束，结果被丢弃。
    pub async fn handle(&self, message: &str) -> Outcome {
        let started = Instant::now();
        let outcome = self.supervise(message).await;

        info!(
            outcome = outcome.label(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "message processed"
        );
        record_outcome(&outcome, started.elapsed());
        outcome
    }

    async fn supervise(&self, message: &str) -> Outcome {
        if message.is_empty() {
            return Outcome::ClientError {
                reason: EMPTY_MESSAGE_REASON.to_string(),
            };
        }

        let coordinator = self.coordinator.clone();
        let message: Arc<str> = Arc::from(message);
        let pipeline = tokio::spawn(async move { coordinator.run(message).await });

        match tokio::time::timeout(self.request_timeout, pipeline).await {
            Ok(Ok(Ok(results))) => Outcome::Success(results),
            Ok(Ok(Err(e))) => {
                error!("extraction pipeline failed: {}", e);
                Outcome::ServerError
            }
            Ok(Err(e)) => {
                error!("extraction pipeline task failed: {}", e);
                Outcome::ServerError
            }
            Err(_) => {
                // Dropping the JoinHandle detaches the pipeline.
                warn!(
                    "extraction exceeded {:?}, abandoning in-flight results",
                    self.request_timeout
                );
                Outcome::Timeout
            }
        }
    }
}

#[cfg(test)]
#[path = "request_supervisor_test.rs"]
mod tests;
