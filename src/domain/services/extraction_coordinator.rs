// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::extractors::emoticon_extractor::EmoticonExtractor;
use crate::domain::extractors::mention_extractor::MentionExtractor;
use crate::domain::extractors::url_extractor::UrlExtractor;
use crate::domain::extractors::Extractor;
use crate::domain::models::extracted_result::ResultSet;
use crate::domain::services::aggregator::aggregate;
use crate::engines::traits::PageFetcher;
use crate::utils::errors::ExtractionError;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error};

/// 提取协调器
///
/// 对同一条消息并发运行所有提取器，并把结果汇总为一个结果集
pub struct ExtractionCoordinator {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractionCoordinator {
    pub fn new(extractors: Vec<Arc<dyn Extractor>>) -> Self {
        Self { extractors }
    }

    /// 使用提及、表情和链接三个默认提取器创建协调器
    ///
    /// # 参数
    ///
    /// * `fetcher` - 链接提取器使用的抓取引擎
    /// * `fetch_timeout` - 单个链接的抓取超时
    pub fn with_default_extractors(
        fetcher: Arc<dyn PageFetcher>,
        fetch_timeout: Duration,
    ) -> Result<Self, ExtractionError> {
        let extractors: Vec<Arc<dyn Extractor>> = vec![
            Arc::new(MentionExtractor::new()?),
            Arc::new(EmoticonExtractor::new()?),
            Arc::new(UrlExtractor::new(fetcher, fetch_timeout)?),
        ];
        Ok(Self::new(extractors))
    }

    pub fn extractor_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// 运行提取流水线
    ///
    /// 每个提取器在独立任务中运行，并在返回前等待自己派生的子任务。
    /// 结果通道在最后一个发送端释放后关闭，此时汇总任务才会结束。
    pub async fn run(&self, message: Arc<str>) -> Result<ResultSet, ExtractionError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let aggregator = tokio::spawn(aggregate(rx));

        let producers: Vec<_> = self
            .extractors
            .iter()
            .map(|extractor| {
                let extractor = extractor.clone();
                let message = message.clone();
                let sink = tx.clone();
                let name = extractor.name();
                (
                    name,
                    tokio::spawn(async move { extractor.extract(message, sink).await }),
                )
            })
            .collect();

        // Only producers may hold senders from here on.
        drop(tx);

        let (names, handles): (Vec<_>, Vec<_>) = producers.into_iter().unzip();
        let mut failure = None;
        for (extractor, joined) in names.into_iter().zip(join_all(handles).await) {
            let result = match joined {
                Ok(result) => result,
                Err(source) => Err(ExtractionError::TaskFailed { extractor, source }),
            };
            if let Err(e) = result {
                error!("extractor {} failed: {}", extractor, e);
                failure.get_or_insert(e);
            }
        }

        let results = aggregator.await.map_err(ExtractionError::Aggregator)?;
        if let Some(e) = failure {
            return Err(e);
        }

        debug!(
            results = results.len(),
            categories = ?results.categories().map(|c| c.as_str()).collect::<Vec<_>>(),
            "message extracted"
        );
        Ok(results)
    }
}

#[cfg(test)]
#[path = "extraction_coordinator_test.rs"]
mod tests;
