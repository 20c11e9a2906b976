// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::extractors::{emit, join_tasks, Extractor, ResultSender};
use crate::domain::models::extracted_result::{ExtractedResult, UrlInfo};
use crate::engines::traits::{FetchError, PageFetcher};
use crate::utils::errors::ExtractionError;
use crate::utils::title::title_from_html;
use async_trait::async_trait;
use regex::Regex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::debug;

/// http(s)://, host/path characters, optional query, then whitespace or end of text.
const URL_PATTERN: &str = r"https*://(?-u:\w)+(?-u:[\w\-/.])+(?:[?&]+.*)*(?:(?-u:\s)|\z)";

/// 链接提取器
///
/// 每个匹配到的链接派生一个抓取任务，抓取失败的链接直接从结果中省略
pub struct UrlExtractor {
    pattern: Regex,
    fetcher: Arc<dyn PageFetcher>,
    fetch_timeout: Duration,
}

impl UrlExtractor {
    /// 创建链接提取器
    ///
    /// # 参数
    ///
    /// * `fetcher` - 页面抓取引擎
    /// * `fetch_timeout` - 单个链接的抓取超时
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        fetch_timeout: Duration,
    ) -> Result<Self, ExtractionError> {
        let pattern = Regex::new(URL_PATTERN).map_err(|source| ExtractionError::Pattern {
            extractor: "urls",
            source,
        })?;
        Ok(Self {
            pattern,
            fetcher,
            fetch_timeout,
        })
    }

    /// 返回消息中所有匹配的链接（已去除首尾空白）
    pub fn find_urls(&self, message: &str) -> Vec<String> {
        self.pattern
            .find_iter(message)
            .map(|m| m.as_str().trim().to_string())
            .collect()
    }
}

/// 抓取单个链接并提取标题
///
/// 任何失败都返回 `None`
pub async fn fetch_url_info(
    fetcher: &dyn PageFetcher,
    url: String,
    timeout: Duration,
) -> Option<UrlInfo> {
    let fetched = tokio::time::timeout(timeout, fetcher.fetch(&url))
        .await
        .unwrap_or_else(|_| Err(FetchError::Timeout));
    let body = match fetched {
        Ok(body) => body,
        Err(e) => {
            debug!(
                url = %url,
                engine = fetcher.name(),
                timed_out = e.is_timeout(),
                "fetch failed: {}",
                e
            );
            return None;
        }
    };

    let title = title_from_html(&body);
    Some(UrlInfo { url, title })
}

#[async_trait]
impl Extractor for UrlExtractor {
    async fn extract(&self, message: Arc<str>, sink: ResultSender) -> Result<(), ExtractionError> {
        let mut tasks = JoinSet::new();

        for url in self.find_urls(&message) {
            let fetcher = self.fetcher.clone();
            let timeout = self.fetch_timeout;
            let sink = sink.clone();
            tasks.spawn(async move {
                if let Some(info) = fetch_url_info(fetcher.as_ref(), url, timeout).await {
                    emit(&sink, ExtractedResult::Url(info));
                }
            });
        }

        join_tasks(tasks, self.name()).await
    }

    fn name(&self) -> &'static str {
        "urls"
    }
}

#[cfg(test)]
#[path = "url_extractor_test.rs"]
mod tests;
