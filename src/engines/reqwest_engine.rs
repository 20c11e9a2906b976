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

use crate::config::settings::ExtractionSettings;
use crate::engines::traits::{FetchError, PageFetcher};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::debug;

/// 抓取引擎
///
/// 基于reqwest实现的页面抓取引擎，所有请求共享同一个连接池
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// 创建抓取引擎
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次请求的超时时间
    /// * `user_agent` - 请求使用的 User-Agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// 根据提取配置创建抓取引擎
    pub fn from_settings(settings: &ExtractionSettings) -> Result<Self, FetchError> {
        Self::new(settings.fetch_timeout(), &settings.user_agent)
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    /// 执行HTTP抓取
    ///
    /// 不检查状态码，错误页面的正文同样返回
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let status_code = response.status().as_u16();
        let content = response.text().await?;

        debug!(
            url,
            status_code,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "page fetched"
        );

        Ok(content)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
