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

use async_trait::async_trait;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

impl FetchError {
    /// 判断错误是否由超时引起
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::RequestFailed(e) => e.is_timeout(),
            FetchError::Timeout => true,
            FetchError::Other(_) => false,
        }
    }
}

/// 页面抓取特质
///
/// 对给定链接执行一次 GET 请求并返回响应正文
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取页面正文
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
