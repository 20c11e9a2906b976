// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 提取流水线错误类型
///
/// 只表示流水线本身的故障；单条结果的失败不会产生这些错误
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("invalid pattern for {extractor}: {source}")]
    Pattern {
        extractor: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("{extractor} task failed: {source}")]
    TaskFailed {
        extractor: &'static str,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("aggregator failed: {0}")]
    Aggregator(#[source] tokio::task::JoinError),
}
