// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 消息实体提取器模块
///
/// 每个提取器对消息执行一次匹配，并为每个匹配项派生一个任务，
/// 结果写入共享的结果通道
pub mod emoticon_extractor;
pub mod mention_extractor;
pub mod url_extractor;

use crate::domain::models::extracted_result::ExtractedResult;
use crate::utils::errors::ExtractionError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::debug;

/// 结果通道的发送端
pub type ResultSender = mpsc::UnboundedSender<ExtractedResult>;

/// 提取器特质
#[async_trait]
pub trait Extractor: Send + Sync {
    /// 从消息中提取结果并写入 `sink`
    ///
    /// 只有在自身派生的所有子任务结束后才返回
    async fn extract(&self, message: Arc<str>, sink: ResultSender) -> Result<(), ExtractionError>;

    /// 提取器名称
    fn name(&self) -> &'static str;
}

/// 发送一条结果，接收端已关闭时丢弃
pub(crate) fn emit(sink: &ResultSender, result: ExtractedResult) {
    if let Err(e) = sink.send(result) {
        debug!("result channel closed, dropping {:?}", e.0.category());
    }
}

/// 等待所有子任务结束
///
/// 子任务 panic 时立即返回错误，其余子任务随 `JoinSet` 一起被中止
pub(crate) async fn join_tasks(
    mut tasks: JoinSet<()>,
    extractor: &'static str,
) -> Result<(), ExtractionError> {
    while let Some(joined) = tasks.join_next().await {
        joined.map_err(|source| ExtractionError::TaskFailed { extractor, source })?;
    }
    Ok(())
}
