// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::extractors::{emit, join_tasks, Extractor, ResultSender};
use crate::domain::models::extracted_result::ExtractedResult;
use crate::utils::errors::ExtractionError;
use async_trait::async_trait;
use regex::Regex;
use std::sync::Arc;
use tokio::task::JoinSet;

/// 提及必须位于消息开头或空白之后，名称只由 ASCII 单词字符组成
const MENTION_PATTERN: &str = r"(?:^|(?-u:\s))@(?-u:\w)+";

/// @提及提取器
pub struct MentionExtractor {
    pattern: Regex,
}

impl MentionExtractor {
    pub fn new() -> Result<Self, ExtractionError> {
        let pattern = Regex::new(MENTION_PATTERN).map_err(|source| ExtractionError::Pattern {
            extractor: "mentions",
            source,
        })?;
        Ok(Self { pattern })
    }
}

/// 去掉前导空白和 `@`，返回提及名称
pub fn normalize_mention(raw: &str) -> Option<String> {
    let name = raw.trim_start().strip_prefix('@')?.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[async_trait]
impl Extractor for MentionExtractor {
    async fn extract(&self, message: Arc<str>, sink: ResultSender) -> Result<(), ExtractionError> {
        let mut tasks = JoinSet::new();

        for found in self.pattern.find_iter(&message) {
            let raw = found.as_str().to_string();
            let sink = sink.clone();
            tasks.spawn(async move {
                if let Some(name) = normalize_mention(&raw) {
                    emit(&sink, ExtractedResult::Mention { name });
                }
            });
        }

        join_tasks(tasks, self.name()).await
    }

    fn name(&self) -> &'static str {
        "mentions"
    }
}
