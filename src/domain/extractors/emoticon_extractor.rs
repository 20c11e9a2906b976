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

const EMOTICON_PATTERN: &str = r"\((?-u:\w)+\)";

/// 表情文本的固定长度（字符数）
pub const EMOTICON_LENGTH: usize = 15;

/// 表情提取器
///
/// 匹配 `(word)` 形式的文本，只保留括号内恰好 15 个字符的表情
pub struct EmoticonExtractor {
    pattern: Regex,
}

impl EmoticonExtractor {
    pub fn new() -> Result<Self, ExtractionError> {
        let pattern = Regex::new(EMOTICON_PATTERN).map_err(|source| ExtractionError::Pattern {
            extractor: "emoticons",
            source,
        })?;
        Ok(Self { pattern })
    }
}

/// 去掉括号并按长度过滤
pub fn accept_emoticon(raw: &str) -> Option<String> {
    let token = raw.strip_prefix('(')?.strip_suffix(')')?;
    (token.chars().count() == EMOTICON_LENGTH).then(|| token.to_string())
}

#[async_trait]
impl Extractor for EmoticonExtractor {
    async fn extract(&self, message: Arc<str>, sink: ResultSender) -> Result<(), ExtractionError> {
        let mut tasks = JoinSet::new();

        for found in self.pattern.find_iter(&message) {
            let raw = found.as_str().to_string();
            let sink = sink.clone();
            tasks.spawn(async move {
                if let Some(token) = accept_emoticon(&raw) {
                    emit(&sink, ExtractedResult::Emoticon { token });
                }
            });
        }

        join_tasks(tasks, self.name()).await
    }

    fn name(&self) -> &'static str {
        "emoticons"
    }
}
