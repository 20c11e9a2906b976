// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::extracted_result::ResultSet;

/// 空消息的错误原因
pub const EMPTY_MESSAGE_REASON: &str = "Empty Body in the Request";

/// 单次请求的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 流水线在截止时间内完成
    Success(ResultSet),
    /// 请求本身无效，流水线未启动
    ClientError { reason: String },
    /// 超过请求截止时间
    Timeout,
    /// 流水线内部错误
    ServerError,
}

impl Outcome {
    /// 用于日志和指标的标签
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::ClientError { .. } => "client_error",
            Outcome::Timeout => "timeout",
            Outcome::ServerError => "server_error",
        }
    }

    /// 成功时返回结果集
    pub fn results(&self) -> Option<&ResultSet> {
        match self {
            Outcome::Success(results) => Some(results),
            _ => None,
        }
    }
}
