// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::rejection::FormRejection, Extension, Form};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::domain::models::outcome::Outcome;
use crate::domain::services::request_supervisor::RequestSupervisor;

/// 消息表单
#[derive(Debug, Deserialize)]
pub struct MessageForm {
    /// 要解析的消息文本
    pub message: Option<String>,
}

/// 解析消息中的提及、表情和链接
///
/// 缺少 `message` 字段或表单无法解析时按空消息处理
pub async fn get_info(
    Extension(supervisor): Extension<Arc<RequestSupervisor>>,
    form: Result<Form<MessageForm>, FormRejection>,
) -> Outcome {
    let message = match form {
        Ok(Form(form)) => form.message.unwrap_or_default(),
        Err(rejection) => {
            debug!("rejected message form: {}", rejection);
            String::new()
        }
    };

    supervisor.handle(&message).await
}
