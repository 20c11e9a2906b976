// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::extracted_result::{ExtractedResult, ResultSet};
use tokio::sync::mpsc::UnboundedReceiver;

/// 汇总结果通道中的所有结果
///
/// 只在通道关闭（所有发送端都已释放）后返回
pub async fn aggregate(mut results: UnboundedReceiver<ExtractedResult>) -> ResultSet {
    let mut set = ResultSet::new();
    while let Some(result) = results.recv().await {
        set.push(result);
    }
    set
}
