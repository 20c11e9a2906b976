// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html};

/// 提取页面标题
///
/// 按先序深度优先顺序查找第一个 `title` 元素并返回其文本，
/// 找不到时返回 `None`
pub fn extract_title(document: &Html) -> Option<String> {
    document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "title")
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// 解析 HTML 正文并提取标题，没有标题时返回空字符串
pub fn title_from_html(html: &str) -> String {
    let document = Html::parse_document(html);
    extract_title(&document).unwrap_or_default()
}
