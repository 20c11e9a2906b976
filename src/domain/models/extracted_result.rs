// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// 结果类别
///
/// 序列化后作为响应 JSON 的键名
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// @提及
    Mentions,
    /// 表情
    Emoticons,
    /// 链接
    Urls,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mentions => "mentions",
            Category::Emoticons => "emoticons",
            Category::Urls => "urls",
        }
    }
}

/// 链接信息
///
/// 消息中的链接及其页面标题
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlInfo {
    /// 去除首尾空白后的链接
    pub url: String,
    /// 页面标题，页面没有标题时为空字符串
    pub title: String,
}

/// 单条提取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedResult {
    /// 不含 `@` 的提及名称
    Mention { name: String },
    /// 括号内的表情文本
    Emoticon { token: String },
    /// 链接及标题
    Url(UrlInfo),
}

impl ExtractedResult {
    /// 获取结果所属类别
    pub fn category(&self) -> Category {
        match self {
            ExtractedResult::Mention { .. } => Category::Mentions,
            ExtractedResult::Emoticon { .. } => Category::Emoticons,
            ExtractedResult::Url(_) => Category::Urls,
        }
    }
}

// Mentions and emoticons go out as bare strings, urls as objects.
impl Serialize for ExtractedResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ExtractedResult::Mention { name } => serializer.serialize_str(name),
            ExtractedResult::Emoticon { token } => serializer.serialize_str(token),
            ExtractedResult::Url(info) => info.serialize(serializer),
        }
    }
}

/// 聚合结果集
///
/// 类别到结果列表的映射。列表按生产任务的完成顺序排列；
/// 某个类别只有在至少有一条结果时才会出现。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    entries: BTreeMap<Category, Vec<ExtractedResult>>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条结果，首次出现的类别会新建列表
    pub fn push(&mut self, result: ExtractedResult) {
        self.entries
            .entry(result.category())
            .or_default()
            .push(result);
    }

    pub fn get(&self, category: Category) -> Option<&[ExtractedResult]> {
        self.entries.get(&category).map(Vec::as_slice)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.entries.contains_key(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 结果总数
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.keys().copied()
    }

    /// 提及名称列表
    pub fn mentions(&self) -> Vec<&str> {
        self.iter_category(Category::Mentions)
            .filter_map(|r| match r {
                ExtractedResult::Mention { name } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// 表情文本列表
    pub fn emoticons(&self) -> Vec<&str> {
        self.iter_category(Category::Emoticons)
            .filter_map(|r| match r {
                ExtractedResult::Emoticon { token } => Some(token.as_str()),
                _ => None,
            })
            .collect()
    }

    /// 链接信息列表
    pub fn urls(&self) -> Vec<&UrlInfo> {
        self.iter_category(Category::Urls)
            .filter_map(|r| match r {
                ExtractedResult::Url(info) => Some(info),
                _ => None,
            })
            .collect()
    }

    fn iter_category(&self, category: Category) -> impl Iterator<Item = &ExtractedResult> {
        self.entries.get(&category).into_iter().flatten()
    }
}

impl FromIterator<ExtractedResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ExtractedResult>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        for result in iter {
            set.push(result);
        }
        set
    }
}
