// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含提取结果模型、提取器以及流水线服务
pub mod domain;

/// 引擎模块
///
/// 实现页面抓取引擎
pub mod engines;

/// 基础设施模块
///
/// 提供指标导出等外部集成
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由和处理器
pub mod presentation;

/// 工具模块
///
/// 提供错误类型、日志初始化和标题解析等辅助功能
pub mod utils;
