// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理搜索 API 的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含搜索结果模型、搜索请求、失败类型和搜索生命周期控制器
pub mod domain;

/// 基础设施模块
///
/// 提供外部服务集成，目前为基于 reqwest 的 HTTP 客户端
pub mod infrastructure;

/// 表示层模块
///
/// 搜索框视图：草稿输入、提交触发和状态渲染
pub mod presentation;

/// 工具模块
///
/// 提供日志初始化等通用功能
pub mod utils;
