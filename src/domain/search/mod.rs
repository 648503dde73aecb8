// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义搜索请求、API 端点、HTTP 客户端接口、失败类型和生命周期状态
pub mod api;
pub mod client;
pub mod error;
pub mod outcome;
pub mod request;
