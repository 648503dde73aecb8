// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理搜索 API 端点、静态标识参数和控制器选项的配置
pub mod settings;
