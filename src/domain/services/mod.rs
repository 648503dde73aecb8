// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索控制器，管理请求/响应生命周期
pub mod search_controller;
