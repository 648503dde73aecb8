// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 交互式命令解析
pub mod command;
/// HTML 片段转纯文本
pub mod html_text;
/// 搜索框视图
pub mod search_view;
