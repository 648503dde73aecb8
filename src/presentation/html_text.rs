// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<br\s*/?>"#).expect("line break pattern is valid"));
static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)<[^>]+>"#).expect("tag pattern is valid"));
static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s+"#).expect("whitespace pattern is valid"));

/// 将 API 返回的 HTML 片段渲染为纯文本
///
/// 去掉标签（`<br>` 视为空格）、解码实体并规范化空白字符。
/// 输出只用于终端显示，不会再被当作 HTML 解释。
pub fn html_to_text(html: &str) -> String {
    let text = LINE_BREAK_REGEX.replace_all(html, " ");
    let text = TAG_REGEX.replace_all(&text, "");
    let text = html_escape::decode_html_entities(&text);
    WHITESPACE_REGEX.replace_all(&text, " ").trim().to_string()
}
