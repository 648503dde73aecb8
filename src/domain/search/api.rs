// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::request::SearchRequest;
use url::Url;

/// 搜索 API 端点及其静态标识参数
///
/// `api_key` 与 `cx` 在部署时确定，随每个请求原样发送
#[derive(Clone)]
pub struct SearchApiConfig {
    endpoint: Url,
    api_key: String,
    cx: String,
}

impl SearchApiConfig {
    pub fn new(endpoint: Url, api_key: impl Into<String>, cx: impl Into<String>) -> Self {
        Self {
            endpoint,
            api_key: api_key.into(),
            cx: cx.into(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// 构建请求 URL：`<endpoint>?key=<key>&cx=<cx>&q=<query>`
    ///
    /// 端点自带的查询串会被替换
    pub fn request_url(&self, request: &SearchRequest) -> Url {
        let query_string = [
            ("key", self.api_key.as_str()),
            ("cx", self.cx.as_str()),
            ("q", request.query()),
        ]
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

        let mut url = self.endpoint.clone();
        url.set_query(Some(&query_string));
        url
    }
}

// The key is a credential; keep it out of logs.
impl std::fmt::Debug for SearchApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchApiConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"[REDACTED]")
            .field("cx", &self.cx)
            .finish()
    }
}
