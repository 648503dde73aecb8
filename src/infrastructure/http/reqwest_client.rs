// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::client::{HttpClient, HttpResponse, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;
use url::Url;

/// 基于 reqwest 的 HTTP 客户端
///
/// 不设置请求超时：请求在服务端响应或连接失败前一直等待
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_user_agent(None)
    }

    /// 使用可选的 User-Agent 创建客户端
    pub fn with_user_agent(user_agent: Option<&str>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        // Error bodies are never inspected, so don't wait on them.
        let body = if status.is_success() {
            response.bytes().await?
        } else {
            Bytes::new()
        };

        debug!(status = status.as_u16(), bytes = body.len(), "Search API responded");

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}
