// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

/// 传输层错误类型
#[derive(Error, Debug)]
pub enum TransportError {
    /// 请求失败（连接、DNS、TLS、读取响应体等）
    #[error(transparent)]
    RequestFailed(#[from] reqwest::Error),
    /// 其他错误
    #[error("{0}")]
    Other(String),
}

/// HTTP 响应
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP状态码
    pub status: u16,
    /// 响应体；非 2xx 响应不保证携带
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The one capability the search lifecycle needs from the outside world.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a plain GET: no custom headers, no body.
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        (**self).get(url).await
    }
}
