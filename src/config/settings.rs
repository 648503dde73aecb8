// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::api::SearchApiConfig;
use crate::domain::services::search_controller::{ControllerOptions, StalePolicy};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 搜索 API 配置
    pub search: SearchSettings,
}

/// 搜索 API 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// 搜索端点 URL
    pub endpoint: String,
    /// API 访问密钥 (`key` 参数)
    pub api_key: String,
    /// 搜索引擎上下文 ID (`cx` 参数)
    pub cx: String,
    /// 防抖时长（毫秒），0 表示关闭
    pub debounce_ms: u64,
    /// 重叠请求的结果处理策略
    pub stale_policy: StalePolicy,
    /// 可选的 User-Agent
    pub user_agent: Option<String>,
}

/// 配置转换错误
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid search endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 环境由 `APP_ENVIRONMENT` 决定，默认为 `default`
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::load(&env)
    }

    /// 按指定环境加载配置
    ///
    /// 优先级：内置默认值 < `config/default` < `config/{env}` < `SEARCHBOX__*` 环境变量
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("search.endpoint", DEFAULT_SEARCH_ENDPOINT)?
            .set_default("search.api_key", "")?
            .set_default("search.cx", "")?
            .set_default("search.debounce_ms", 0)?
            .set_default("search.stale_policy", "last_resolved_wins")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SEARCHBOX").separator("__"));

        builder.build()?.try_deserialize()
    }
}

impl SearchSettings {
    /// Whether both static identifiers are present.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.cx.trim().is_empty()
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            debounce: Duration::from_millis(self.debounce_ms),
            stale_policy: self.stale_policy,
        }
    }
}

impl TryFrom<&SearchSettings> for SearchApiConfig {
    type Error = SettingsError;

    fn try_from(settings: &SearchSettings) -> Result<Self, Self::Error> {
        let endpoint =
            Url::parse(&settings.endpoint).map_err(|source| SettingsError::InvalidEndpoint {
                endpoint: settings.endpoint.clone(),
                source,
            })?;

        Ok(SearchApiConfig::new(
            endpoint,
            settings.api_key.clone(),
            settings.cx.clone(),
        ))
    }
}
