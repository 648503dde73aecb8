// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::{SearchData, SearchResponse};
use crate::domain::search::api::SearchApiConfig;
use crate::domain::search::client::HttpClient;
use crate::domain::search::error::SearchFailure;
use crate::domain::search::outcome::SearchOutcome;
use crate::domain::search::request::SearchRequest;
use futures::FutureExt;
use serde::Deserialize;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use url::Url;

/// 重叠请求的结果处理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// 最后返回的响应决定最终状态，即使它属于较早发起的请求
    #[default]
    LastResolvedWins,
    /// 只应用最近一次发起的调用的结果，较早调用的响应被静默丢弃
    DiscardSuperseded,
}

/// 控制器选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Window used by [`SearchController::search_debounced`]; zero disables it.
    pub debounce: Duration,
    pub stale_policy: StalePolicy,
}

/// 搜索生命周期控制器
///
/// 持有唯一的 [`SearchOutcome`]，并通过 watch 通道向观察者发布每一次状态转换。
/// 只有控制器自身能修改状态。
pub struct SearchController<C> {
    client: C,
    api: SearchApiConfig,
    options: ControllerOptions,
    state: watch::Sender<SearchOutcome>,
    generation: AtomicU64,
    debounce_ticket: AtomicU64,
}

impl<C: HttpClient> SearchController<C> {
    pub fn new(client: C, api: SearchApiConfig) -> Self {
        Self::with_options(client, api, ControllerOptions::default())
    }

    pub fn with_options(client: C, api: SearchApiConfig, options: ControllerOptions) -> Self {
        let (state, _) = watch::channel(SearchOutcome::Idle);
        Self {
            client,
            api,
            options,
            state,
            generation: AtomicU64::new(0),
            debounce_ticket: AtomicU64::new(0),
        }
    }

    /// Read-only handle on the outcome; sees every transition.
    pub fn subscribe(&self) -> watch::Receiver<SearchOutcome> {
        self.state.subscribe()
    }

    /// Snapshot of the current outcome.
    pub fn outcome(&self) -> SearchOutcome {
        self.state.borrow().clone()
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// 执行一次搜索
    ///
    /// 空查询（去除首尾空白后）直接回到 `Idle`，不发出网络请求；否则进入 `Loading`，
    /// 发出一次 GET 请求，并以 `Success` 或 `Failure` 结束。
    ///
    /// 所有失败都转换为 `Failure` 状态，此方法本身不会返回错误。重叠调用不会被串行化，
    /// 最终状态由 [`StalePolicy`] 决定。
    pub async fn search(&self, query: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(request) = SearchRequest::new(query) else {
            debug!("Blank query, resetting search state");
            self.publish(SearchOutcome::Idle);
            return;
        };

        self.publish(SearchOutcome::Loading);
        let outcome = self.execute(&request).await;

        if self.options.stale_policy == StalePolicy::DiscardSuperseded
            && self.generation.load(Ordering::SeqCst) != generation
        {
            debug!(
                query = request.query(),
                generation, "Discarding response of superseded search"
            );
            return;
        }

        match &outcome {
            SearchOutcome::Success { items, info } => info!(
                query = request.query(),
                results = items.len(),
                total = %info.total_results,
                "Search completed"
            ),
            SearchOutcome::Failure(failure) => {
                warn!(query = request.query(), error = %failure, "Search failed")
            }
            _ => {}
        }
        self.publish(outcome);
    }

    /// 防抖搜索
    ///
    /// 等待 `debounce` 时长，期间若有更新的防抖调用到达则放弃本次调用。
    /// `debounce` 为零时等同于 [`search`](Self::search)。
    pub async fn search_debounced(&self, query: &str) {
        if self.options.debounce.is_zero() {
            return self.search(query).await;
        }

        let ticket = self.debounce_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.options.debounce).await;

        if self.debounce_ticket.load(Ordering::SeqCst) != ticket {
            debug!(query, "Debounced search superseded by a newer trigger");
            return;
        }

        self.search(query).await;
    }

    async fn execute(&self, request: &SearchRequest) -> SearchOutcome {
        let url = self.api.request_url(request);
        debug!(query = request.query(), "Issuing search request");

        // A panicking client must still end the lifecycle in `Failure`.
        match AssertUnwindSafe(self.fetch(&url)).catch_unwind().await {
            Ok(Ok(data)) => {
                let (items, info) = data.into_parts();
                SearchOutcome::Success { items, info }
            }
            Ok(Err(failure)) => SearchOutcome::Failure(failure),
            Err(payload) => SearchOutcome::Failure(SearchFailure::from_panic(payload)),
        }
    }

    async fn fetch(&self, url: &Url) -> Result<SearchData, SearchFailure> {
        let response = self.client.get(url).await?;

        if !response.is_success() {
            return Err(SearchFailure::HttpStatus(response.status));
        }

        let body: SearchResponse = serde_json::from_slice(&response.body)?;
        Ok(body.data)
    }

    fn publish(&self, outcome: SearchOutcome) {
        debug!(state = outcome.label(), "Search state transition");
        self.state.send_replace(outcome);
    }
}
