// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::{SearchInformation, SearchResultItem};
use crate::domain::search::error::SearchFailure;

/// 搜索生命周期的可观察状态
///
/// 任意时刻只有一个变体成立；每次状态转换整体替换旧值
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchOutcome {
    /// 尚未搜索，或查询为空
    #[default]
    Idle,
    /// 请求已发出，尚未得到结果
    Loading,
    /// 搜索成功；`items` 可能为空
    Success {
        items: Vec<SearchResultItem>,
        info: SearchInformation,
    },
    /// 搜索失败
    Failure(SearchFailure),
}

impl SearchOutcome {
    pub fn is_idle(&self) -> bool {
        matches!(self, SearchOutcome::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchOutcome::Loading)
    }

    /// `None` unless the outcome is `Success`.
    pub fn items(&self) -> Option<&[SearchResultItem]> {
        match self {
            SearchOutcome::Success { items, .. } => Some(items),
            _ => None,
        }
    }

    pub fn info(&self) -> Option<&SearchInformation> {
        match self {
            SearchOutcome::Success { info, .. } => Some(info),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SearchFailure> {
        match self {
            SearchOutcome::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            SearchOutcome::Idle => "idle",
            SearchOutcome::Loading => "loading",
            SearchOutcome::Success { .. } => "success",
            SearchOutcome::Failure(_) => "failure",
        }
    }
}
