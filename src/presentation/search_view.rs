// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResultItem;
use crate::domain::search::outcome::SearchOutcome;
use crate::domain::search::request::SearchRequest;
use crate::presentation::html_text::html_to_text;
use tokio::sync::watch;

pub const LOADING_LINE: &str = "Searching...";
pub const NO_RESULTS_LINE: &str = "No results found. Try a different search.";

/// 视图能识别的按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
}

/// 搜索框的展示层
///
/// 持有用户尚未提交的草稿文本，并以只读方式观察控制器的状态。
/// 视图从不自己发起搜索：`on_key` / `submit` 只返回应当执行的 [`SearchRequest`]。
pub struct SearchView {
    draft: String,
    outcome: watch::Receiver<SearchOutcome>,
}

impl SearchView {
    pub fn new(outcome: watch::Receiver<SearchOutcome>) -> Self {
        Self {
            draft: String::new(),
            outcome,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the draft. Never triggers a search.
    pub fn on_input(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Enter confirms the draft (even while a search is running); other keys are ignored.
    pub fn on_key(&mut self, key: Key) -> Option<SearchRequest> {
        match key {
            Key::Enter => SearchRequest::new(&self.draft),
            Key::Char(_) => None,
        }
    }

    /// Whether the search button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.outcome.borrow().is_loading() && !self.draft.trim().is_empty()
    }

    /// Search button action.
    pub fn submit(&self) -> Option<SearchRequest> {
        if !self.can_submit() {
            return None;
        }
        SearchRequest::new(&self.draft)
    }

    /// 按 1 开始的序号取结果链接
    pub fn link(&self, position: usize) -> Option<String> {
        let outcome = self.outcome.borrow();
        let items = outcome.items()?;
        position
            .checked_sub(1)
            .and_then(|index| items.get(index))
            .map(|item| item.link.clone())
    }

    /// 按当前状态渲染视图
    ///
    /// 顺序：错误信息、加载提示、无结果提示、结果统计及结果列表
    pub fn render(&self) -> Vec<String> {
        let outcome = self.outcome.borrow();
        let mut lines = Vec::new();

        if let Some(failure) = outcome.error() {
            lines.push(format!("Error: {}", failure));
        }

        if outcome.is_loading() {
            lines.push(LOADING_LINE.to_string());
        }

        match (outcome.items(), outcome.info()) {
            (Some([]), _) if !self.draft.is_empty() => {
                lines.push(NO_RESULTS_LINE.to_string());
            }
            (Some(items), Some(info)) if !items.is_empty() => {
                lines.push(format!(
                    "About {} results ({} seconds)",
                    info.formatted_total_results, info.formatted_search_time
                ));
                for (index, item) in items.iter().enumerate() {
                    render_item(&mut lines, index + 1, item);
                }
            }
            _ => {}
        }

        lines
    }
}

fn render_item(lines: &mut Vec<String>, position: usize, item: &SearchResultItem) {
    lines.push(format!(
        "[{}] {}",
        position,
        formatted_or_plain(&item.html_title, &item.title)
    ));
    lines.push(format!("    {}", item.display_link));

    let snippet = formatted_or_plain(&item.html_snippet, &item.snippet);
    if !snippet.is_empty() {
        lines.push(format!("    {}", snippet));
    }
}

fn formatted_or_plain(html: &str, plain: &str) -> String {
    if html.is_empty() {
        plain.trim().to_string()
    } else {
        html_to_text(html)
    }
}
