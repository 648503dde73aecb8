// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// A single entry of the result list, as returned by the search API.
///
/// All fields are passed through untouched; the `html*` variants may carry
/// markup and are only interpreted by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResultItem {
    pub kind: String,
    pub title: String,
    pub html_title: String,
    pub link: String,
    pub display_link: String,
    pub snippet: String,
    pub html_snippet: String,
    pub formatted_url: String,
    pub html_formatted_url: String,
}

/// Metadata describing the result set as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInformation {
    pub search_time: f64,
    pub formatted_search_time: String,
    pub total_results: String,
    pub formatted_total_results: String,
}

/// `data` member of the response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    /// Absent when the query matched nothing.
    #[serde(default)]
    pub items: Option<Vec<SearchResultItem>>,
    pub search_information: SearchInformation,
}

/// Response envelope: `{ "data": { ... } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: SearchData,
}

impl SearchData {
    /// Splits into the ordered item list (empty when absent) and the metadata.
    pub fn into_parts(self) -> (Vec<SearchResultItem>, SearchInformation) {
        (self.items.unwrap_or_default(), self.search_information)
    }
}
