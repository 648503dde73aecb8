// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索 API 集成测试
///
/// 通过 wiremock 模拟搜索端点，验证真实 HTTP 客户端下的完整生命周期
#[cfg(test)]
mod tests {
    use searchbox::domain::search::api::SearchApiConfig;
    use searchbox::domain::search::error::SearchFailure;
    use searchbox::domain::search::outcome::SearchOutcome;
    use searchbox::domain::services::search_controller::SearchController;
    use searchbox::infrastructure::http::reqwest_client::ReqwestHttpClient;
    use searchbox::presentation::search_view::{Key, SearchView};
    use serde_json::{json, Value};
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SEARCH_PATH: &str = "/customsearch/v1";

    fn controller_for(endpoint: &str) -> SearchController<ReqwestHttpClient> {
        let api = SearchApiConfig::new(Url::parse(endpoint).unwrap(), "test-key", "engine-1");
        SearchController::new(ReqwestHttpClient::new().unwrap(), api)
    }

    fn controller(server: &MockServer) -> SearchController<ReqwestHttpClient> {
        controller_for(&format!("{}{}", server.uri(), SEARCH_PATH))
    }

    fn api_item(title: &str) -> Value {
        json!({
            "kind": "customsearch#result",
            "title": title,
            "htmlTitle": format!("<b>{}</b>", title),
            "link": format!("https://example.com/{}", title),
            "displayLink": "example.com",
            "snippet": format!("{} snippet", title),
            "htmlSnippet": format!("{} <b>snippet</b>", title),
            "formattedUrl": format!("https://example.com/{}", title),
            "htmlFormattedUrl": format!("https://example.com/<b>{}</b>", title)
        })
    }

    fn search_information(total: &str) -> Value {
        json!({
            "searchTime": 0.42,
            "formattedSearchTime": "0.42",
            "totalResults": total,
            "formattedTotalResults": total
        })
    }

    fn results_body(titles: &[&str]) -> Value {
        let items: Vec<Value> = titles.iter().map(|t| api_item(t)).collect();
        json!({
            "data": {
                "items": items,
                "searchInformation": search_information(&titles.len().to_string())
            }
        })
    }

    fn titles(outcome: &SearchOutcome) -> Vec<String> {
        outcome
            .items()
            .unwrap_or_default()
            .iter()
            .map(|item| item.title.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_search_sends_static_parameters_and_parses_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("key", "test-key"))
            .and(query_param("cx", "engine-1"))
            .and(query_param("q", "rust & tokio"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_body(&["A", "B"])))
            .expect(1)
            .mount(&server)
            .await;

        let controller = controller(&server);
        controller.search("  rust & tokio ").await;

        let outcome = controller.outcome();
        assert_eq!(titles(&outcome), vec!["A", "B"]);
        let info = outcome.info().unwrap();
        assert_eq!(info.search_time, 0.42);
        assert_eq!(info.formatted_total_results, "2");
        assert_eq!(outcome.items().unwrap()[1].html_title, "<b>B</b>");
    }

    #[tokio::test]
    async fn test_blank_query_issues_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_body(&["A"])))
            .expect(0)
            .mount(&server)
            .await;

        let controller = controller(&server);
        controller.search("   ").await;

        assert_eq!(controller.outcome(), SearchOutcome::Idle);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_items_yields_empty_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "searchInformation": search_information("0") }
            })))
            .mount(&server)
            .await;

        let controller = controller(&server);
        controller.search("qwxzv").await;

        let outcome = controller.outcome();
        assert!(!outcome.is_idle());
        assert_eq!(outcome.items().map(|items| items.len()), Some(0));
    }

    #[tokio::test]
    async fn test_server_error_becomes_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_json(results_body(&["A"])))
            .mount(&server)
            .await;

        let controller = controller(&server);
        controller.search("rust").await;

        let outcome = controller.outcome();
        assert_eq!(outcome, SearchOutcome::Failure(SearchFailure::HttpStatus(500)));
        assert!(outcome.error().unwrap().to_string().contains("500"));
        assert!(outcome.items().is_none());
        assert!(outcome.info().is_none());
    }

    #[tokio::test]
    async fn test_invalid_json_becomes_parse_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>quota page</html>"))
            .mount(&server)
            .await;

        let controller = controller(&server);
        controller.search("rust").await;

        assert!(matches!(
            controller.outcome(),
            SearchOutcome::Failure(SearchFailure::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_becomes_network_failure() {
        // Reserve a port and release it so nothing is listening there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let controller = controller_for(&format!("http://{}{}", addr, SEARCH_PATH));
        controller.search("rust").await;

        match controller.outcome() {
            SearchOutcome::Failure(SearchFailure::Network(message)) => {
                assert!(!message.is_empty());
                assert!(!message.starts_with("Request failed"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_repeated_search_yields_identical_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_body(&["A", "B"])))
            .expect(3)
            .mount(&server)
            .await;

        let controller = controller(&server);
        controller.search("rust").await;
        let first = controller.outcome();

        for _ in 0..2 {
            controller.search("rust").await;
            assert_eq!(controller.outcome(), first);
        }
    }

    #[tokio::test]
    async fn test_slow_earlier_response_overwrites_newer_one() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "a"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(results_body(&["A"]))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("q", "b"))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_body(&["B"])))
            .mount(&server)
            .await;

        let controller = controller(&server);
        tokio::join!(controller.search("a"), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            controller.search("b").await;
            assert_eq!(titles(&controller.outcome()), vec!["B"]);
        });

        assert_eq!(titles(&controller.outcome()), vec!["A"]);
    }

    #[tokio::test]
    async fn test_view_renders_controller_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(results_body(&["A"])))
            .mount(&server)
            .await;

        let controller = controller(&server);
        let mut view = SearchView::new(controller.subscribe());

        view.on_input("rust");
        let request = view.on_key(Key::Enter).unwrap();
        controller.search(request.query()).await;

        assert_eq!(
            view.render(),
            vec![
                "About 1 results (0.42 seconds)".to_string(),
                "[1] A".to_string(),
                "    example.com".to_string(),
                "    A snippet".to_string(),
            ]
        );
        assert_eq!(view.link(1).as_deref(), Some("https://example.com/A"));
    }
}
