// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 测试配置加载以及到搜索 API 配置、控制器选项的转换
#[cfg(test)]
mod tests {
    use searchbox::config::settings::{
        SearchSettings, Settings, SettingsError, DEFAULT_SEARCH_ENDPOINT,
    };
    use searchbox::domain::search::api::SearchApiConfig;
    use searchbox::domain::services::search_controller::StalePolicy;
    use std::time::Duration;

    fn search_settings() -> SearchSettings {
        SearchSettings {
            endpoint: "https://search.test/customsearch/v1".to_string(),
            api_key: "test-key".to_string(),
            cx: "engine-1".to_string(),
            debounce_ms: 250,
            stale_policy: StalePolicy::DiscardSuperseded,
            user_agent: None,
        }
    }

    #[test]
    fn test_config_loading_defaults() {
        let settings = Settings::load("unit-test").expect("configuration should load");

        assert_eq!(settings.search.endpoint, DEFAULT_SEARCH_ENDPOINT);
        assert_eq!(settings.search.debounce_ms, 0);
        assert_eq!(settings.search.stale_policy, StalePolicy::LastResolvedWins);
        assert!(settings.search.user_agent.is_none());

        let options = settings.search.controller_options();
        assert!(options.debounce.is_zero());
    }

    #[test]
    fn test_controller_options_mapping() {
        let options = search_settings().controller_options();
        assert_eq!(options.debounce, Duration::from_millis(250));
        assert_eq!(options.stale_policy, StalePolicy::DiscardSuperseded);
    }

    #[test]
    fn test_credentials_check() {
        assert!(search_settings().has_credentials());

        let missing_cx = SearchSettings {
            cx: "  ".to_string(),
            ..search_settings()
        };
        assert!(!missing_cx.has_credentials());
    }

    #[test]
    fn test_api_config_from_settings() {
        let api = SearchApiConfig::try_from(&search_settings()).unwrap();
        assert_eq!(api.endpoint().as_str(), "https://search.test/customsearch/v1");
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let settings = SearchSettings {
            endpoint: "not a url".to_string(),
            ..search_settings()
        };

        match SearchApiConfig::try_from(&settings) {
            Err(SettingsError::InvalidEndpoint { endpoint, .. }) => {
                assert_eq!(endpoint, "not a url")
            }
            Ok(api) => panic!("expected invalid endpoint error, got {:?}", api),
        }
    }
}
