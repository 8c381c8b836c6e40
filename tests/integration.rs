// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::search::{Pager, PresetKeyword, RequestCounter, SearchClient, PER_PAGE};
use iced_gallery::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_theme_mode_round_trips_through_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        theme_mode: ThemeMode::Dark,
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("save should succeed");

    let loaded = config::load_from_path(&path).expect("load should succeed");
    assert_eq!(loaded.theme_mode, ThemeMode::Dark);
}

#[test]
fn test_documented_request_scenario() {
    // Searching "dogs" on page 1 issues exactly the documented URL shape.
    let client = SearchClient::new("KEY");
    assert_eq!(
        client.page_url("dogs", 1).as_str(),
        "https://api.unsplash.com/search/photos?query=dogs&page=1&per_page=21&client_id=KEY"
    );
    assert_eq!(PER_PAGE, 21);
}

#[test]
fn test_five_page_result_navigates_forward_only_from_page_one() {
    // A response reporting total_pages=5 while on page 1: Next is offered,
    // Previous is not.
    let mut pager = Pager::new();
    pager.set_total_pages(5);

    assert!(pager.has_next());
    assert!(!pager.has_previous());

    // Walk to the last page: the offer flips around.
    pager.set_page(5);
    assert!(!pager.has_next());
    assert!(pager.has_previous());
}

#[test]
fn test_preset_buttons_submit_lowercase_queries() {
    let queries: Vec<&str> = PresetKeyword::ALL.iter().map(|p| p.query()).collect();
    assert_eq!(queries, vec!["nature", "cars", "dogs", "aeroplanes"]);
}

#[test]
fn test_preset_labels_are_localized_in_every_shipped_locale() {
    let mut i18n = I18n::default();
    for preset in PresetKeyword::ALL {
        assert!(!i18n.tr(preset.label_key()).starts_with("MISSING:"));
    }

    i18n.set_locale("fr".parse().unwrap());
    assert_eq!(i18n.tr(PresetKeyword::Cars.label_key()), "Voitures");
}

#[test]
fn test_superseded_requests_lose_to_the_latest() {
    let mut requests = RequestCounter::new();
    let first = requests.begin();
    let second = requests.begin();
    let third = requests.begin();

    assert!(!requests.is_current(first));
    assert!(!requests.is_current(second));
    assert!(requests.is_current(third));
}

#[test]
fn test_custom_endpoint_is_used_for_page_urls() {
    let client = SearchClient::with_endpoint("KEY", "http://127.0.0.1:9900/search")
        .expect("endpoint should parse");
    let url = client.page_url("nature", 3);
    assert!(url.as_str().starts_with("http://127.0.0.1:9900/search?"));
    assert!(url.as_str().contains("query=nature"));
    assert!(url.as_str().contains("page=3"));
}
