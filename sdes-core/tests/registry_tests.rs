//! Registry, content fixture and theme config integration tests.

use assert_fs::prelude::*;
use predicates::prelude::predicate;
use sdes_core::{
    ConfigError, ContentQuery, HostError, InMemoryContent, RegistryError, Shortcode,
    ThemeConfig, WidgetDefinition, WidgetRegistry,
};

const MENU: WidgetDefinition = WidgetDefinition {
    command: "menuPanel",
    name: "Menu Panel",
    description: "",
    params: &[],
    accepts_body: false,
    wysiwyg_visible: true,
};
const EVENTS: WidgetDefinition = WidgetDefinition { command: "events", name: "Events", ..MENU };

#[derive(Debug, Clone, Copy)]
enum Widget {
    Menu,
    Events,
}

impl Shortcode for Widget {
    fn definition(&self) -> &'static WidgetDefinition {
        match self {
            Widget::Menu => &MENU,
            Widget::Events => &EVENTS,
        }
    }
}

// ---------------------------------------------------------------------------
// 1. Registry
// ---------------------------------------------------------------------------

#[test]
fn registered_tags_resolve_and_others_do_not() {
    let mut registry = WidgetRegistry::new();
    registry.register([Widget::Menu, Widget::Events]).expect("register");

    assert_eq!(registry.resolve("events").expect("events").command(), "events");
    let err = registry.resolve("Events").unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
    assert!(err.to_string().contains("[Events]"));
}

#[test]
fn duplicate_registration_fails_loudly() {
    let mut registry = WidgetRegistry::new();
    registry.register([Widget::Menu]).expect("first");
    let err = registry.register([Widget::Menu]).unwrap_err();
    assert_eq!(err.to_string(), "shortcode [menuPanel] is already registered");
    assert_eq!(registry.len(), 1);
}

// ---------------------------------------------------------------------------
// 2. Content fixture
// ---------------------------------------------------------------------------

#[test]
fn content_fixture_loads_from_yaml() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("content.yaml");
    file.write_str(
        "menus:\n  - id: 1\n    name: Pages\n    slug: pages\n    items:\n      - title: Home\n        url: /\n",
    )
    .expect("write");
    file.assert(predicate::path::exists());

    let content = InMemoryContent::load_at(file.path()).expect("load");
    let menus = content.nav_menus().expect("menus");
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].slug, "pages");
}

#[test]
fn malformed_fixture_reports_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("content.yaml");
    file.write_str("menus: [unclosed").expect("write");

    let err = InMemoryContent::load_at(file.path()).unwrap_err();
    assert!(matches!(err, HostError::Fixture { .. }), "got: {err}");
    assert!(err.to_string().contains("content.yaml"));
}

// ---------------------------------------------------------------------------
// 3. Theme config
// ---------------------------------------------------------------------------

#[test]
fn malformed_config_reports_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("theme.yaml");
    file.write_str("feed: [1, 2").expect("write");

    let err = ThemeConfig::load_at(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("theme.yaml"));
}

#[test]
fn config_overrides_feed_settings() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("theme.yaml");
    file.write_str("feed:\n  timezone: America/Chicago\n  limit: 3\nmap_host: https://map.example.edu\n")
        .expect("write");

    let config = ThemeConfig::load_at(file.path()).expect("load");
    assert_eq!(config.feed.timezone, "America/Chicago");
    assert_eq!(config.feed.limit, 3);
    assert_eq!(config.feed.host, "http://events.ucf.edu");
    assert_eq!(config.map_host, "https://map.example.edu");
}
