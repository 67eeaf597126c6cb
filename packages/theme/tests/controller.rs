use std::sync::Arc;
use storefront_common::Store;
use storefront_document::{ColorMode, SiteConfig, ThemeConfig};
use storefront_theme::{HeadStyles, ThemeController, THEME_STYLE_ID};

fn theme(preset: &str) -> ThemeConfig {
    ThemeConfig {
        preset: Some(preset.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_injects_single_style_and_removes_on_drop() {
    let head = HeadStyles::new();
    let mut controller = ThemeController::new(head.clone(), Some(&theme("ocean")));
    assert_eq!(head.style_count(), 1);
    assert!(head.style(THEME_STYLE_ID).unwrap().contains("--primary: #0369a1;"));

    controller.set_theme(Some(&theme("forest")));
    assert_eq!(head.style_count(), 1);
    assert!(head.style(THEME_STYLE_ID).unwrap().contains("--primary: #15803d;"));

    drop(controller);
    assert_eq!(head.style_count(), 0);
}

#[test]
fn test_unchanged_inputs_do_not_reinject() {
    let head = HeadStyles::new();
    let mut controller = ThemeController::new(head.clone(), Some(&theme("ocean")));
    controller.set_theme(Some(&theme("ocean")));
    controller.set_user_prefers_dark(Some(true));
    assert_eq!(head.insert_count(), 1);
    assert_eq!(head.color_mode(), ColorMode::Dark);
}

#[test]
fn test_disabled_dark_mode_forces_default_mode() {
    let head = HeadStyles::new();
    let config = ThemeConfig {
        dark_mode_enabled: Some(false),
        default_mode: Some(ColorMode::Dark),
        ..Default::default()
    };
    let prefs = Store::new(false);
    let mut controller = ThemeController::new(head.clone(), Some(&config)).follow_dark_mode(prefs.subscribe());
    assert_eq!(controller.color_mode(), ColorMode::Dark);

    prefs.set(false);
    controller.poll();
    assert_eq!(head.color_mode(), ColorMode::Dark);
}

#[test]
fn test_follows_dark_mode_notifications() {
    let head = HeadStyles::new();
    let prefs = Store::new(false);
    let mut controller = ThemeController::new(head.clone(), None).follow_dark_mode(prefs.subscribe());
    assert_eq!(head.color_mode(), ColorMode::Light);
    assert!(!controller.poll());

    prefs.set(true);
    assert!(controller.poll());
    assert_eq!(head.color_mode(), ColorMode::Dark);
}

#[test]
fn test_global_preset_overrides_document_preset() {
    let head = HeadStyles::new();
    let controller = ThemeController::new(head.clone(), Some(&theme("ocean")))
        .with_global_preset(Some("sunset".to_string()));
    assert_eq!(controller.resolved().unwrap().preset, "sunset");
    assert!(head.style(THEME_STYLE_ID).unwrap().contains("--primary: #ea580c;"));
}

#[test]
fn test_follows_site_snapshots() {
    let head = HeadStyles::new();
    let mut site = SiteConfig::new("home", "Home");
    site.theme = Some(theme("ocean"));
    let store = Store::new(Arc::new(site.clone()));

    let mut controller = ThemeController::new(head.clone(), None).follow_site(store.subscribe());
    assert_eq!(controller.resolved().unwrap().preset, "ocean");

    site.theme = Some(theme("forest"));
    store.set(Arc::new(site));
    assert!(controller.poll());
    assert_eq!(controller.resolved().unwrap().preset, "forest");
    assert_eq!(head.style_count(), 1);
}

#[tokio::test]
async fn test_async_dark_mode_change() {
    let head = HeadStyles::new();
    let prefs = Store::new(false);
    let mut controller = ThemeController::new(head.clone(), None).follow_dark_mode(prefs.subscribe());

    prefs.set(true);
    assert!(controller.next_dark_mode_change().await);
    assert_eq!(head.color_mode(), ColorMode::Dark);

    drop(prefs);
    assert!(!controller.next_dark_mode_change().await);
}
