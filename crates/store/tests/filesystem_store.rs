//! Behavior tests for the filesystem record store backend.

use chrono::{NaiveDate, Utc};
use tempfile::TempDir;

use veneer_store::{FilesystemStore, RecordStore, StoreError};
use veneer_types::{
    Category, CheckStatus, DoctypeSchema, FieldDef, FieldType, PageSpec, Priority, Suggestion,
    SuggestionRecord, SuggestionStatus, Theme, UiSettings, UpgradeCheck,
};

async fn open_store(dir: &TempDir) -> FilesystemStore {
    let store = FilesystemStore::new(dir.path());
    store.initialize().await.unwrap();
    store
}

fn settings_schema() -> DoctypeSchema {
    DoctypeSchema {
        name: "UI Settings".to_string(),
        module: "Veneer".to_string(),
        fields: vec![
            FieldDef::new("enable_animations", "Enable Animations", FieldType::Check)
                .default_value("1"),
            FieldDef::new("modern_theme", "Modern Theme", FieldType::Select)
                .options("Default\nDark\nLight\nCustom"),
        ],
        permissions: vec![],
    }
}

#[tokio::test]
async fn doctype_registration_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    assert!(!store.doctype_exists("UI Settings").await.unwrap());
    store.create_doctype(&settings_schema()).await.unwrap();
    assert!(store.doctype_exists("UI Settings").await.unwrap());

    let err = store.create_doctype(&settings_schema()).await.unwrap_err();
    assert!(matches!(err, StoreError::DoctypeExists(_)));
    assert_eq!(store.list_doctypes().await.unwrap(), vec!["UI Settings"]);
}

#[tokio::test]
async fn pages_can_be_created_and_deleted() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let page = PageSpec {
        name: "modern-dashboard".to_string(),
        title: "Modern Dashboard".to_string(),
        module: "Veneer".to_string(),
        content: "<div>dashboard</div>".to_string(),
    };
    store.create_page(&page).await.unwrap();
    assert!(store.page_exists("modern-dashboard").await.unwrap());

    assert!(store.delete_page("modern-dashboard").await.unwrap());
    assert!(!store.page_exists("modern-dashboard").await.unwrap());
    // Deleting again reports "did not exist" rather than failing.
    assert!(!store.delete_page("modern-dashboard").await.unwrap());
}

#[tokio::test]
async fn settings_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = open_store(&dir).await;
        assert!(store.ui_settings().await.unwrap().is_none());
        let mut settings = UiSettings::default();
        settings.enable_shadows = false;
        store.save_ui_settings(&settings).await.unwrap();
    }

    let reopened = FilesystemStore::new(dir.path());
    let loaded = reopened.ui_settings().await.unwrap().unwrap();
    assert!(!loaded.enable_shadows);
    assert!(loaded.enable_animations);
}

#[tokio::test]
async fn theme_uniqueness_and_css_counts() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let plain = Theme::new("Modern Light", Some("#2563eb".to_string()), None).unwrap();
    let styled = Theme::new("Modern Dark", None, None)
        .unwrap()
        .with_css(".navbar { background: #1e293b }");

    store.insert_theme(&plain).await.unwrap();
    store.insert_theme(&styled).await.unwrap();
    assert!(matches!(
        store.insert_theme(&plain).await.unwrap_err(),
        StoreError::ThemeExists(_)
    ));

    assert_eq!(store.theme_count().await.unwrap(), 2);
    assert_eq!(store.themes_with_css().await.unwrap(), 1);
    assert_eq!(store.list_themes().await.unwrap().len(), 2);
}

#[tokio::test]
async fn upgrade_checks_append() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let check = UpgradeCheck {
        current_version: "1.0.0".to_string(),
        latest_version: "1.1.0".to_string(),
        update_available: true,
        last_checked: Utc::now(),
        release_notes: "Fixes".to_string(),
        release_url: "https://example.com/releases/v1.1.0".to_string(),
        status: CheckStatus::Checked,
    };

    let first = store.insert_upgrade_check(&check).await.unwrap();
    let second = store.insert_upgrade_check(&check).await.unwrap();
    assert_ne!(first, second);
    assert_eq!(store.upgrade_check_count().await.unwrap(), 2);
}

#[tokio::test]
async fn suggestion_completion_persists() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let record = SuggestionRecord::pending(Suggestion::new(
        Category::Accessibility,
        Priority::High,
        "Create High Contrast Theme",
        "Improve accessibility with a high contrast theme.",
        "Create a high contrast theme in Theme Manager",
        "eye",
    ));
    let id = store.insert_suggestion(&record).await.unwrap();

    let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
    assert!(store.complete_suggestion(&id, date).await.unwrap());

    let stored = store.get_suggestion(&id).await.unwrap().unwrap();
    assert_eq!(stored.status, SuggestionStatus::Completed);
    assert_eq!(stored.completed_on, Some(date));
    assert_eq!(stored.suggestion.title, "Create High Contrast Theme");
}

#[tokio::test]
async fn clear_cache_keeps_records() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir).await;

    let theme = Theme::new("Brand", None, None).unwrap();
    store.insert_theme(&theme).await.unwrap();
    tokio::fs::write(dir.path().join("cache").join("compiled.css"), b"body{}")
        .await
        .unwrap();

    store.clear_cache().await.unwrap();

    assert!(!dir.path().join("cache").join("compiled.css").exists());
    assert_eq!(store.theme_count().await.unwrap(), 1);
}
