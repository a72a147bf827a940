//! End-to-end tests of the entry-point envelopes against an in-memory
//! store and stubbed release sources.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use veneer_api::{Api, Cadence, Notification, Notifier, NotifyError, run_scheduled_check};
use veneer_store::{MemoryStore, RecordId, RecordStore};
use veneer_types::{Category, Priority, SuggestionStatus};
use veneer_upgrade::{ReleaseInfo, ReleaseSource, VersionResolver};

struct StubSource(Option<ReleaseInfo>);

#[async_trait]
impl ReleaseSource for StubSource {
    async fn latest(&self) -> Option<ReleaseInfo> {
        self.0.clone()
    }
}

fn release_source(tag: &str) -> Arc<StubSource> {
    Arc::new(StubSource(Some(ReleaseInfo {
        tag_name: tag.to_string(),
        body: "Release notes".to_string(),
        html_url: format!("https://example.com/releases/{tag}"),
        published_at: "2026-08-01T00:00:00Z".to_string(),
    })))
}

fn unreachable_source() -> Arc<StubSource> {
    Arc::new(StubSource(None))
}

fn api_with(source: Arc<StubSource>, current: &str) -> (Arc<MemoryStore>, Api) {
    let store = Arc::new(MemoryStore::new());
    let api = Api::new(
        store.clone(),
        source,
        VersionResolver::embedded(current),
    );
    (store, api)
}

#[tokio::test]
async fn unreachable_index_yields_failure_and_no_record() {
    let (store, api) = api_with(unreachable_source(), "1.0.0");

    let status = api.upgrade_status().await;
    assert!(!status.is_success());
    assert_eq!(
        status.failure_message().unwrap(),
        "Unable to check for updates. Please check your internet connection."
    );

    let created = api.create_upgrade_check_record().await;
    assert!(!created.is_success());
    assert_eq!(store.upgrade_check_count().await.unwrap(), 0);
}

#[tokio::test]
async fn equal_versions_report_up_to_date() {
    let (_store, api) = api_with(release_source("v1.2.0"), "1.2.0");

    let status = api.upgrade_status().await;
    let payload = status.as_success().unwrap();
    assert!(!payload.update_available);
    assert_eq!(payload.current_version, "1.2.0");
    assert_eq!(payload.latest_version, "1.2.0");
    assert_eq!(
        payload.message.as_deref(),
        Some("You are running the latest version.")
    );
    assert!(payload.release_notes.is_none());
}

#[tokio::test]
async fn newer_release_carries_notes_and_url() {
    let (_store, api) = api_with(release_source("v2.0.0"), "1.2.0");

    let status = api.upgrade_status().await;
    let payload = status.as_success().unwrap();
    assert!(payload.update_available);
    assert_eq!(payload.release_notes.as_deref(), Some("Release notes"));
    assert_eq!(
        payload.release_url.as_deref(),
        Some("https://example.com/releases/v2.0.0")
    );
    assert!(payload.message.is_none());
}

#[tokio::test]
async fn non_semver_tag_is_reported_not_raised() {
    let (store, api) = api_with(release_source("latest"), "1.0.0");

    let status = api.upgrade_status().await;
    assert!(!status.is_success());
    assert!(
        status
            .failure_message()
            .unwrap()
            .starts_with("Failed to check for updates")
    );

    let created = api.create_upgrade_check_record().await;
    assert!(!created.is_success());
    assert_eq!(store.upgrade_check_count().await.unwrap(), 0);
}

#[tokio::test]
async fn successful_check_appends_one_log_row() {
    let (store, api) = api_with(release_source("v1.3.0"), "1.2.0");

    let created = api.create_upgrade_check_record().await;
    let payload = created.as_success().unwrap();
    assert_eq!(payload.message, "Upgrade check record created successfully");
    assert_eq!(store.upgrade_check_count().await.unwrap(), 1);

    let rows = store.upgrade_check_rows().unwrap();
    assert!(rows[0].update_available);
    assert_eq!(rows[0].release_notes, "Release notes");
}

#[tokio::test]
async fn up_to_date_check_logs_blank_release_fields() {
    let (store, api) = api_with(release_source("v1.2.0"), "1.2.0");

    let created = api.create_upgrade_check_record().await;
    assert!(created.is_success());

    let rows = store.upgrade_check_rows().unwrap();
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].update_available);
    assert!(rows[0].release_notes.is_empty());
    assert!(rows[0].release_url.is_empty());
}

#[tokio::test]
async fn suggestions_envelope_reports_default_scenario() {
    let (_store, api) = api_with(unreachable_source(), "1.0.0");

    let response = api.suggestions().await;
    let payload = response.as_success().unwrap();
    assert_eq!(payload.report.total_suggestions, 8);
    assert!(payload.report.categories.contains_key(&Category::Theme));
}

#[tokio::test]
async fn filtered_suggestions_match_both_criteria() {
    let (_store, api) = api_with(unreachable_source(), "1.0.0");

    let response = api
        .filtered_suggestions(Some(Category::UserExperience), Some(Priority::High))
        .await;
    let payload = response.as_success().unwrap();
    assert_eq!(payload.total, 1);
    assert_eq!(payload.suggestions[0].title, "Optimize for Mobile");

    let none = api.filtered_suggestions(Some(Category::General), None).await;
    assert_eq!(none.as_success().unwrap().total, 0);
}

#[tokio::test]
async fn create_suggestions_records_persists_the_set() {
    let (store, api) = api_with(unreachable_source(), "1.0.0");

    let created = api.create_suggestions_records().await;
    let payload = created.as_success().unwrap();
    assert_eq!(payload.suggestions.len(), 8);
    assert_eq!(payload.message, "8 suggestion records created");
    assert_eq!(store.suggestion_count().await.unwrap(), 8);
}

#[tokio::test]
async fn mark_completed_round_trip() {
    let (store, api) = api_with(unreachable_source(), "1.0.0");

    let created = api.create_suggestions_records().await;
    let id = created.as_success().unwrap().suggestions[0];

    let done = api.mark_suggestion_completed(&id).await;
    assert_eq!(
        done.as_success().unwrap().message,
        "Suggestion marked as completed"
    );
    let record = store.get_suggestion(&id).await.unwrap().unwrap();
    assert_eq!(record.status, SuggestionStatus::Completed);
    assert!(record.completed_on.is_some());

    let missing = api.mark_suggestion_completed(&RecordId::new()).await;
    assert_eq!(missing.failure_message().unwrap(), "Suggestion not found");
}

struct CountingNotifier(AtomicUsize);

#[async_trait]
impl Notifier for CountingNotifier {
    async fn publish(
        &self,
        _event: &str,
        _note: &Notification,
        _user: &str,
    ) -> Result<(), NotifyError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn scheduled_check_notifies_only_when_update_exists() {
    let notifier = Arc::new(CountingNotifier(AtomicUsize::new(0)));

    let (_store, api) = api_with(release_source("v2.0.0"), "1.0.0");
    let api = api.with_notifier(notifier.clone());
    let result = run_scheduled_check(&api, Cadence::Daily).await;
    assert!(result.is_success());
    assert_eq!(notifier.0.load(Ordering::SeqCst), 1);

    let (_store, api) = api_with(release_source("v1.0.0"), "1.0.0");
    let api = api.with_notifier(notifier.clone());
    run_scheduled_check(&api, Cadence::Weekly).await;
    assert_eq!(notifier.0.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn envelopes_serialize_to_the_wire_shape() {
    let (_store, api) = api_with(unreachable_source(), "1.0.0");

    let failure = api.upgrade_status().await;
    let json = serde_json::to_value(&failure).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());

    let suggestions = api.suggestions().await;
    let json = serde_json::to_value(&suggestions).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["total_suggestions"], 8);
    assert!(json["categories"]["Theme"]["high"].is_array());
    assert!(json["categories"]["User Experience"]["medium"].is_array());
}
