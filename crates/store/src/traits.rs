//! Trait definition for the host record store collaborator.

use async_trait::async_trait;
use chrono::NaiveDate;

use veneer_types::{
    DoctypeSchema, PageSpec, SuggestionRecord, Theme, UiSettings, UpgradeCheck,
};

use crate::error::Result;
use crate::types::RecordId;

/// The slice of the host record store the plugin depends on.
///
/// All mutations are inserts of new rows or single-field status updates;
/// nothing is read-modify-written in place, so overlapping invocations are
/// safe without extra locking on the caller's side.
#[async_trait]
pub trait RecordStore: Send + Sync {
    // === Doctype registry ===

    /// Check whether a doctype schema has been registered.
    async fn doctype_exists(&self, name: &str) -> Result<bool>;

    /// Register a doctype schema. Fails with `DoctypeExists` on duplicates;
    /// callers that want idempotence must check existence first.
    async fn create_doctype(&self, schema: &DoctypeSchema) -> Result<()>;

    async fn list_doctypes(&self) -> Result<Vec<String>>;

    // === Desk pages ===

    async fn page_exists(&self, name: &str) -> Result<bool>;

    async fn create_page(&self, page: &PageSpec) -> Result<()>;

    /// Delete a page. Returns `true` if it existed.
    async fn delete_page(&self, name: &str) -> Result<bool>;

    async fn list_pages(&self) -> Result<Vec<String>>;

    // === Settings ===

    /// The single logical settings record, if one has been saved.
    async fn ui_settings(&self) -> Result<Option<UiSettings>>;

    async fn save_ui_settings(&self, settings: &UiSettings) -> Result<()>;

    // === Themes ===

    async fn theme_exists(&self, name: &str) -> Result<bool>;

    /// Insert a theme. Theme names are unique; duplicates fail with
    /// `ThemeExists`.
    async fn insert_theme(&self, theme: &Theme) -> Result<()>;

    async fn theme_count(&self) -> Result<u64>;

    /// Number of themes carrying a non-empty custom CSS block.
    async fn themes_with_css(&self) -> Result<u64>;

    async fn list_themes(&self) -> Result<Vec<Theme>>;

    // === Upgrade-check log (append-only) ===

    async fn insert_upgrade_check(&self, check: &UpgradeCheck) -> Result<RecordId>;

    async fn upgrade_check_count(&self) -> Result<u64>;

    // === Suggestions ===

    async fn insert_suggestion(&self, record: &SuggestionRecord) -> Result<RecordId>;

    async fn get_suggestion(&self, id: &RecordId) -> Result<Option<SuggestionRecord>>;

    async fn suggestion_count(&self) -> Result<u64>;

    /// Mark a stored suggestion completed. Returns `false` when the id is
    /// unknown.
    async fn complete_suggestion(&self, id: &RecordId, completed_on: NaiveDate) -> Result<bool>;

    // === Maintenance ===

    /// Drop any transient cached state. Best-effort.
    async fn clear_cache(&self) -> Result<()>;
}
