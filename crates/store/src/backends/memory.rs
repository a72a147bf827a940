//! In-memory record store, used by tests and as a scratch backend.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use veneer_types::{
    DoctypeSchema, PageSpec, SuggestionRecord, SuggestionStatus, Theme, UiSettings, UpgradeCheck,
};

use crate::error::{Result, StoreError};
use crate::traits::RecordStore;
use crate::types::RecordId;

#[derive(Debug, Default)]
struct Inner {
    doctypes: HashMap<String, DoctypeSchema>,
    pages: HashMap<String, PageSpec>,
    settings: Option<UiSettings>,
    themes: HashMap<String, Theme>,
    upgrade_checks: Vec<(RecordId, UpgradeCheck)>,
    suggestions: HashMap<RecordId, SuggestionRecord>,
    cache: HashMap<String, String>,
}

/// Keeps everything behind one `RwLock`; guards are never held across an
/// await point.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a transient cache entry, for exercising `clear_cache`.
    pub fn put_cache(&self, key: &str, value: &str) -> Result<()> {
        self.write()?.cache.insert(key.to_string(), value.to_string());
        Ok(())
    }

    pub fn cache_len(&self) -> Result<usize> {
        Ok(self.read()?.cache.len())
    }

    /// Snapshot of the logged upgrade checks, in insertion order.
    pub fn upgrade_check_rows(&self) -> Result<Vec<UpgradeCheck>> {
        Ok(self
            .read()?
            .upgrade_checks
            .iter()
            .map(|(_, check)| check.clone())
            .collect())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn doctype_exists(&self, name: &str) -> Result<bool> {
        Ok(self.read()?.doctypes.contains_key(name))
    }

    async fn create_doctype(&self, schema: &DoctypeSchema) -> Result<()> {
        let mut inner = self.write()?;
        if inner.doctypes.contains_key(&schema.name) {
            return Err(StoreError::DoctypeExists(schema.name.clone()));
        }
        inner.doctypes.insert(schema.name.clone(), schema.clone());
        Ok(())
    }

    async fn list_doctypes(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.read()?.doctypes.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn page_exists(&self, name: &str) -> Result<bool> {
        Ok(self.read()?.pages.contains_key(name))
    }

    async fn create_page(&self, page: &PageSpec) -> Result<()> {
        let mut inner = self.write()?;
        if inner.pages.contains_key(&page.name) {
            return Err(StoreError::PageExists(page.name.clone()));
        }
        inner.pages.insert(page.name.clone(), page.clone());
        Ok(())
    }

    async fn delete_page(&self, name: &str) -> Result<bool> {
        Ok(self.write()?.pages.remove(name).is_some())
    }

    async fn list_pages(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.read()?.pages.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn ui_settings(&self) -> Result<Option<UiSettings>> {
        Ok(self.read()?.settings.clone())
    }

    async fn save_ui_settings(&self, settings: &UiSettings) -> Result<()> {
        self.write()?.settings = Some(settings.clone());
        Ok(())
    }

    async fn theme_exists(&self, name: &str) -> Result<bool> {
        Ok(self.read()?.themes.contains_key(name))
    }

    async fn insert_theme(&self, theme: &Theme) -> Result<()> {
        let mut inner = self.write()?;
        if inner.themes.contains_key(&theme.theme_name) {
            return Err(StoreError::ThemeExists(theme.theme_name.clone()));
        }
        inner.themes.insert(theme.theme_name.clone(), theme.clone());
        Ok(())
    }

    async fn theme_count(&self) -> Result<u64> {
        Ok(self.read()?.themes.len() as u64)
    }

    async fn themes_with_css(&self) -> Result<u64> {
        Ok(self
            .read()?
            .themes
            .values()
            .filter(|theme| theme.has_custom_css())
            .count() as u64)
    }

    async fn list_themes(&self) -> Result<Vec<Theme>> {
        let mut themes: Vec<Theme> = self.read()?.themes.values().cloned().collect();
        themes.sort_by(|a, b| a.theme_name.cmp(&b.theme_name));
        Ok(themes)
    }

    async fn insert_upgrade_check(&self, check: &UpgradeCheck) -> Result<RecordId> {
        let id = RecordId::new();
        self.write()?.upgrade_checks.push((id, check.clone()));
        Ok(id)
    }

    async fn upgrade_check_count(&self) -> Result<u64> {
        Ok(self.read()?.upgrade_checks.len() as u64)
    }

    async fn insert_suggestion(&self, record: &SuggestionRecord) -> Result<RecordId> {
        let id = RecordId::new();
        self.write()?.suggestions.insert(id, record.clone());
        Ok(id)
    }

    async fn get_suggestion(&self, id: &RecordId) -> Result<Option<SuggestionRecord>> {
        Ok(self.read()?.suggestions.get(id).cloned())
    }

    async fn suggestion_count(&self) -> Result<u64> {
        Ok(self.read()?.suggestions.len() as u64)
    }

    async fn complete_suggestion(&self, id: &RecordId, completed_on: NaiveDate) -> Result<bool> {
        let mut inner = self.write()?;
        match inner.suggestions.get_mut(id) {
            Some(record) => {
                record.status = SuggestionStatus::Completed;
                record.completed_on = Some(completed_on);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn clear_cache(&self) -> Result<()> {
        self.write()?.cache.clear();
        Ok(())
    }
}
