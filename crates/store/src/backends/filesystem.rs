//! Filesystem-backed record store.
//!
//! Records are stored as JSON documents in a flat directory per record type:
//!
//! ```text
//! data_root/
//! +-- doctypes/{slug}.json
//! +-- pages/{slug}.json
//! +-- themes/{slug}.json
//! +-- upgrade_checks/{record_id}.json
//! +-- suggestions/{record_id}.json
//! +-- settings.json
//! +-- cache/
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::debug;

use veneer_types::{
    DoctypeSchema, PageSpec, SuggestionRecord, SuggestionStatus, Theme, UiSettings, UpgradeCheck,
};

use crate::error::{Result, StoreError};
use crate::traits::RecordStore;
use crate::types::RecordId;

const DOCTYPES_DIR: &str = "doctypes";
const PAGES_DIR: &str = "pages";
const THEMES_DIR: &str = "themes";
const UPGRADE_CHECKS_DIR: &str = "upgrade_checks";
const SUGGESTIONS_DIR: &str = "suggestions";
const CACHE_DIR: &str = "cache";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Create the directory layout. Safe to call on every startup.
    pub async fn initialize(&self) -> Result<()> {
        for dir in [
            DOCTYPES_DIR,
            PAGES_DIR,
            THEMES_DIR,
            UPGRADE_CHECKS_DIR,
            SUGGESTIONS_DIR,
            CACHE_DIR,
        ] {
            let path = self.root.join(dir);
            fs::create_dir_all(&path)
                .await
                .map_err(|e| StoreError::io("create_dir_all", path.clone(), e))?;
        }
        debug!(root = %self.root.display(), "record store layout ready");
        Ok(())
    }

    fn record_path(&self, dir: &str, name: &str) -> PathBuf {
        self.root.join(dir).join(format!("{}.json", slug(name)))
    }

    async fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let body = serde_json::to_vec_pretty(value)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &body)
            .await
            .map_err(|e| StoreError::io("write", tmp.clone(), e))?;
        fs::rename(&tmp, path)
            .await
            .map_err(|e| StoreError::io("rename", path.to_path_buf(), e))?;
        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        match fs::read(path).await {
            Ok(body) => Ok(Some(serde_json::from_slice(&body)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io("read", path.to_path_buf(), e)),
        }
    }

    async fn list_records<T: DeserializeOwned>(&self, dir: &str) -> Result<Vec<(String, T)>> {
        let dir_path = self.root.join(dir);
        let mut entries = match fs::read_dir(&dir_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io("read_dir", dir_path, e)),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io("read_dir", self.root.join(dir), e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string();
            if let Some(record) = self.read_json::<T>(&path).await? {
                records.push((stem, record));
            }
        }
        records.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(records)
    }

    async fn count_records(&self, dir: &str) -> Result<u64> {
        let dir_path = self.root.join(dir);
        let mut entries = match fs::read_dir(&dir_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(StoreError::io("read_dir", dir_path, e)),
        };

        let mut count = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io("read_dir", self.root.join(dir), e))?
        {
            if entry.path().extension().and_then(|ext| ext.to_str()) == Some("json") {
                count += 1;
            }
        }
        Ok(count)
    }
}

/// Filesystem-safe name for a record file.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash && !out.is_empty() {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[async_trait]
impl RecordStore for FilesystemStore {
    async fn doctype_exists(&self, name: &str) -> Result<bool> {
        Ok(self
            .read_json::<DoctypeSchema>(&self.record_path(DOCTYPES_DIR, name))
            .await?
            .is_some())
    }

    async fn create_doctype(&self, schema: &DoctypeSchema) -> Result<()> {
        let path = self.record_path(DOCTYPES_DIR, &schema.name);
        if self.read_json::<DoctypeSchema>(&path).await?.is_some() {
            return Err(StoreError::DoctypeExists(schema.name.clone()));
        }
        self.write_json(&path, schema).await
    }

    async fn list_doctypes(&self) -> Result<Vec<String>> {
        let records = self.list_records::<DoctypeSchema>(DOCTYPES_DIR).await?;
        Ok(records.into_iter().map(|(_, s)| s.name).collect())
    }

    async fn page_exists(&self, name: &str) -> Result<bool> {
        Ok(self
            .read_json::<PageSpec>(&self.record_path(PAGES_DIR, name))
            .await?
            .is_some())
    }

    async fn create_page(&self, page: &PageSpec) -> Result<()> {
        let path = self.record_path(PAGES_DIR, &page.name);
        if self.read_json::<PageSpec>(&path).await?.is_some() {
            return Err(StoreError::PageExists(page.name.clone()));
        }
        self.write_json(&path, page).await
    }

    async fn delete_page(&self, name: &str) -> Result<bool> {
        let path = self.record_path(PAGES_DIR, name);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io("remove_file", path, e)),
        }
    }

    async fn list_pages(&self) -> Result<Vec<String>> {
        let records = self.list_records::<PageSpec>(PAGES_DIR).await?;
        Ok(records.into_iter().map(|(_, p)| p.name).collect())
    }

    async fn ui_settings(&self) -> Result<Option<UiSettings>> {
        self.read_json(&self.root.join(SETTINGS_FILE)).await
    }

    async fn save_ui_settings(&self, settings: &UiSettings) -> Result<()> {
        self.write_json(&self.root.join(SETTINGS_FILE), settings).await
    }

    async fn theme_exists(&self, name: &str) -> Result<bool> {
        Ok(self
            .read_json::<Theme>(&self.record_path(THEMES_DIR, name))
            .await?
            .is_some())
    }

    async fn insert_theme(&self, theme: &Theme) -> Result<()> {
        let path = self.record_path(THEMES_DIR, &theme.theme_name);
        if self.read_json::<Theme>(&path).await?.is_some() {
            return Err(StoreError::ThemeExists(theme.theme_name.clone()));
        }
        self.write_json(&path, theme).await
    }

    async fn theme_count(&self) -> Result<u64> {
        self.count_records(THEMES_DIR).await
    }

    async fn themes_with_css(&self) -> Result<u64> {
        let themes = self.list_records::<Theme>(THEMES_DIR).await?;
        Ok(themes
            .iter()
            .filter(|(_, theme)| theme.has_custom_css())
            .count() as u64)
    }

    async fn list_themes(&self) -> Result<Vec<Theme>> {
        let records = self.list_records::<Theme>(THEMES_DIR).await?;
        Ok(records.into_iter().map(|(_, t)| t).collect())
    }

    async fn insert_upgrade_check(&self, check: &UpgradeCheck) -> Result<RecordId> {
        let id = RecordId::new();
        let path = self.record_path(UPGRADE_CHECKS_DIR, &id.to_string());
        self.write_json(&path, check).await?;
        Ok(id)
    }

    async fn upgrade_check_count(&self) -> Result<u64> {
        self.count_records(UPGRADE_CHECKS_DIR).await
    }

    async fn insert_suggestion(&self, record: &SuggestionRecord) -> Result<RecordId> {
        let id = RecordId::new();
        let path = self.record_path(SUGGESTIONS_DIR, &id.to_string());
        self.write_json(&path, record).await?;
        Ok(id)
    }

    async fn get_suggestion(&self, id: &RecordId) -> Result<Option<SuggestionRecord>> {
        self.read_json(&self.record_path(SUGGESTIONS_DIR, &id.to_string()))
            .await
    }

    async fn suggestion_count(&self) -> Result<u64> {
        self.count_records(SUGGESTIONS_DIR).await
    }

    async fn complete_suggestion(&self, id: &RecordId, completed_on: NaiveDate) -> Result<bool> {
        let path = self.record_path(SUGGESTIONS_DIR, &id.to_string());
        let Some(mut record) = self.read_json::<SuggestionRecord>(&path).await? else {
            return Ok(false);
        };
        record.status = SuggestionStatus::Completed;
        record.completed_on = Some(completed_on);
        self.write_json(&path, &record).await?;
        Ok(true)
    }

    async fn clear_cache(&self) -> Result<()> {
        let cache_dir = self.root.join(CACHE_DIR);
        match fs::remove_dir_all(&cache_dir).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(StoreError::io("remove_dir_all", cache_dir.clone(), e)),
        }
        fs::create_dir_all(&cache_dir)
            .await
            .map_err(|e| StoreError::io("create_dir_all", cache_dir, e))?;
        debug!("transient cache cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::slug;

    #[test]
    fn slug_is_filesystem_safe() {
        assert_eq!(slug("UI Settings"), "ui-settings");
        assert_eq!(slug("Theme Manager"), "theme-manager");
        assert_eq!(slug("modern-dashboard"), "modern-dashboard");
        assert_eq!(slug("a//b"), "a-b");
    }
}
