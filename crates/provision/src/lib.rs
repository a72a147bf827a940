//! Install/uninstall lifecycle for the veneer desk plugin.
//!
//! Every install sub-step is guarded by an existence query, so a crash
//! mid-install and a re-run converge to the same end state without
//! duplicates. Uninstall removes only the pages the plugin created and
//! deliberately leaves user-entered settings and theme records in place.

pub mod catalog;

use serde::Serialize;
use tracing::{info, warn};

use veneer_store::{RecordStore, Result};

/// What an install run did: sub-steps that created something vs. sub-steps
/// skipped because the record already existed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallReport {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

/// What an uninstall run did. Failures are per-item and logged, never
/// propagated, so the report is the only signal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UninstallReport {
    pub removed_pages: Vec<String>,
    pub preserved: Vec<String>,
    pub cache_cleared: bool,
}

pub struct Provisioner<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> Provisioner<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Idempotent provisioning: register doctypes, create desk pages, seed
    /// the settings record and starter themes. Safe to invoke on every
    /// install run.
    pub async fn install(&self) -> Result<InstallReport> {
        let mut report = InstallReport::default();

        for schema in catalog::doctype_schemas() {
            if self.store.doctype_exists(&schema.name).await? {
                report.skipped.push(format!("doctype:{}", schema.name));
            } else {
                self.store.create_doctype(&schema).await?;
                info!(doctype = %schema.name, "registered doctype");
                report.created.push(format!("doctype:{}", schema.name));
            }
        }

        for page in catalog::default_pages() {
            if self.store.page_exists(&page.name).await? {
                report.skipped.push(format!("page:{}", page.name));
            } else {
                self.store.create_page(&page).await?;
                info!(page = %page.name, "created desk page");
                report.created.push(format!("page:{}", page.name));
            }
        }

        if self.store.ui_settings().await?.is_some() {
            report.skipped.push("settings".to_string());
        } else {
            self.store
                .save_ui_settings(&catalog::default_settings())
                .await?;
            info!("saved default settings");
            report.created.push("settings".to_string());
        }

        for theme in catalog::starter_themes() {
            if self.store.theme_exists(&theme.theme_name).await? {
                report.skipped.push(format!("theme:{}", theme.theme_name));
            } else {
                self.store.insert_theme(&theme).await?;
                info!(theme = %theme.theme_name, "seeded starter theme");
                report.created.push(format!("theme:{}", theme.theme_name));
            }
        }

        Ok(report)
    }

    /// Best-effort cleanup. Each page removal failure is logged and the
    /// remaining steps continue; settings and theme records are preserved
    /// on purpose. The transient cache is cleared last and a failure there
    /// is non-fatal.
    pub async fn uninstall(&self) -> UninstallReport {
        let mut report = UninstallReport::default();

        for page in catalog::default_pages() {
            match self.store.delete_page(&page.name).await {
                Ok(true) => {
                    info!(page = %page.name, "removed desk page");
                    report.removed_pages.push(page.name);
                }
                Ok(false) => {}
                Err(e) => {
                    warn!(page = %page.name, error = %e, "could not remove page, continuing");
                }
            }
        }

        for doctype in [catalog::SETTINGS_DOCTYPE, catalog::THEME_DOCTYPE] {
            info!(doctype, "user data preserved");
            report.preserved.push(doctype.to_string());
        }

        match self.store.clear_cache().await {
            Ok(()) => report.cache_cleared = true,
            Err(e) => warn!(error = %e, "could not clear cache"),
        }

        report
    }
}
