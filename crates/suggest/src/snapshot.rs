//! Read-only snapshot of the state the analyzers inspect.

use tracing::warn;

use veneer_store::RecordStore;
use veneer_types::UiSettings;

/// Everything the analyzer passes look at. Loading never fails: a missing
/// settings record or a store error degrades to defaults, logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSnapshot {
    pub settings: UiSettings,
    pub theme_count: u64,
    pub themes_with_css: u64,
}

impl SettingsSnapshot {
    pub fn new(settings: UiSettings, theme_count: u64, themes_with_css: u64) -> Self {
        Self {
            settings,
            theme_count,
            themes_with_css,
        }
    }

    pub async fn load(store: &dyn RecordStore) -> Self {
        let settings = match store.ui_settings().await {
            Ok(Some(settings)) => settings,
            Ok(None) => UiSettings::default(),
            Err(e) => {
                warn!(error = %e, "settings unavailable, analyzing defaults");
                UiSettings::default()
            }
        };

        let theme_count = store.theme_count().await.unwrap_or_else(|e| {
            warn!(error = %e, "theme count unavailable");
            0
        });
        let themes_with_css = store.themes_with_css().await.unwrap_or_else(|e| {
            warn!(error = %e, "themed CSS count unavailable");
            0
        });

        Self::new(settings, theme_count, themes_with_css)
    }
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self::new(UiSettings::default(), 0, 0)
    }
}
