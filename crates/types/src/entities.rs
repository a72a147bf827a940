use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a record fails construction-time validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("theme name must not be empty")]
    EmptyThemeName,

    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("unknown priority '{0}'")]
    UnknownPriority(String),
}

/// Desk theme selected in the settings record.
///
/// The two accessibility values are what the suggestion engine checks for;
/// the wire spellings match the host's select-field options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Default,
    Dark,
    Light,
    Custom,
    #[serde(rename = "High Contrast")]
    HighContrast,
    Accessible,
}

impl ThemeMode {
    /// Whether this mode is one of the accessibility-oriented themes.
    pub fn is_accessible(&self) -> bool {
        matches!(self, ThemeMode::HighContrast | ThemeMode::Accessible)
    }
}

/// Cosmetic desk settings. At most one logical instance is consulted; a
/// missing record means "everything on" with the default theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    pub enable_animations: bool,
    pub modern_theme: ThemeMode,
    pub enable_glassmorphism: bool,
    pub enable_shadows: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            enable_animations: true,
            modern_theme: ThemeMode::Default,
            enable_glassmorphism: true,
            enable_shadows: true,
        }
    }
}

/// A named desk theme with optional brand colors and custom CSS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub theme_name: String,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub css_code: Option<String>,
}

impl Theme {
    /// Build a validated theme. The name must be non-empty and colors, when
    /// present, must be `#rrggbb` hex strings.
    pub fn new(
        theme_name: impl Into<String>,
        primary_color: Option<String>,
        secondary_color: Option<String>,
    ) -> Result<Self, ValidationError> {
        let theme_name = theme_name.into();
        if theme_name.trim().is_empty() {
            return Err(ValidationError::EmptyThemeName);
        }
        for color in [&primary_color, &secondary_color].into_iter().flatten() {
            if !is_hex_color(color) {
                return Err(ValidationError::InvalidColor(color.clone()));
            }
        }
        Ok(Self {
            theme_name,
            primary_color,
            secondary_color,
            css_code: None,
        })
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css_code = Some(css.into());
        self
    }

    /// True when the theme carries a non-empty custom CSS block.
    pub fn has_custom_css(&self) -> bool {
        self.css_code.as_deref().is_some_and(|css| !css.trim().is_empty())
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Outcome status of a logged upgrade check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckStatus {
    #[default]
    Pending,
    Checked,
    Error,
}

/// One row of the append-only upgrade-check log. Created by the API layer,
/// never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeCheck {
    pub current_version: String,
    pub latest_version: String,
    pub update_available: bool,
    pub last_checked: DateTime<Utc>,
    #[serde(default)]
    pub release_notes: String,
    #[serde(default)]
    pub release_url: String,
    pub status: CheckStatus,
}

/// Suggestion category, ordered for stable grouping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Theme,
    Performance,
    Accessibility,
    #[serde(rename = "User Experience")]
    UserExperience,
    General,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Theme => "Theme",
            Category::Performance => "Performance",
            Category::Accessibility => "Accessibility",
            Category::UserExperience => "User Experience",
            Category::General => "General",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "theme" => Ok(Category::Theme),
            "performance" => Ok(Category::Performance),
            "accessibility" => Ok(Category::Accessibility),
            "user experience" | "user-experience" | "ux" => Ok(Category::UserExperience),
            "general" => Ok(Category::General),
            _ => Err(ValidationError::UnknownCategory(value.to_string())),
        }
    }
}

/// Normalized three-valued priority, ordered high to low.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(name)
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ValidationError::UnknownPriority(value.to_string())),
        }
    }
}

/// A generated improvement recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: Category,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action: String,
    pub icon: String,
}

impl Suggestion {
    pub fn new(
        category: Category,
        priority: Priority,
        title: &str,
        description: &str,
        action: &str,
        icon: &str,
    ) -> Self {
        Self {
            category,
            priority,
            title: title.to_string(),
            description: description.to_string(),
            action: action.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// User-driven lifecycle status of a stored suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SuggestionStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Dismissed,
}

/// A suggestion persisted to the record store, with its lifecycle fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    #[serde(flatten)]
    pub suggestion: Suggestion,
    pub status: SuggestionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SuggestionRecord {
    /// Wrap a freshly generated suggestion as a pending record.
    pub fn pending(suggestion: Suggestion) -> Self {
        Self {
            suggestion,
            status: SuggestionStatus::Pending,
            completed_on: None,
            notes: None,
        }
    }
}
