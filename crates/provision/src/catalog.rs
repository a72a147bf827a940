//! Declarative catalog of everything the plugin provisions.
//!
//! These are configuration artifacts consumed at install time: doctype
//! schemas, desk pages and starter themes. The host store treats them as
//! opaque declarations.

use veneer_types::{
    DoctypeSchema, FieldDef, FieldType, PageSpec, PermissionRule, Theme, UiSettings,
};

pub const MODULE: &str = "Veneer";

pub const SETTINGS_DOCTYPE: &str = "UI Settings";
pub const THEME_DOCTYPE: &str = "Theme Manager";
pub const UPGRADE_CHECK_DOCTYPE: &str = "Upgrade Check";
pub const SUGGESTION_DOCTYPE: &str = "UI Suggestions";

/// The four doctype schemas, in provisioning order.
pub fn doctype_schemas() -> Vec<DoctypeSchema> {
    vec![
        settings_schema(),
        theme_schema(),
        upgrade_check_schema(),
        suggestion_schema(),
    ]
}

fn settings_schema() -> DoctypeSchema {
    DoctypeSchema {
        name: SETTINGS_DOCTYPE.to_string(),
        module: MODULE.to_string(),
        fields: vec![
            FieldDef::new("enable_animations", "Enable Animations", FieldType::Check)
                .default_value("1"),
            FieldDef::new("modern_theme", "Modern Theme", FieldType::Select)
                .options("Default\nDark\nLight\nCustom\nHigh Contrast\nAccessible"),
            FieldDef::new(
                "enable_glassmorphism",
                "Enable Glassmorphism",
                FieldType::Check,
            )
            .default_value("1"),
            FieldDef::new("enable_shadows", "Enable Shadows", FieldType::Check)
                .default_value("1"),
        ],
        permissions: vec![PermissionRule::full("System Manager")],
    }
}

fn theme_schema() -> DoctypeSchema {
    DoctypeSchema {
        name: THEME_DOCTYPE.to_string(),
        module: MODULE.to_string(),
        fields: vec![
            FieldDef::new("theme_name", "Theme Name", FieldType::Data).required(),
            FieldDef::new("primary_color", "Primary Color", FieldType::Color),
            FieldDef::new("secondary_color", "Secondary Color", FieldType::Color),
            FieldDef::new("css_code", "Custom CSS", FieldType::Code).options("CSS"),
        ],
        permissions: vec![PermissionRule::full("System Manager")],
    }
}

fn upgrade_check_schema() -> DoctypeSchema {
    DoctypeSchema {
        name: UPGRADE_CHECK_DOCTYPE.to_string(),
        module: MODULE.to_string(),
        fields: vec![
            FieldDef::new("current_version", "Current Version", FieldType::Data).read_only(),
            FieldDef::new("latest_version", "Latest Version", FieldType::Data).read_only(),
            FieldDef::new("update_available", "Update Available", FieldType::Check).read_only(),
            FieldDef::new("last_checked", "Last Checked", FieldType::Datetime).read_only(),
            FieldDef::new("release_notes", "Release Notes", FieldType::TextEditor).read_only(),
            FieldDef::new("release_url", "Release URL", FieldType::Data).read_only(),
            FieldDef::new("status", "Status", FieldType::Select)
                .options("Pending\nChecked\nError")
                .default_value("Pending"),
        ],
        permissions: vec![PermissionRule::full("System Manager")],
    }
}

fn suggestion_schema() -> DoctypeSchema {
    DoctypeSchema {
        name: SUGGESTION_DOCTYPE.to_string(),
        module: MODULE.to_string(),
        fields: vec![
            FieldDef::new("category", "Category", FieldType::Select)
                .options("Theme\nPerformance\nAccessibility\nUser Experience\nGeneral")
                .required(),
            FieldDef::new("priority", "Priority", FieldType::Select)
                .options("High\nMedium\nLow")
                .default_value("Medium")
                .required(),
            FieldDef::new("title", "Title", FieldType::Data).required(),
            FieldDef::new("description", "Description", FieldType::TextEditor).required(),
            FieldDef::new("action", "Recommended Action", FieldType::Text).required(),
            FieldDef::new("icon", "Icon", FieldType::Data),
            FieldDef::new("status", "Status", FieldType::Select)
                .options("Pending\nIn Progress\nCompleted\nDismissed")
                .default_value("Pending"),
            FieldDef::new("completed_on", "Completed On", FieldType::Date),
            FieldDef::new("notes", "Notes", FieldType::Text),
        ],
        permissions: vec![
            PermissionRule::full("System Manager"),
            PermissionRule::full("Administrator"),
        ],
    }
}

/// Desk pages the plugin owns. Uninstall removes exactly these.
pub fn default_pages() -> Vec<PageSpec> {
    vec![
        PageSpec {
            name: "modern-dashboard".to_string(),
            title: "Modern Dashboard".to_string(),
            module: MODULE.to_string(),
            content: "<div class=\"modern-dashboard\">\
                      <h1>Modern Dashboard</h1>\
                      <p>Enhanced dashboard with a modern desk layout.</p>\
                      </div>"
                .to_string(),
        },
        PageSpec {
            name: "modern-login".to_string(),
            title: "Modern Login".to_string(),
            module: MODULE.to_string(),
            content: "<div class=\"modern-login-page\">\
                      <h1>Modern Login</h1>\
                      <p>Enhanced login experience with a modern design.</p>\
                      </div>"
                .to_string(),
        },
        PageSpec {
            name: "modern-setup".to_string(),
            title: "Modern Setup".to_string(),
            module: MODULE.to_string(),
            content: "<div class=\"modern-setup-page\">\
                      <h1>Modern Setup</h1>\
                      <p>Enhanced setup wizard with a modern design.</p>\
                      </div>"
                .to_string(),
        },
    ]
}

/// Starter themes seeded on first install.
pub fn starter_themes() -> Vec<Theme> {
    vec![
        Theme {
            theme_name: "Modern Light".to_string(),
            primary_color: Some("#2563eb".to_string()),
            secondary_color: Some("#f8fafc".to_string()),
            css_code: None,
        },
        Theme {
            theme_name: "Modern Dark".to_string(),
            primary_color: Some("#1e293b".to_string()),
            secondary_color: Some("#334155".to_string()),
            css_code: None,
        },
        Theme {
            theme_name: "Deep Blue".to_string(),
            primary_color: Some("#1e40af".to_string()),
            secondary_color: Some("#dbeafe".to_string()),
            css_code: None,
        },
    ]
}

/// Initial settings record: everything on, default theme.
pub fn default_settings() -> UiSettings {
    UiSettings::default()
}
