//! Canned upgrade instructions shown alongside the check result.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UpgradeInstructions {
    pub instructions: Vec<String>,
    pub backup_warning: String,
    pub support_url: String,
}

/// Fixed step list for applying a released update. Translation is layered
/// on by the API layer.
pub fn upgrade_instructions() -> UpgradeInstructions {
    UpgradeInstructions {
        instructions: vec![
            "1. Navigate to your deployment directory".to_string(),
            "2. Pull the latest release tag".to_string(),
            "3. Rebuild the plugin assets".to_string(),
            "4. Restart the host application".to_string(),
            "5. Clear browser cache and refresh".to_string(),
        ],
        backup_warning: "Always backup your site before updating!".to_string(),
        support_url: "https://github.com/veneer-desk/veneer/issues".to_string(),
    }
}
