//! Schema descriptors consumed by the host record store at startup.
//!
//! The host enforces nothing beyond these declarations; they exist so the
//! provisioner can register the plugin's doctypes and desk pages through the
//! store's generic create/exists primitives.

use serde::{Deserialize, Serialize};

/// Field types the plugin's doctypes use, matching the host's select options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Data,
    Check,
    Select,
    Color,
    Code,
    Datetime,
    Date,
    Text,
    #[serde(rename = "Text Editor")]
    TextEditor,
}

/// A single field declaration inside a doctype schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub fieldname: String,
    pub label: String,
    pub fieldtype: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub reqd: bool,
    #[serde(default)]
    pub read_only: bool,
}

impl FieldDef {
    pub fn new(fieldname: &str, label: &str, fieldtype: FieldType) -> Self {
        Self {
            fieldname: fieldname.to_string(),
            label: label.to_string(),
            fieldtype,
            options: None,
            default: None,
            reqd: false,
            read_only: false,
        }
    }

    /// Newline-separated select options, as the host expects them.
    pub fn options(mut self, options: &str) -> Self {
        self.options = Some(options.to_string());
        self
    }

    pub fn default_value(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.reqd = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

/// Role-based permission rule attached to a doctype schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRule {
    pub role: String,
    pub read: bool,
    pub write: bool,
    pub create: bool,
    pub delete: bool,
}

impl PermissionRule {
    /// Full CRUD access for a role.
    pub fn full(role: &str) -> Self {
        Self {
            role: role.to_string(),
            read: true,
            write: true,
            create: true,
            delete: true,
        }
    }
}

/// Declarative description of a custom doctype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctypeSchema {
    pub name: String,
    pub module: String,
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub permissions: Vec<PermissionRule>,
}

/// Declarative description of a desk page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub name: String,
    pub title: String,
    pub module: String,
    pub content: String,
}
