//! Shared domain types for the veneer desk plugin.
//!
//! This crate defines the plain record types understood by the host record
//! store (settings, themes, upgrade checks, suggestions) together with the
//! schema descriptors the provisioner declares them with. Construction-time
//! validation lives here so that every other crate can assume well-formed
//! records.

pub mod entities;
pub mod schema;

pub use entities::{
    Category, CheckStatus, Priority, Suggestion, SuggestionRecord, SuggestionStatus, Theme,
    ThemeMode, UiSettings, UpgradeCheck, ValidationError,
};
pub use schema::{DoctypeSchema, FieldDef, FieldType, PageSpec, PermissionRule};
