//! Core types for the static tool catalog.

use serde::Serialize;

/// Category id that selects every tool. Never used as a tool's own category.
pub const ALL_CATEGORY: &str = "all";

/// Metadata for a single tool page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    /// URL-safe slug, unique across the registry
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Id of the owning [`CategoryDescriptor`]
    pub category: &'static str,
    /// Site-relative URL, always `/tools/<id>`
    pub path: &'static str,
}

/// A filter grouping shown on the homepage.
///
/// The display label is not stored here; it comes from the translation
/// table keyed by `id` (see [`crate::i18n`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub id: &'static str,
    pub icon: &'static str,
}

impl CategoryDescriptor {
    pub fn is_wildcard(&self) -> bool {
        self.id == ALL_CATEGORY
    }
}
