//! Registry consistency checks run before the site is served or exported.

use std::collections::HashSet;

use thiserror::Error;

use super::types::{CategoryDescriptor, ToolDescriptor, ALL_CATEGORY};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate tool id '{0}'")]
    DuplicateTool(String),

    #[error("tool id '{0}' is not a URL-safe slug")]
    InvalidSlug(String),

    #[error("tool '{id}' has path '{path}', expected '/tools/{id}'")]
    PathMismatch { id: String, path: String },

    #[error("tool '{0}' has an empty name or description")]
    MissingText(String),

    #[error("tool '{id}' references unknown category '{category}'")]
    UnknownCategory { id: String, category: String },

    #[error("tool '{0}' uses the reserved 'all' category")]
    WildcardCategory(String),

    #[error("duplicate category id '{0}'")]
    DuplicateCategory(String),

    #[error("category list has no 'all' entry")]
    MissingWildcard,
}

/// Check every invariant tying tools to categories.
///
/// Returns every violation, not just the first.
pub fn validate_registry(
    tools: &[ToolDescriptor],
    categories: &[CategoryDescriptor],
) -> Result<(), Vec<CatalogError>> {
    let mut errors = Vec::new();

    let mut category_ids = HashSet::new();
    for category in categories {
        if !category_ids.insert(category.id) {
            errors.push(CatalogError::DuplicateCategory(category.id.to_string()));
        }
    }
    if !categories.iter().any(CategoryDescriptor::is_wildcard) {
        errors.push(CatalogError::MissingWildcard);
    }

    let mut tool_ids = HashSet::new();
    for tool in tools {
        if !tool_ids.insert(tool.id) {
            errors.push(CatalogError::DuplicateTool(tool.id.to_string()));
        }
        if !is_slug(tool.id) {
            errors.push(CatalogError::InvalidSlug(tool.id.to_string()));
        }
        if tool.path.strip_prefix("/tools/") != Some(tool.id) {
            errors.push(CatalogError::PathMismatch {
                id: tool.id.to_string(),
                path: tool.path.to_string(),
            });
        }
        if tool.name.trim().is_empty() || tool.description.trim().is_empty() {
            errors.push(CatalogError::MissingText(tool.id.to_string()));
        }
        if tool.category == ALL_CATEGORY {
            errors.push(CatalogError::WildcardCategory(tool.id.to_string()));
        } else if !category_ids.contains(tool.category) {
            errors.push(CatalogError::UnknownCategory {
                id: tool.id.to_string(),
                category: tool.category.to_string(),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Lowercase ASCII letters, digits and single inner hyphens.
fn is_slug(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && !id.contains("--")
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{all_categories, all_tools};

    fn tool(id: &'static str, category: &'static str, path: &'static str) -> ToolDescriptor {
        ToolDescriptor {
            id,
            name: "Name",
            description: "Description",
            category,
            path,
        }
    }

    #[test]
    fn shipped_registry_is_valid() {
        assert_eq!(validate_registry(all_tools(), all_categories()), Ok(()));
    }

    #[test]
    fn reports_every_violation() {
        let tools = vec![
            tool("dup", "encoding", "/tools/dup"),
            tool("dup", "encoding", "/tools/dup"),
            tool("Bad_Slug", "encoding", "/tools/Bad_Slug"),
            tool("moved", "encoding", "/utilities/moved"),
            tool("orphan", "nowhere", "/tools/orphan"),
            tool("greedy", "all", "/tools/greedy"),
        ];
        let errors = validate_registry(&tools, all_categories()).unwrap_err();

        assert!(errors.contains(&CatalogError::DuplicateTool("dup".into())));
        assert!(errors.contains(&CatalogError::InvalidSlug("Bad_Slug".into())));
        assert!(errors.contains(&CatalogError::PathMismatch {
            id: "moved".into(),
            path: "/utilities/moved".into(),
        }));
        assert!(errors.contains(&CatalogError::UnknownCategory {
            id: "orphan".into(),
            category: "nowhere".into(),
        }));
        assert!(errors.contains(&CatalogError::WildcardCategory("greedy".into())));
    }

    #[test]
    fn category_list_needs_wildcard() {
        let categories = [CategoryDescriptor { id: "encoding", icon: "x" }];
        let errors = validate_registry(&[], &categories).unwrap_err();
        assert_eq!(errors, vec![CatalogError::MissingWildcard]);
    }

    #[test]
    fn slug_rules() {
        assert!(is_slug("json-formatter"));
        assert!(is_slug("base64"));
        assert!(!is_slug(""));
        assert!(!is_slug("-leading"));
        assert!(!is_slug("double--hyphen"));
        assert!(!is_slug("with space"));
    }
}
