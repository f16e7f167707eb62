//! Static tool catalog: descriptors, categories, filtering and validation.
//!
//! All data here is hardcoded and immutable for the lifetime of the process.

mod categories;
mod filter;
mod tool_metadata;
mod types;
mod validate;

pub use categories::{all_categories, find_category};
pub use filter::filter_tools;
pub use tool_metadata::all_tools;
pub use types::{ALL_CATEGORY, ToolDescriptor};
pub use validate::validate_registry;

/// Look up a tool by id.
pub fn find_tool(id: &str) -> Option<&'static ToolDescriptor> {
    all_tools().iter().find(|tool| tool.id == id)
}

/// Validate the shipped registry, logging each problem.
pub fn ensure_valid() -> anyhow::Result<()> {
    match validate_registry(all_tools(), all_categories()) {
        Ok(()) => Ok(()),
        Err(errors) => {
            for error in &errors {
                log::error!("Tool registry: {error}");
            }
            Err(anyhow::anyhow!(
                "Tool registry is invalid ({} problem{})",
                errors.len(),
                if errors.len() == 1 { "" } else { "s" }
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_tool_by_id() {
        let tool = find_tool("base64").unwrap();
        assert_eq!(tool.name, "Base64 Encoder");
        assert_eq!(tool.category, "encoding");
        assert!(find_tool("nope").is_none());
    }

    #[test]
    fn every_non_wildcard_category_has_tools() {
        for category in all_categories().iter().filter(|c| !c.is_wildcard()) {
            assert!(
                all_tools().iter().any(|tool| tool.category == category.id),
                "category {} is empty",
                category.id
            );
        }
    }
}
