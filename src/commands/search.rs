use anyhow::Result;

use crate::catalog::{all_tools, filter_tools, find_category};

pub fn handle_search(query: &str, category: &str) -> Result<()> {
    if find_category(category).is_none() {
        log::warn!("Unknown category '{category}', nothing can match");
    }

    let matches = filter_tools(query, category, all_tools());
    if matches.is_empty() {
        println!("No tools match your search.");
        return Ok(());
    }

    for tool in matches {
        println!("{:<22} {:<12} {}", tool.id, tool.category, tool.name);
    }
    Ok(())
}
