//! Homepage filter: category selection plus case-insensitive text search.

use super::types::{ToolDescriptor, ALL_CATEGORY};

/// Returns the tools from `registry` that belong to `category_id` and whose
/// name or description contains `query`, ignoring case.
///
/// Registry order is preserved. An empty query matches every tool and the
/// `all` category matches every category. An unknown category id is not an
/// error, it simply matches nothing.
pub fn filter_tools<'a>(
    query: &str,
    category_id: &str,
    registry: &'a [ToolDescriptor],
) -> Vec<&'a ToolDescriptor> {
    let needle = query.to_lowercase();

    registry
        .iter()
        .filter(|tool| category_matches(tool, category_id))
        .filter(|tool| text_matches(tool, &needle))
        .collect()
}

fn category_matches(tool: &ToolDescriptor, category_id: &str) -> bool {
    category_id == ALL_CATEGORY || tool.category == category_id
}

/// `needle` must already be lowercased.
fn text_matches(tool: &ToolDescriptor, needle: &str) -> bool {
    needle.is_empty()
        || tool.name.to_lowercase().contains(needle)
        || tool.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_tools;
    use proptest::prelude::*;

    fn ids(tools: &[&ToolDescriptor]) -> Vec<&'static str> {
        tools.iter().map(|tool| tool.id).collect()
    }

    fn owned(tools: Vec<&ToolDescriptor>) -> Vec<ToolDescriptor> {
        tools.into_iter().cloned().collect()
    }

    const NON_ASCII_TOOLS: &[ToolDescriptor] = &[
        ToolDescriptor {
            id: "aerger",
            name: "Ärger Tool",
            description: "Zählt Wörter in großen Texten.",
            category: "text",
            path: "/tools/aerger",
        },
        ToolDescriptor {
            id: "konverter",
            name: "Конвертер",
            description: "Преобразует ΣΊΣΥΦΟΣ в текст.",
            category: "conversion",
            path: "/tools/konverter",
        },
        ToolDescriptor {
            id: "eclair",
            name: "Éclair Builder",
            description: "Crème brûlée for JSON.",
            category: "formatting",
            path: "/tools/eclair",
        },
    ];

    fn mixed_registry() -> Vec<ToolDescriptor> {
        all_tools().iter().chain(NON_ASCII_TOOLS).cloned().collect()
    }

    #[test]
    fn empty_query_with_all_category_is_identity() {
        let registry = all_tools();
        let filtered = owned(filter_tools("", "all", registry));
        assert_eq!(filtered, registry.to_vec());
    }

    #[test]
    fn base64_query_finds_base64_tool() {
        let filtered = filter_tools("base64", "all", all_tools());
        assert!(ids(&filtered).contains(&"base64"));
    }

    #[test]
    fn xml_query_in_encoding_excludes_base64() {
        let filtered = filter_tools("xml", "encoding", all_tools());
        assert!(!ids(&filtered).contains(&"base64"));
    }

    #[test]
    fn query_is_case_insensitive_on_name_and_description() {
        let upper = filter_tools("BASE64", "all", all_tools());
        let lower = filter_tools("base64", "all", all_tools());
        assert_eq!(ids(&upper), ids(&lower));

        // "uploading" only appears in the image compressor description
        let by_description = filter_tools("UPLOADING", "all", all_tools());
        assert_eq!(ids(&by_description), vec!["image-compressor"]);
    }

    #[test]
    fn case_folding_covers_non_ascii_letters() {
        assert_eq!(ids(&filter_tools("äRGER", "all", NON_ASCII_TOOLS)), vec!["aerger"]);
        assert_eq!(ids(&filter_tools("ÄRGER", "text", NON_ASCII_TOOLS)), vec!["aerger"]);
        assert_eq!(ids(&filter_tools("КОНВ", "all", NON_ASCII_TOOLS)), vec!["konverter"]);
        assert_eq!(ids(&filter_tools("σίσυφος", "all", NON_ASCII_TOOLS)), vec!["konverter"]);
        assert_eq!(ids(&filter_tools("CRÈME", "all", NON_ASCII_TOOLS)), vec!["eclair"]);
        assert!(filter_tools("ÉCLAIR", "text", NON_ASCII_TOOLS).is_empty());
    }

    #[test]
    fn unknown_category_yields_empty_result() {
        assert!(filter_tools("", "does-not-exist", all_tools()).is_empty());
    }

    #[test]
    fn category_filter_keeps_registry_order() {
        let filtered = filter_tools("", "encoding", all_tools());
        assert_eq!(
            ids(&filtered),
            vec!["base64", "url-encoder", "html-entities", "jwt-decoder"]
        );
    }

    fn category_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("all".to_string()),
            Just("formatting".to_string()),
            Just("encoding".to_string()),
            Just("conversion".to_string()),
            Just("generators".to_string()),
            Just("text".to_string()),
            Just("image".to_string()),
            "[a-z]{1,8}",
        ]
    }

    proptest! {
        #[test]
        fn results_satisfy_both_predicates(query in "[a-zA-Z0-9 äÄéÉöÖσΣкК]{0,6}", category in category_strategy()) {
            let needle = query.to_lowercase();
            let registry = mixed_registry();
            for tool in filter_tools(&query, &category, &registry) {
                prop_assert!(category_matches(tool, &category));
                prop_assert!(text_matches(tool, &needle));
            }
        }

        #[test]
        fn no_matching_tool_is_dropped(query in "[a-zA-Z0-9 äÄéÉöÖσΣкК]{0,6}", category in category_strategy()) {
            let needle = query.to_lowercase();
            let registry = mixed_registry();
            let filtered = filter_tools(&query, &category, &registry);
            let expected = registry
                .iter()
                .filter(|tool| category_matches(tool, &category) && text_matches(tool, &needle))
                .count();
            prop_assert_eq!(filtered.len(), expected);
        }

        #[test]
        fn filtering_is_idempotent(query in "[a-zA-Z0-9 äÄéÉöÖσΣкК]{0,6}", category in category_strategy()) {
            let registry = mixed_registry();
            let once = owned(filter_tools(&query, &category, &registry));
            let twice = owned(filter_tools(&query, &category, &once));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn uppercased_name_finds_its_tool(index in 0usize..NON_ASCII_TOOLS.len()) {
            let tool = &NON_ASCII_TOOLS[index];
            let found = filter_tools(&tool.name.to_uppercase(), "all", NON_ASCII_TOOLS);
            prop_assert!(ids(&found).contains(&tool.id));
        }
    }
}
