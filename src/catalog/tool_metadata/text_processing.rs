//! Formatters and plain text utilities: formatting, text

use crate::catalog::types::ToolDescriptor;

pub fn formatting_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            id: "json-formatter",
            name: "JSON Formatter",
            description: "Pretty-print, validate and minify JSON documents with configurable indentation.",
            category: "formatting",
            path: "/tools/json-formatter",
        },
        ToolDescriptor {
            id: "xml-formatter",
            name: "XML Formatter",
            description: "Pretty-print XML markup and spot unbalanced tags before they reach production.",
            category: "formatting",
            path: "/tools/xml-formatter",
        },
        ToolDescriptor {
            id: "sql-formatter",
            name: "SQL Formatter",
            description: "Beautify SQL queries with consistent indentation and upper-case keywords.",
            category: "formatting",
            path: "/tools/sql-formatter",
        },
        ToolDescriptor {
            id: "css-formatter",
            name: "CSS Formatter",
            description: "Format or minify CSS stylesheets.",
            category: "formatting",
            path: "/tools/css-formatter",
        },
    ]
}

pub fn text_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            id: "case-converter",
            name: "Case Converter",
            description: "Switch text between UPPER, lower, snake_case, kebab-case and camelCase.",
            category: "text",
            path: "/tools/case-converter",
        },
        ToolDescriptor {
            id: "word-counter",
            name: "Word Counter",
            description: "Count words, characters and lines in a block of text.",
            category: "text",
            path: "/tools/word-counter",
        },
        ToolDescriptor {
            id: "text-diff",
            name: "Text Diff",
            description: "Compare two blocks of text line by line and highlight what changed.",
            category: "text",
            path: "/tools/text-diff",
        },
        ToolDescriptor {
            id: "regex-tester",
            name: "Regex Tester",
            description: "Test regular expressions against sample text with live match highlighting.",
            category: "text",
            path: "/tools/regex-tester",
        },
    ]
}
