//! Server-side transforms for the text tools.
//!
//! Each runnable tool exposes a fixed list of modes; the first one is the
//! default. Tools with no modes (image tools and the interactive ones) only
//! work in the browser.

mod text;

use thiserror::Error;

use crate::catalog::find_tool;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("'{0}' runs in the browser")]
    BrowserOnly(String),

    #[error("'{tool}' has no mode '{mode}' (expected one of: {expected})")]
    UnknownMode {
        tool: String,
        mode: String,
        expected: String,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Modes supported by the tool with `id`. Empty for browser-only tools.
pub fn modes(id: &str) -> &'static [&'static str] {
    match id {
        "base64" | "url-encoder" | "html-entities" => &["encode", "decode"],
        "jwt-decoder" => &["decode"],
        "json-formatter" => &["format", "minify"],
        "timestamp-converter" => &["to-date", "to-unix"],
        "hash-generator" => &["sha256", "md5"],
        "uuid-generator" => &["generate"],
        "case-converter" => &["upper", "lower", "snake", "kebab", "camel"],
        "word-counter" => &["count"],
        _ => &[],
    }
}

/// Run tool `id` over `input`. `mode` defaults to the tool's first mode.
pub fn run(id: &str, input: &str, mode: Option<&str>) -> Result<String, RunError> {
    if find_tool(id).is_none() {
        return Err(RunError::UnknownTool(id.to_string()));
    }

    let supported = modes(id);
    let Some(&default_mode) = supported.first() else {
        return Err(RunError::BrowserOnly(id.to_string()));
    };

    let mode = mode.filter(|m| !m.is_empty()).unwrap_or(default_mode);
    if !supported.iter().any(|m| *m == mode) {
        return Err(RunError::UnknownMode {
            tool: id.to_string(),
            mode: mode.to_string(),
            expected: supported.join(", "),
        });
    }

    log::debug!("Running tool {id} in mode {mode} ({} bytes)", input.len());

    match (id, mode) {
        ("base64", "encode") => Ok(text::base64_encode(input)),
        ("base64", "decode") => text::base64_decode(input),
        ("url-encoder", "encode") => Ok(text::url_encode(input)),
        ("url-encoder", "decode") => text::url_decode(input),
        ("html-entities", "encode") => Ok(text::html_encode(input)),
        ("html-entities", "decode") => Ok(text::html_decode(input)),
        ("jwt-decoder", _) => text::jwt_decode(input),
        ("json-formatter", "format") => text::json_format(input, true),
        ("json-formatter", "minify") => text::json_format(input, false),
        ("timestamp-converter", "to-date") => text::unix_to_date(input),
        ("timestamp-converter", "to-unix") => text::date_to_unix(input),
        ("hash-generator", algorithm) => Ok(text::hash(input, algorithm)),
        ("uuid-generator", _) => text::uuids(input),
        ("case-converter", case) => Ok(text::convert_case(input, case)),
        ("word-counter", _) => Ok(text::word_count(input)),
        _ => Err(RunError::BrowserOnly(id.to_string())),
    }
}
