//! Static descriptors for every tool across the six categories.
//!
//! Descriptors are grouped into submodules by family and concatenated in
//! homepage order. The order here is the order users see; filtering never
//! re-sorts it.

use super::types::ToolDescriptor;
use once_cell::sync::Lazy;

mod data_encoding;
mod generators;
mod media;
mod text_processing;

use data_encoding::data_encoding_tools;
use generators::generator_tools;
use media::media_tools;
use text_processing::{formatting_tools, text_tools};

/// All tools, built once on first access.
static CACHED_TOOLS: Lazy<Vec<ToolDescriptor>> = Lazy::new(|| {
    let mut tools = Vec::new();

    // Formatters (json, xml, sql, css)
    tools.extend(formatting_tools());

    // Encoders and converters (base64, url, html, jwt, timestamps, colors, csv, bases)
    tools.extend(data_encoding_tools());

    // Generators (uuid, hash, password)
    tools.extend(generator_tools());

    // Plain text utilities (case, diff, counter, regex)
    tools.extend(text_tools());

    // Image tools (browser only)
    tools.extend(media_tools());

    tools
});

/// Returns a static reference to the tool registry in display order.
pub fn all_tools() -> &'static [ToolDescriptor] {
    &CACHED_TOOLS
}
