//! Encoders and converters: encoding, conversion

use crate::catalog::types::ToolDescriptor;

pub fn data_encoding_tools() -> Vec<ToolDescriptor> {
    vec![
        // ENCODING (4 tools)
        ToolDescriptor {
            id: "base64",
            name: "Base64 Encoder",
            description: "Encode text to Base64 or decode Base64 back to plain text.",
            category: "encoding",
            path: "/tools/base64",
        },
        ToolDescriptor {
            id: "url-encoder",
            name: "URL Encoder",
            description: "Percent-encode query string values or decode them back.",
            category: "encoding",
            path: "/tools/url-encoder",
        },
        ToolDescriptor {
            id: "html-entities",
            name: "HTML Entity Encoder",
            description: "Escape special characters as HTML entities and unescape them again.",
            category: "encoding",
            path: "/tools/html-entities",
        },
        ToolDescriptor {
            id: "jwt-decoder",
            name: "JWT Decoder",
            description: "Inspect the header and payload of a JSON Web Token without verifying it.",
            category: "encoding",
            path: "/tools/jwt-decoder",
        },
        // CONVERSION (4 tools)
        ToolDescriptor {
            id: "timestamp-converter",
            name: "Timestamp Converter",
            description: "Convert Unix timestamps to RFC 3339 dates and back.",
            category: "conversion",
            path: "/tools/timestamp-converter",
        },
        ToolDescriptor {
            id: "color-converter",
            name: "Color Converter",
            description: "Convert colors between HEX, RGB and HSL notations.",
            category: "conversion",
            path: "/tools/color-converter",
        },
        ToolDescriptor {
            id: "csv-to-json",
            name: "CSV to JSON",
            description: "Turn CSV tables into JSON arrays of objects keyed by the header row.",
            category: "conversion",
            path: "/tools/csv-to-json",
        },
        ToolDescriptor {
            id: "number-base-converter",
            name: "Number Base Converter",
            description: "Convert numbers between binary, octal, decimal and hexadecimal.",
            category: "conversion",
            path: "/tools/number-base-converter",
        },
    ]
}
