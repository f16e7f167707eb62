//! Individual text transforms.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use super::RunError;

const MAX_UUIDS: usize = 100;

/// Timestamps at or above this magnitude are read as milliseconds.
const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

fn invalid(message: impl Into<String>) -> RunError {
    RunError::InvalidInput(message.into())
}

pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input)
}

pub fn base64_decode(input: &str) -> Result<String, RunError> {
    let bytes = STANDARD
        .decode(input.trim())
        .map_err(|e| invalid(format!("not valid Base64: {e}")))?;
    String::from_utf8(bytes).map_err(|_| invalid("decoded bytes are not UTF-8 text"))
}

pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

pub fn url_decode(input: &str) -> Result<String, RunError> {
    urlencoding::decode(input)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| invalid("decoded bytes are not UTF-8 text"))
}

pub fn html_encode(input: &str) -> String {
    html_escape::encode_safe(input).into_owned()
}

pub fn html_decode(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}

/// Decode the header and payload segments. The signature is not checked.
pub fn jwt_decode(input: &str) -> Result<String, RunError> {
    let token = input.trim();
    let mut segments = token.split('.');
    let (Some(header), Some(payload)) = (segments.next(), segments.next()) else {
        return Err(invalid("a JWT has at least two dot-separated segments"));
    };

    let decode_segment = |name: &str, segment: &str| -> Result<Value, RunError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(segment.trim_end_matches('='))
            .map_err(|e| invalid(format!("{name} is not base64url: {e}")))?;
        serde_json::from_slice(&bytes).map_err(|e| invalid(format!("{name} is not JSON: {e}")))
    };

    let decoded = json!({
        "header": decode_segment("header", header)?,
        "payload": decode_segment("payload", payload)?,
    });
    serde_json::to_string_pretty(&decoded).map_err(|e| invalid(e.to_string()))
}

pub fn json_format(input: &str, pretty: bool) -> Result<String, RunError> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| invalid(format!("not valid JSON: {e}")))?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    rendered.map_err(|e| invalid(e.to_string()))
}

pub fn unix_to_date(input: &str) -> Result<String, RunError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| invalid(format!("'{}' is not a whole number", input.trim())))?;

    let (date, format) = if value.unsigned_abs() >= MILLIS_THRESHOLD.unsigned_abs() {
        (DateTime::<Utc>::from_timestamp_millis(value), SecondsFormat::Millis)
    } else {
        (DateTime::<Utc>::from_timestamp(value, 0), SecondsFormat::Secs)
    };

    date.map(|date| date.to_rfc3339_opts(format, true))
        .ok_or_else(|| invalid(format!("{value} is out of range")))
}

pub fn date_to_unix(input: &str) -> Result<String, RunError> {
    let date = DateTime::parse_from_rfc3339(input.trim())
        .map_err(|e| invalid(format!("expected an RFC 3339 date: {e}")))?;
    Ok(date.timestamp().to_string())
}

pub fn hash(input: &str, algorithm: &str) -> String {
    match algorithm {
        "md5" => format!("{:x}", md5::compute(input.as_bytes())),
        _ => format!("{:x}", Sha256::digest(input.as_bytes())),
    }
}

/// Generate `input` v4 UUIDs (one when empty), newline separated.
pub fn uuids(input: &str) -> Result<String, RunError> {
    let count = match input.trim() {
        "" => 1,
        text => text
            .parse::<usize>()
            .map_err(|_| invalid(format!("'{text}' is not a count")))?,
    };
    if count == 0 || count > MAX_UUIDS {
        return Err(invalid(format!("count must be between 1 and {MAX_UUIDS}")));
    }

    Ok((0..count)
        .map(|_| uuid::Uuid::new_v4().to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn convert_case(input: &str, case: &str) -> String {
    match case {
        "upper" => input.to_uppercase(),
        "lower" => input.to_lowercase(),
        "snake" => lower_words(input).join("_"),
        "kebab" => lower_words(input).join("-"),
        _ => {
            let mut words = lower_words(input).into_iter();
            let mut camel = words.next().unwrap_or_default();
            for word in words {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    camel.extend(first.to_uppercase());
                    camel.push_str(chars.as_str());
                }
            }
            camel
        }
    }
}

/// Split on non-alphanumerics and on lower-to-upper boundaries (`fooBar`).
fn lower_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in input.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

pub fn word_count(input: &str) -> String {
    format!(
        "words: {}\ncharacters: {}\nlines: {}",
        input.split_whitespace().count(),
        input.chars().count(),
        input.lines().count()
    )
}
