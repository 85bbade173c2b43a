//! Recovery of a JSON object embedded in free-text completion output.
//!
//! The service is asked for bare JSON but often wraps it in a fenced block
//! or surrounds it with prose. Extraction tries, in order:
//!
//! 1. the contents of a ```` ```json ```` fenced block (label matched
//!    case-insensitively),
//! 2. the span from the first `{` to the last `}`.
//!
//! Nothing smaller than that span is tried, so a malformed outer object is a
//! failure even when a nested fragment would parse. Every path returns an
//! [`Extraction`]; malformed input never panics and the raw text is always
//! kept on failure.

use serde_json::{Map, Value};
use tracing::debug;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Object(Map<String, Value>),
    Failed { raw: String, reason: String },
}

/// Locate and parse the JSON object in a completion.
pub fn extract_json_object(raw: &str) -> Extraction {
    if let Some(fenced) = fenced_json(raw) {
        if let Some(object) = parse_object(fenced) {
            return Extraction::Object(object);
        }
        debug!("fenced json block did not parse, falling back to brace span");
    }

    let Some(first) = raw.find('{') else {
        return Extraction::Failed {
            raw: raw.to_string(),
            reason: "no JSON object found".to_string(),
        };
    };

    if let Some(last) = raw.rfind('}')
        && last > first
        && let Some(object) = parse_object(&raw[first..=last])
    {
        return Extraction::Object(object);
    }

    Extraction::Failed {
        raw: raw.to_string(),
        reason: "text contains braces but no parseable JSON object".to_string(),
    }
}

/// Contents of the first ```` ```json ```` block. An unclosed block runs to
/// the end of the text.
fn fenced_json(raw: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets aligned with `raw`.
    let lower = raw.to_ascii_lowercase();
    let start = lower.find(JSON_FENCE)? + JSON_FENCE.len();
    let rest = &raw[start..];
    let end = rest.find(FENCE).unwrap_or(rest.len());
    Some(rest[..end].trim())
}

fn parse_object(candidate: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate.trim()) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}
