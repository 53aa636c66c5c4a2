//! Defensive parsing of judge responses.
//!
//! Judges are asked for a bare JSON object but routinely wrap it in a code
//! fence, prefix it with prose, or append an explanation. These functions
//! are pure text processing with no I/O.
//!
//! # Functions
//!
//! | Function | Step |
//! |----------|------|
//! | [`strip_code_fence`] | Remove a surrounding ```` ``` ```` fence and its language tag |
//! | [`extract_json_object`] | Find the first balanced `{...}` span |
//! | [`parse_judge_response`] | Full pipeline into a [`ScoreVector`] |

use super::score::{DEFAULT_DIMENSION_SCORE, ScoreSource, ScoreVector, clamp_score};
use crate::core::dimension::CreativityDimension;
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a judge response could not be turned into scores
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Empty response")]
    Empty,

    #[error("No JSON object found in response")]
    NoJsonObject,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("JSON object contains none of the dimension keys")]
    NoScores,
}

/// Strip a code fence wrapping the whole response.
///
/// Handles both ```` ```json ```` and bare ```` ``` ```` fences; text without a
/// leading fence is returned trimmed but otherwise untouched.
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    if !text.starts_with("```") {
        return text;
    }

    let inner = text.trim_matches('`').trim_start();
    match inner.split_once('\n') {
        Some((first_line, rest)) if is_language_tag(first_line.trim()) => rest.trim(),
        _ => inner.trim(),
    }
}

fn is_language_tag(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Locate the first balanced `{...}` span.
///
/// Braces inside JSON string literals (including escaped quotes) are ignored
/// while counting depth. Returns `None` if there is no opening brace or the
/// first object is never closed.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse a raw judge response into a score vector.
///
/// Dimensions missing from the object (or holding non-numeric values) get
/// [`DEFAULT_DIMENSION_SCORE`]; numeric strings such as `"8"` are accepted;
/// values are clamped to `[0, 10]`. An object with none of the four dimension
/// keys is rejected. The returned vector carries the judge's `comments` and
/// [`ScoreSource::Single`].
///
/// # Examples
///
/// ```
/// use assess_domain::scoring::parsing::parse_judge_response;
///
/// let raw = "```json\n{\"fluency\": 8, \"flexibility\": 6, \"originality\": 9, \"elaboration\": 7}\n```";
/// let v = parse_judge_response(raw).unwrap();
/// assert_eq!(v.originality, 9.0);
/// ```
pub fn parse_judge_response(raw: &str) -> Result<ScoreVector, ParseError> {
    let text = strip_code_fence(raw);
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let json_str = extract_json_object(text).ok_or(ParseError::NoJsonObject)?;
    let map: Map<String, Value> =
        serde_json::from_str(json_str).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    if !CreativityDimension::ALL
        .iter()
        .any(|d| map.contains_key(d.as_str()))
    {
        return Err(ParseError::NoScores);
    }

    let comments = match map.get("comments") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };

    Ok(ScoreVector::from_fn(|d| dimension_value(&map, d))
        .with_comments(comments)
        .with_source(ScoreSource::Single))
}

fn dimension_value(map: &Map<String, Value>, dimension: CreativityDimension) -> f64 {
    let value = match map.get(dimension.as_str()) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite()),
        _ => None,
    };
    clamp_score(value.unwrap_or(DEFAULT_DIMENSION_SCORE))
}
