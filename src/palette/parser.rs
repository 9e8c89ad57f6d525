//! Best-effort parser for model replies
//!
//! Models are asked for a single-line array, but they reply with whatever
//! quoting they like:
//! ['#1DA1F2', '#14171A']
//! ["#1DA1F2", "#14171A"]
//!
//! Single quotes are coerced to double quotes and the result is read as a
//! flat JSON array of strings. Anything else is rejected.

use thiserror::Error;

/// Why a reply could not be turned into a list of colors
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("reply is not a valid array literal: {0}")]
    InvalidSyntax(#[source] serde_json::Error),
    #[error("reply is an array, but not an array of strings")]
    NotAnArrayOfStrings,
}

/// Replace every single quote with a double quote.
pub fn normalize_quotes(raw: &str) -> String {
    raw.replace('\'', "\"")
}

/// Parse raw reply text into color strings, in the order the model gave them.
///
/// Duplicates are kept; see [`super::dedup`].
pub fn parse_color_array(raw: &str) -> Result<Vec<String>, ParseError> {
    let normalized = normalize_quotes(raw);
    let value: serde_json::Value =
        serde_json::from_str(normalized.trim()).map_err(ParseError::InvalidSyntax)?;

    let serde_json::Value::Array(items) = value else {
        return Err(ParseError::NotAnArrayOfStrings);
    };

    items
        .into_iter()
        .map(|item| match item {
            serde_json::Value::String(s) => Ok(s),
            _ => Err(ParseError::NotAnArrayOfStrings),
        })
        .collect()
}
