// crates/ports/src/source.rs
use std::fmt;

use corpus_profile_shared_kernel::Result;
use serde::Serialize;

/// Number of units returned by a preview when no size is given.
pub const DEFAULT_PREVIEW: usize = 5;

/// One value yielded by a corpus source.
///
/// Row-oriented sources select a single field per row; whatever that field
/// holds ends up here. Only [`RawUnit::Text`] can be profiled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawUnit {
    Text(String),
    Null,
    Bool(bool),
    /// Kept in its textual form so no precision is lost.
    Number(String),
    Array(Vec<serde_json::Value>),
    Object(serde_json::Map<String, serde_json::Value>),
    /// The selected field does not exist in the row.
    Missing { field: String },
}

impl RawUnit {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> String {
        match self {
            Self::Text(_) => "text".to_string(),
            Self::Null => "null".to_string(),
            Self::Bool(_) => "boolean".to_string(),
            Self::Number(_) => "number".to_string(),
            Self::Array(_) => "array".to_string(),
            Self::Object(_) => "object".to_string(),
            Self::Missing { field } => format!("missing field '{field}'"),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The text, or the unit itself back when it is not text.
    pub fn into_text(self) -> std::result::Result<String, Self> {
        match self {
            Self::Text(text) => Ok(text),
            other => Err(other),
        }
    }
}

impl From<String> for RawUnit {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for RawUnit {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<serde_json::Value> for RawUnit {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(text) => Self::Text(text),
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n.to_string()),
            Value::Array(items) => Self::Array(items),
            Value::Object(map) => Self::Object(map),
        }
    }
}

impl fmt::Display for RawUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(n),
            Self::Array(items) => write!(f, "{}", serde_json::Value::Array(items.clone())),
            Self::Object(map) => write!(f, "{}", serde_json::Value::Object(map.clone())),
            Self::Missing { field } => write!(f, "<missing {field}>"),
        }
    }
}

/// Lazily produced units of one pass.
pub type UnitStream<'a> = Box<dyn Iterator<Item = Result<RawUnit>> + 'a>;

/// Port for anything that can supply a corpus.
///
/// Each call to [`units`](Self::units) starts a fresh pass from the
/// beginning. Failure to open is reported by `units` itself; failures while
/// iterating arrive as `Err` items and end the pass.
pub trait CorpusSource: Send + Sync {
    /// Human readable identification used in logs and errors.
    fn name(&self) -> String;

    fn units(&self) -> Result<UnitStream<'_>>;

    /// At most `n` units from a fresh pass. A shorter source yields fewer.
    fn head(&self, n: usize) -> Result<Vec<RawUnit>> {
        self.units()?.take(n).collect()
    }
}
