// src/options.rs
use std::path::Path;

/// How the input file is split into text units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// One unit per line.
    Lines,
    /// One JSON value per line, optionally selecting a field.
    Jsonl,
    /// Tab-separated with header; a column must be selected.
    Tsv,
}

impl InputFormat {
    /// Guess from the file extension, falling back to [`InputFormat::Lines`].
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("jsonl" | "ndjson") => Self::Jsonl,
            Some("tsv" | "tab") => Self::Tsv,
            _ => Self::Lines,
        }
    }
}

/// Output format for the per-row metrics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowsFormat {
    Table,
    Csv,
    Json,
    Jsonl,
}

/// Default number of entries in each top/last chart.
pub const DEFAULT_TOP_N: usize = 20;
