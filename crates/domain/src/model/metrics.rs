// crates/domain/src/model/metrics.rs
use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeSeq};

use corpus_profile_shared_kernel::{CharCount, TokenCount};

use crate::options::ProfileOptions;

/// Column of the metrics table. Declaration order is the output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricColumn {
    TextLength,
    Tokens,
    IsEmpty,
    HtmlTags,
    SpecialCharFraction,
    WhitespaceFraction,
}

impl MetricColumn {
    pub const ALL: [Self; 6] = [
        Self::TextLength,
        Self::Tokens,
        Self::IsEmpty,
        Self::HtmlTags,
        Self::SpecialCharFraction,
        Self::WhitespaceFraction,
    ];

    pub const BASE: [Self; 3] = [Self::TextLength, Self::Tokens, Self::IsEmpty];

    /// Canonical column header.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TextLength => "text length",
            Self::Tokens => "tokens",
            Self::IsEmpty => "is empty",
            Self::HtmlTags => "HTML tags",
            Self::SpecialCharFraction => "special char fraction",
            Self::WhitespaceFraction => "whitespace fraction",
        }
    }

    /// Columns produced under `options`, in output order.
    pub fn enabled_by(options: &ProfileOptions) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|column| match column {
                Self::TextLength | Self::Tokens | Self::IsEmpty => true,
                Self::HtmlTags => options.check_html_tags,
                Self::SpecialCharFraction => options.check_special_chars,
                Self::WhitespaceFraction => options.check_whitespace,
            })
            .collect()
    }
}

impl fmt::Display for MetricColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single cell of the metrics table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(usize),
    /// Rendered as `1` / `0`.
    Flag(bool),
    Fraction(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Flag(flag) => write!(f, "{}", u8::from(*flag)),
            Self::Fraction(x) => write!(f, "{x:.4}"),
        }
    }
}

/// Surface statistics of one text unit.
///
/// Detail metrics are `None` when their flag was off: not computed, as opposed to zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowMetrics {
    #[serde(rename = "text length")]
    pub text_length: CharCount,
    #[serde(rename = "tokens")]
    pub tokens: TokenCount,
    #[serde(rename = "is empty", serialize_with = "flag_as_int")]
    pub is_empty: bool,
    #[serde(rename = "HTML tags", skip_serializing_if = "Option::is_none")]
    pub html_tags: Option<usize>,
    #[serde(rename = "special char fraction", skip_serializing_if = "Option::is_none")]
    pub special_char_fraction: Option<f64>,
    #[serde(rename = "whitespace fraction", skip_serializing_if = "Option::is_none")]
    pub whitespace_fraction: Option<f64>,
}

fn flag_as_int<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

impl RowMetrics {
    /// Base record; detail metrics start out absent.
    pub fn new(text_length: CharCount, tokens: TokenCount, is_empty: bool) -> Self {
        Self {
            text_length,
            tokens,
            is_empty,
            html_tags: None,
            special_char_fraction: None,
            whitespace_fraction: None,
        }
    }

    /// `is empty` as the 0/1 integer used in tabular output.
    pub fn is_empty_flag(&self) -> u8 {
        u8::from(self.is_empty)
    }

    /// Value of `column`, or `None` if it was not computed for this row.
    pub fn value(&self, column: MetricColumn) -> Option<MetricValue> {
        match column {
            MetricColumn::TextLength => Some(MetricValue::Count(self.text_length.value())),
            MetricColumn::Tokens => Some(MetricValue::Count(self.tokens.value())),
            MetricColumn::IsEmpty => Some(MetricValue::Flag(self.is_empty)),
            MetricColumn::HtmlTags => self.html_tags.map(MetricValue::Count),
            MetricColumn::SpecialCharFraction => self.special_char_fraction.map(MetricValue::Fraction),
            MetricColumn::WhitespaceFraction => self.whitespace_fraction.map(MetricValue::Fraction),
        }
    }

    /// Columns this record actually carries.
    pub fn present_columns(&self) -> Vec<MetricColumn> {
        MetricColumn::ALL.into_iter().filter(|&c| self.value(c).is_some()).collect()
    }
}

/// Per-row metric records in input order, with the column set they share.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsTable {
    columns: Vec<MetricColumn>,
    rows: Vec<RowMetrics>,
}

impl MetricsTable {
    pub fn new(columns: Vec<MetricColumn>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    pub fn for_options(options: &ProfileOptions) -> Self {
        Self::new(MetricColumn::enabled_by(options))
    }

    pub fn push(&mut self, row: RowMetrics) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[MetricColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn rows(&self) -> &[RowMetrics] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RowMetrics> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of the `tokens` column.
    pub fn total_tokens(&self) -> TokenCount {
        self.rows.iter().map(|r| r.tokens).sum()
    }

    /// Sum of the `text length` column.
    pub fn total_chars(&self) -> CharCount {
        self.rows.iter().map(|r| r.text_length).sum()
    }

    /// Values of one column in row order; `None` for rows lacking it.
    pub fn column(&self, column: MetricColumn) -> Vec<Option<MetricValue>> {
        self.rows.iter().map(|r| r.value(column)).collect()
    }
}

impl<'a> IntoIterator for &'a MetricsTable {
    type Item = &'a RowMetrics;
    type IntoIter = std::slice::Iter<'a, RowMetrics>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Serialised as the list of records, like a row-oriented data frame.
impl Serialize for MetricsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
