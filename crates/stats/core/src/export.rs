//! Tab-separated export of the counter record.
//!
//! # Format
//!
//! ```text
//! kills<TAB>attackErrors<TAB>...<TAB>digErrors
//! 10<TAB>2<TAB>...<TAB>0
//! ```
//!
//! Line 1 holds the field identifiers in declared order and line 2 the values
//! in the same order. There is no quoting, no escaping and no trailing newline,
//! so the block pastes directly into a spreadsheet row pair.

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;

use crate::field::StatField;
use crate::stats::PlayerStats;

const SEPARATOR: char = '\t';

/// Errors raised while reading an exported block back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("export block is empty")]
    Empty,

    #[error("export block is missing the values line")]
    MissingValues,

    #[error("unexpected content after the values line")]
    TrailingContent,

    #[error("unknown field identifier: {0}")]
    UnknownField(String),

    #[error("field listed more than once: {0}")]
    DuplicateField(StatField),

    #[error("header has {headers} columns but values line has {values}")]
    ColumnMismatch { headers: usize, values: usize },

    #[error("invalid value {value:?} for {field}")]
    InvalidValue { field: StatField, value: String },
}

/// Header line: field identifiers joined by tabs.
pub fn header_line() -> String {
    join(StatField::ALL.iter().map(|field| field.as_ref().to_string()))
}

/// Values line: counters in declared order joined by tabs.
pub fn values_line(stats: &PlayerStats) -> String {
    join(stats.values().iter().map(u32::to_string))
}

/// Renders the two-line export block.
pub fn to_tsv(stats: &PlayerStats) -> String {
    format!("{}\n{}", header_line(), values_line(stats))
}

/// Parses a block produced by [`to_tsv`].
///
/// Columns may appear in any order; fields missing from the header are read as
/// zero. A single trailing newline (and `\r\n` line endings) are tolerated.
/// Each value must be plain decimal digits that fit in a `u32`.
pub fn from_tsv(block: &str) -> Result<PlayerStats, ExportError> {
    let mut lines = block.lines();

    let header = lines
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or(ExportError::Empty)?;
    let values = lines.next().ok_or(ExportError::MissingValues)?;

    if lines.any(|line| !line.trim().is_empty()) {
        return Err(ExportError::TrailingContent);
    }

    let fields = parse_header(header)?;
    let raw_values: Vec<&str> = values.split(SEPARATOR).collect();

    if raw_values.len() != fields.len() {
        return Err(ExportError::ColumnMismatch {
            headers: fields.len(),
            values: raw_values.len(),
        });
    }

    let mut stats = PlayerStats::ZERO;
    for (field, raw) in fields.into_iter().zip(raw_values) {
        let value = parse_count(raw).ok_or_else(|| ExportError::InvalidValue {
            field,
            value: raw.to_string(),
        })?;
        stats.set(field, value);
    }

    Ok(stats)
}

/// Counts are bare decimal digits; signs and surrounding blanks are rejected.
fn parse_count(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn parse_header(header: &str) -> Result<Vec<StatField>, ExportError> {
    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(StatField::COUNT);

    for raw in header.split(SEPARATOR) {
        let name = raw.trim();
        let field =
            StatField::from_str(name).map_err(|_| ExportError::UnknownField(name.to_string()))?;
        if !seen.insert(field) {
            return Err(ExportError::DuplicateField(field));
        }
        fields.push(field);
    }

    Ok(fields)
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(&SEPARATOR.to_string())
}
