// Row types flowing in and out of an operator.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// An input row: an ordered sequence of string fields. The topic-modeling
/// operator only ever reads field 0, which carries one whitespace-delimited
/// document per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub fields: Vec<String>,
}

impl Row {
    /// A single-field row, the shape the file driver produces.
    pub fn single(field: impl Into<String>) -> Self {
        Self {
            fields: vec![field.into()],
        }
    }

    /// The first field, or an error for a field-less row.
    pub fn first(&self) -> Result<&str> {
        self.fields
            .first()
            .map(String::as_str)
            .context("row has no fields")
    }
}

/// An output row: a single `output` field holding one topic's textual
/// term-weight representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub output: String,
}
