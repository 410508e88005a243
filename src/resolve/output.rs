//! Final table assembly: column selection, row filtering, Greek restoration.

use serde_json::Value;

use crate::core::record::GeneRecord;
use crate::core::table::ReferenceTable;
use crate::core::types::{Column, KeyType};
use crate::resolve::join::MatchCandidate;
use crate::resolve::normalize::restore_greek;

/// The resolved output table: named columns over textual cells, NA as `None`.
///
/// Rows are plain 0-based positions; for a resolved batch they align 1:1
/// with the input sequence (before any `keep_na` filtering).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ResolvedTable {
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell value by column name; `None` for NA or an unknown column
    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let at = self.column_index(column)?;
        self.rows.get(row)?.get(at)?.as_deref()
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as an array of JSON objects, with `null` for NA
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.rows
                .iter()
                .map(|row| {
                    let mut object = serde_json::Map::new();
                    for (name, cell) in self.columns.iter().zip(row) {
                        let value = match cell {
                            Some(text) => Value::String(text.clone()),
                            None => Value::Null,
                        };
                        object.insert(name.clone(), value);
                    }
                    Value::Object(object)
                })
                .collect(),
        )
    }

    /// Tab-separated rendering with a header line; NA cells print as `NA`
    #[must_use]
    pub fn to_tsv(&self) -> String {
        let mut out = self.columns.join("\t");
        out.push('\n');
        for row in &self.rows {
            let line: Vec<&str> = row.iter().map(|cell| cell.as_deref().unwrap_or("NA")).collect();
            out.push_str(&line.join("\t"));
            out.push('\n');
        }
        out
    }
}

/// Output columns for a resolved batch: the reference columns present in
/// the table, minus the join-key column, which is redundant with the
/// now-aligned `input_id`. Symbol is the exception: several aliases may
/// have mapped to one symbol, so it stays, right after `input_id`.
fn output_columns(table: &ReferenceTable, key: KeyType) -> Vec<Column> {
    Column::ALL
        .iter()
        .copied()
        .filter(|&column| table.columns().has(column))
        .filter(|&column| column != key.column() || key == KeyType::Symbol)
        .collect()
}

fn record_row(record: &GeneRecord, columns: &[Column]) -> Vec<Option<String>> {
    columns
        .iter()
        .map(|&column| column.display_value(record))
        .collect()
}

/// Reattach original inputs and build the final table.
#[must_use]
pub fn assemble(
    table: &ReferenceTable,
    key: KeyType,
    candidates: &[MatchCandidate],
    keep_na: bool,
) -> ResolvedTable {
    let columns = output_columns(table, key);
    let mut names = vec!["input_id".to_string()];
    names.extend(columns.iter().map(|c| c.name().to_string()));

    let mut rows = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let input_id = restore_greek(&candidate.input_id);
        if candidate.rows.is_empty() {
            push_row(&mut rows, &input_id, vec![None; columns.len()], keep_na);
        } else {
            for &rnum in &candidate.rows {
                let values = record_row(&table.records[rnum], &columns);
                push_row(&mut rows, &input_id, values, keep_na);
            }
        }
    }

    ResolvedTable {
        columns: names,
        rows,
    }
}

fn push_row(
    rows: &mut Vec<Vec<Option<String>>>,
    input_id: &str,
    values: Vec<Option<String>>,
    keep_na: bool,
) {
    if !keep_na && values.iter().all(Option::is_none) {
        return;
    }
    let mut row = vec![Some(input_id.to_string())];
    row.extend(values);
    rows.push(row);
}

/// The whole reference table, in row order, for calls without an id list
#[must_use]
pub fn full_table(table: &ReferenceTable) -> ResolvedTable {
    let columns: Vec<Column> = Column::ALL
        .iter()
        .copied()
        .filter(|&column| table.columns().has(column))
        .collect();
    let names = columns.iter().map(|c| c.name().to_string()).collect();
    let rows = table
        .records
        .iter()
        .map(|record| record_row(record, &columns))
        .collect();

    ResolvedTable {
        columns: names,
        rows,
    }
}
