use crate::stmt::Value;

use std::collections::VecDeque;

/// Result rows of a query, consumed front to back.
#[derive(Debug, Default, Clone)]
pub struct Rows {
    columns: Vec<String>,
    rows: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl Rows {
    pub fn new(columns: Vec<String>, rows: impl IntoIterator<Item = Vec<Value>>) -> Self {
        Self {
            columns,
            rows: rows.into_iter().collect(),
            current: None,
        }
    }

    /// Advances to the next row. Returns `false` once the rows are exhausted.
    pub fn next_row(&mut self) -> bool {
        self.current = self.rows.pop_front();
        self.current.is_some()
    }

    /// Value of `column` in the current row; `NULL` before the first row or
    /// past the last column.
    pub fn value(&self, column: usize) -> Value {
        self.current
            .as_ref()
            .and_then(|row| row.get(column))
            .cloned()
            .unwrap_or_default()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    /// Index of the column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Rows not yet visited, including the current one.
    pub fn remaining(&self) -> usize {
        self.rows.len() + usize::from(self.current.is_some())
    }
}
