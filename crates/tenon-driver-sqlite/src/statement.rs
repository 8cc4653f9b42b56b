use crate::Value;

use rusqlite::Connection as RusqliteConnection;
use std::rc::Rc;
use tenon_core::{driver::Rows, stmt, Error, Result};

/// A statement compiled against the shared connection.
///
/// The compiled form lives in the connection's statement cache and is
/// re-fetched on each execution; bindings are kept here.
#[derive(Debug)]
pub struct Statement {
    connection: Rc<RusqliteConnection>,
    sql: String,
    params: Vec<Value>,
}

impl Statement {
    pub(crate) fn new(connection: Rc<RusqliteConnection>, sql: &str) -> Self {
        Self {
            connection,
            sql: sql.to_string(),
            params: vec![],
        }
    }

    fn prepare(&self) -> Result<rusqlite::CachedStatement<'_>> {
        tracing::trace!(sql = %self.sql, params = ?self.params, "execute");

        let mut stmt = self
            .connection
            .prepare_cached(&self.sql)
            .map_err(Error::driver_operation_failed)?;

        for (i, param) in self.params.iter().enumerate() {
            stmt.raw_bind_parameter(i + 1, param)
                .map_err(Error::driver_operation_failed)?;
        }

        Ok(stmt)
    }
}

impl tenon_core::Statement for Statement {
    fn sql(&self) -> &str {
        &self.sql
    }

    fn bind(&mut self, index: usize, value: stmt::Value) {
        if self.params.len() <= index {
            self.params
                .resize_with(index + 1, || Value::from(stmt::Value::Null));
        }
        self.params[index] = value.into();
    }

    fn execute(&mut self) -> Result<u64> {
        let mut stmt = self.prepare()?;
        let count = stmt.raw_execute().map_err(Error::driver_operation_failed)?;
        Ok(count as u64)
    }

    fn query(&mut self) -> Result<Rows> {
        let mut stmt = self.prepare()?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let width = columns.len();

        let mut rows = stmt.raw_query();
        let mut values = vec![];

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            let record = (0..width)
                .map(|index| Value::from_sql(row, index).map(Value::into_inner))
                .collect::<Result<Vec<_>>>()?;
            values.push(record);
        }

        Ok(Rows::new(columns, values))
    }

    fn execute_insert(&mut self) -> Result<i64> {
        self.execute()?;
        Ok(self.connection.last_insert_rowid())
    }
}
