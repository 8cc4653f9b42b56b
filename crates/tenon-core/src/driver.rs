mod rows;
pub use rows::Rows;

mod transaction;
pub use transaction::TransactionDepth;

use crate::{stmt::Value, Result};

use std::{borrow::Cow, fmt::Debug};

pub trait Driver: Debug + 'static {
    /// Returns the URL this driver is connecting to.
    fn url(&self) -> Cow<'_, str>;

    /// Creates a new connection to the database.
    ///
    /// The store opens exactly one connection and keeps it for its lifetime.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

pub trait Connection: Debug {
    /// Compiles `sql` into a reusable statement.
    fn create_statement(&mut self, sql: &str) -> Result<Box<dyn Statement>>;

    /// Executes `sql` once, discarding any result rows.
    fn execute(&mut self, sql: &str) -> Result<()>;

    fn has_table(&mut self, name: &str) -> Result<bool>;

    fn has_column(&mut self, table: &str, column: &str) -> Result<bool>;

    fn has_view(&mut self, name: &str) -> Result<bool>;

    fn begin_transaction(&mut self) -> Result<()>;

    fn commit_transaction(&mut self) -> Result<()>;
}

/// A prepared statement with positional parameters.
///
/// Bindings persist across executions until replaced, so a statement can be
/// re-run with only the changed parameters rebound.
pub trait Statement: Debug {
    fn sql(&self) -> &str;

    /// Binds `value` to the zero-based parameter `index`.
    fn bind(&mut self, index: usize, value: Value);

    /// Resets the parameter at `index` to `NULL`.
    fn unbind(&mut self, index: usize) {
        self.bind(index, Value::Null);
    }

    /// Executes the statement, returning the number of affected rows.
    fn execute(&mut self) -> Result<u64>;

    /// Executes the statement and buffers its result rows.
    fn query(&mut self) -> Result<Rows>;

    /// Executes an insert, returning the id of the new row.
    fn execute_insert(&mut self) -> Result<i64>;
}
