use crate::{ExecLog, LoggingDriver};

use std::{path::Path, sync::Once};
use tenon::{
    driver::{Connection as _, Statement as _},
    Sqlite, Store, Value,
};
use tenon_driver_sqlite::Connection;

/// Installs a `RUST_LOG` filtered subscriber once per test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// A store over `driver` whose executed statements are recorded.
pub fn logging_store(driver: Sqlite) -> (Store, ExecLog) {
    init_tracing();

    let driver = LoggingDriver::new(driver);
    let log = ExecLog::new(driver.ops_log_handle());
    (Store::with_driver(driver), log)
}

/// A second connection to an on-disk database, for inspecting what the
/// store wrote.
pub fn raw_connection(path: &Path) -> Connection {
    Connection::open(path).unwrap()
}

/// Schema and row inspection helpers.
pub trait Inspect {
    fn table_exists(&mut self, name: &str) -> bool;

    fn column_exists(&mut self, table: &str, column: &str) -> bool;

    fn view_exists(&mut self, name: &str) -> bool;

    /// Every row of a single-column query.
    fn column_values(&mut self, sql: &str) -> Vec<Value>;
}

impl Inspect for Connection {
    fn table_exists(&mut self, name: &str) -> bool {
        self.has_table(name).unwrap()
    }

    fn column_exists(&mut self, table: &str, column: &str) -> bool {
        self.has_column(table, column).unwrap()
    }

    fn view_exists(&mut self, name: &str) -> bool {
        self.has_view(name).unwrap()
    }

    fn column_values(&mut self, sql: &str) -> Vec<Value> {
        let mut stmt = self.create_statement(sql).unwrap();
        let mut rows = stmt.query().unwrap();

        let mut values = vec![];
        while rows.next_row() {
            values.push(rows.value(0));
        }
        values
    }
}
