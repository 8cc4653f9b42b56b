mod statement;
use statement::Statement;

mod value;
use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    rc::Rc,
};
use tenon_core::{driver::Driver, Error, Result};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "connection URL has no database path; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn connect(&self) -> Result<Box<dyn tenon_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: Rc<RusqliteConnection>,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self::new(connection))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self::new(connection))
    }

    fn new(connection: RusqliteConnection) -> Self {
        Self {
            connection: Rc::new(connection),
        }
    }

    fn exists(&self, sql: &str, params: impl rusqlite::Params) -> Result<bool> {
        tracing::trace!(sql, "query");

        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        stmt.exists(params).map_err(Error::driver_operation_failed)
    }
}

impl tenon_core::Connection for Connection {
    fn create_statement(&mut self, sql: &str) -> Result<Box<dyn tenon_core::Statement>> {
        tracing::debug!(sql, "prepare statement");

        // Syntax errors surface here, not on first execution.
        self.connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        Ok(Box::new(Statement::new(self.connection.clone(), sql)))
    }

    fn execute(&mut self, sql: &str) -> Result<()> {
        tracing::trace!(sql, "execute");

        self.connection
            .execute_batch(sql)
            .map_err(Error::driver_operation_failed)
    }

    fn has_table(&mut self, name: &str) -> Result<bool> {
        self.exists(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
        )
    }

    fn has_column(&mut self, table: &str, column: &str) -> Result<bool> {
        self.exists(
            "SELECT 1 FROM pragma_table_info(?1) WHERE name=?2",
            [table, column],
        )
    }

    fn has_view(&mut self, name: &str) -> Result<bool> {
        self.exists(
            "SELECT 1 FROM sqlite_master WHERE type='view' AND name=?1",
            [name],
        )
    }

    fn begin_transaction(&mut self) -> Result<()> {
        self.execute("BEGIN")
    }

    fn commit_transaction(&mut self) -> Result<()> {
        self.execute("COMMIT")
    }
}
