use super::{Config, Store};

use tenon_core::{
    driver::Driver, schema::Names, Error, MemberFlags, Result, TableMapping, TypeInfo,
};

/// Configures a [`Store`] and opens it.
///
/// Configuration errors are collected and reported by [`Builder::build`].
#[derive(Debug, Default)]
pub struct Builder {
    config: Config,

    /// First configuration error, if any
    error: Option<Error>,
}

impl Builder {
    pub fn register(&mut self, ty: &'static TypeInfo, mapping: TableMapping) -> &mut Self {
        let ret = self.config.register(ty, mapping);
        self.record(ret)
    }

    pub fn member_flags(
        &mut self,
        ty: &'static TypeInfo,
        member: &str,
        flags: MemberFlags,
    ) -> &mut Self {
        let ret = self.config.set_member_flags(ty, member, flags);
        self.record(ret)
    }

    /// Set the table name prefix for all tables and views
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.config.names = Names::new(prefix);
        self
    }

    /// Database URL, e.g. `sqlite::memory:` or `sqlite:/path/to/file.db`
    pub fn location(&mut self, url: &str) -> &mut Self {
        self.config.location = Some(url.to_string());
        self
    }

    /// Opens a store at the configured location.
    pub fn build(&mut self) -> Result<Store> {
        self.open(None)
    }

    /// Opens a store on `driver`, ignoring the configured location.
    pub fn build_with_driver(&mut self, driver: impl Driver) -> Result<Store> {
        self.open(Some(Box::new(driver)))
    }

    fn open(&mut self, driver: Option<Box<dyn Driver>>) -> Result<Store> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        let mut store = Store::from_config(self.config.clone(), driver);
        store.connect()?;
        Ok(store)
    }

    fn record(&mut self, ret: Result<()>) -> &mut Self {
        if let Err(err) = ret {
            self.error.get_or_insert(err);
        }
        self
    }
}
