mod builder;
pub use builder::Builder;

mod config;
pub(crate) use config::Config;

mod connect;

use crate::{engine::Engine, Cursor};

use tenon_core::{
    driver::Driver,
    schema::Names,
    stmt::{Expr, Value},
    Error, MemberFlags, ObjectId, ObjectRef, Result, TableMapping, TypeInfo,
};

/// URL used when neither a location nor a driver is configured
const DEFAULT_LOCATION: &str = "sqlite::memory:";

/// Persists registered classes of objects in one database.
///
/// Classes are registered first. The connection is opened on the first
/// operation that needs it; from then on the schema is fixed and further
/// registration fails.
///
/// ```
/// use tenon::{MemberDef, Store, TableMapping, TypeInfo};
/// # use tenon::{share, Identity, ObjectState, Persistent, Result};
/// # #[derive(Default)]
/// # struct Pet { identity: Identity, name: String }
/// # impl Persistent for Pet {
/// #     fn type_info(&self) -> &'static TypeInfo { &PET }
/// #     fn identity(&self) -> &Identity { &self.identity }
/// #     fn identity_mut(&mut self) -> &mut Identity { &mut self.identity }
/// #     fn store_members(&self, state: &mut ObjectState) { state.set("name", self.name.as_str()) }
/// #     fn restore_members(&mut self, state: &ObjectState) -> Result<()> {
/// #         self.name = state.string("name")?;
/// #         Ok(())
/// #     }
/// #     fn as_any(&self) -> &dyn std::any::Any { self }
/// #     fn as_any_mut(&mut self) -> &mut dyn std::any::Any { self }
/// # }
///
/// static PET: TypeInfo = TypeInfo {
///     name: "Pet",
///     parent: None,
///     members: &[MemberDef::string("name")],
///     create: || share(Pet::default()),
/// };
///
/// let mut store = Store::new();
/// store.register_class(&PET, TableMapping::Flat).unwrap();
///
/// let rex = share(Pet { name: "Rex".into(), ..Pet::default() });
/// let oid = store.store_object(&rex).unwrap();
///
/// let fetched = store.fetch_object(&PET, oid).unwrap().unwrap();
/// assert!(std::rc::Rc::ptr_eq(&rex, &fetched));
/// ```
pub struct Store {
    config: Config,

    /// Explicit driver; when `None` the driver is chosen from the location
    driver: Option<Box<dyn Driver>>,

    /// Set once the connection is open
    engine: Option<Engine>,
}

impl Store {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A store backed by an in-memory SQLite database unless a location is
    /// set before the first operation.
    pub fn new() -> Store {
        Store::from_config(Config::default(), None)
    }

    /// A store using `driver` for its connection.
    pub fn with_driver(driver: impl Driver) -> Store {
        Store::from_config(Config::default(), Some(Box::new(driver)))
    }

    pub(crate) fn from_config(config: Config, driver: Option<Box<dyn Driver>>) -> Store {
        Store {
            config,
            driver,
            engine: None,
        }
    }

    pub fn register_class(&mut self, ty: &'static TypeInfo, mapping: TableMapping) -> Result<()> {
        self.ensure_unconnected(|| {
            Error::invalid_schema("cannot register classes after connecting")
        })?;
        self.config.register(ty, mapping)
    }

    /// Sets storage flags on a member declared by `ty` or one of its
    /// ancestors.
    pub fn set_member_flags(
        &mut self,
        ty: &'static TypeInfo,
        member: &str,
        flags: MemberFlags,
    ) -> Result<()> {
        self.ensure_unconnected(|| {
            Error::invalid_schema("cannot change member flags after connecting")
        })?;
        self.config.set_member_flags(ty, member, flags)
    }

    /// Sets the database URL, replacing any driver given at construction.
    pub fn set_location(&mut self, url: &str) -> Result<()> {
        self.ensure_unconnected(Error::already_connected)?;
        self.config.location = Some(url.to_string());
        self.driver = None;
        Ok(())
    }

    pub fn set_table_name_prefix(&mut self, prefix: &str) -> Result<()> {
        self.ensure_unconnected(|| {
            Error::invalid_schema("cannot change the table name prefix after connecting")
        })?;
        self.config.names = Names::new(prefix);
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.engine.is_some()
    }

    /// Opens the connection and prepares the schema now instead of on first
    /// use.
    pub fn connect(&mut self) -> Result<()> {
        self.engine().map(|_| ())
    }

    pub fn begin_transaction(&mut self) -> Result<()> {
        self.engine()?.begin_transaction()
    }

    pub fn commit_transaction(&mut self) -> Result<()> {
        self.engine()?.commit_transaction()
    }

    /// Nesting depth of open transactions.
    pub fn transaction_depth(&self) -> u32 {
        self.engine
            .as_ref()
            .map(Engine::transaction_depth)
            .unwrap_or(0)
    }

    /// Inserts a transient object together with every transient object it
    /// refers to or contains. Returns the object's id; storing an already
    /// persisted object only returns its id.
    pub fn store_object(&mut self, object: &ObjectRef) -> Result<ObjectId> {
        self.engine()?.insert_object(object)
    }

    pub fn update_object(&mut self, object: &ObjectRef) -> Result<()> {
        self.engine()?.update_object(object)
    }

    /// Deletes a persisted object. Objects it refers to or contains stay.
    pub fn remove_object(&mut self, object: &ObjectRef) -> Result<()> {
        self.engine()?.remove_object(object)
    }

    /// The object of class `ty`, or of one of its subclasses, with id `oid`.
    ///
    /// Classes are searched depth first starting at `ty`. Object ids are only
    /// unique per flat table, so when a flat subclass has a row with the same
    /// id as a row of `ty` itself, the instance of `ty` is returned. Use the
    /// subclass type to reach the other one.
    pub fn fetch_object(&mut self, ty: &TypeInfo, oid: ObjectId) -> Result<Option<ObjectRef>> {
        let engine = self.engine()?;
        let class = engine.class_of_type(ty)?;
        engine.find_object(class, oid)
    }

    /// Iterates every instance of `ty` and its subclasses matching `filter`.
    pub fn query(&mut self, ty: &TypeInfo, filter: Option<Expr>) -> Result<Cursor<'_>> {
        self.query_with_args(ty, filter, vec![])
    }

    /// Like [`Store::query`], binding `args` to the filter's
    /// [`Expr::arg`] placeholders.
    pub fn query_with_args(
        &mut self,
        ty: &TypeInfo,
        filter: Option<Expr>,
        args: Vec<Value>,
    ) -> Result<Cursor<'_>> {
        let engine = self.engine()?;
        let class = engine.class_of_type(ty)?;
        Ok(Cursor::new(engine, class, filter, args))
    }

    /// Distinct values of `member` across instances of `ty` and its
    /// subclasses matching `filter`, in ascending order.
    pub fn collect_values(
        &mut self,
        ty: &TypeInfo,
        member: &str,
        filter: Option<&Expr>,
    ) -> Result<Vec<Value>> {
        self.collect_values_with_args(ty, member, filter, &[])
    }

    pub fn collect_values_with_args(
        &mut self,
        ty: &TypeInfo,
        member: &str,
        filter: Option<&Expr>,
        args: &[Value],
    ) -> Result<Vec<Value>> {
        let engine = self.engine()?;
        let class = engine.class_of_type(ty)?;
        engine.collect_values(class, member, filter, args)
    }

    /// Drops `object` from the identity cache without touching the database.
    ///
    /// The instance is detached: its object id becomes invalid and fetching
    /// the id again builds a new instance.
    pub fn release_object(&mut self, object: &ObjectRef) -> Result<()> {
        match &mut self.engine {
            Some(engine) => engine.release_object(object),
            None => Ok(()),
        }
    }

    /// Sweeps the cache entries of objects that have already been dropped.
    /// Returns the number of entries swept.
    ///
    /// The cache never keeps an object alive on its own, so this only
    /// reclaims bookkeeping.
    pub fn release_unreferenced(&mut self) -> usize {
        self.engine
            .as_mut()
            .map(Engine::release_unreferenced)
            .unwrap_or(0)
    }

    /// Number of live cached instances of exactly class `ty`.
    pub fn cached_objects(&self, ty: &TypeInfo) -> usize {
        let Some(engine) = &self.engine else {
            return 0;
        };

        engine
            .class_of_type(ty)
            .map(|class| engine.cached_objects(class))
            .unwrap_or(0)
    }

    fn ensure_unconnected(&self, err: impl FnOnce() -> Error) -> Result<()> {
        match self.engine {
            Some(_) => Err(err()),
            None => Ok(()),
        }
    }

    /// The open engine, opening the connection on first use.
    fn engine(&mut self) -> Result<&mut Engine> {
        if self.engine.is_none() {
            self.engine = Some(self.open()?);
        }

        self.engine
            .as_mut()
            .ok_or_else(|| tenon_core::err!("store is not connected"))
    }

    fn open(&mut self) -> Result<Engine> {
        let driver = match self.driver.take() {
            Some(driver) => driver,
            None => {
                let location = self.config.location.as_deref().unwrap_or(DEFAULT_LOCATION);
                connect::driver_for(location)?
            }
        };

        tracing::debug!(url = %driver.url(), "opening store");
        let engine = driver
            .connect()
            .and_then(|connection| Engine::open(&self.config, connection));

        self.driver = Some(driver);
        engine
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("classes", &self.config.classes.keys().collect::<Vec<_>>())
            .field("driver", &self.driver)
            .field("connected", &self.engine.is_some())
            .finish()
    }
}
