mod cache;

mod class;

pub mod cursor;
pub use cursor::Cursor;

mod engine;

pub mod store;
pub use store::{Builder, Store};

pub use tenon_core::{
    bail, driver, err,
    object::{share, with_mut, with_ref},
    schema::app::StorageKind,
    stmt::{self, Expr, Value},
    ClassId, Error, Identity, MemberDef, MemberFlags, MemberTy, ObjectId, ObjectRef, ObjectState,
    Persistent, Result, TableMapping, TypeInfo,
};

#[cfg(feature = "sqlite")]
pub use tenon_driver_sqlite::Sqlite;
