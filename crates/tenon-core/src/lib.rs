pub mod driver;
pub use driver::{Connection, Driver, Rows, Statement};

mod error;
pub use error::{Error, IntoError};

pub mod object;
pub use object::{ClassId, Identity, ObjectId, ObjectRef, ObjectState, Persistent};

pub mod schema;
pub use schema::app::{MemberDef, MemberTy, TypeInfo};
pub use schema::{MemberFlags, TableMapping};

pub mod stmt;

/// A Result type alias that uses tenon's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
