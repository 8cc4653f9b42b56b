pub mod serializer;
pub use serializer::{Params, Placeholder, ResolveColumn, Serializer};

pub mod stmt;
pub use stmt::{Condition, Join, Name, Query, Select, SelectColumn, Statement, TableRef};
