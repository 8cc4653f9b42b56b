pub mod app;

pub mod db;

mod mapping;
pub use mapping::{MemberFlags, TableMapping};

mod name;
pub use name::Names;
