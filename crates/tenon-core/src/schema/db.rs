mod column;
pub use column::Column;

mod index;
pub use index::Index;

mod table;
pub use table::Table;

mod ty;
pub use ty::Type;
