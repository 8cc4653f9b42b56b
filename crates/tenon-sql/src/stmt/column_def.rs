use tenon_core::schema::db::{Column, Type};

#[derive(Debug, Clone)]
pub struct ColumnDef {
    /// Column name
    pub name: String,

    /// Column storage type
    pub ty: Type,

    /// Declared as `INTEGER PRIMARY KEY`, aliasing the row id
    pub primary_key: bool,
}

impl ColumnDef {
    pub fn from_schema(column: &Column) -> Self {
        Self {
            name: column.name.clone(),
            ty: column.ty,
            primary_key: column.primary_key,
        }
    }
}
