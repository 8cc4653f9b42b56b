use super::*;

use tenon_core::schema::db::Column;

/// Adds a column to an existing table. Existing columns are never altered.
#[derive(Debug, Clone)]
pub struct AddColumn {
    pub table: Name,

    pub column: ColumnDef,
}

impl Statement {
    pub fn add_column(table: impl Into<Name>, column: &Column) -> Self {
        AddColumn {
            table: table.into(),
            column: ColumnDef::from_schema(column),
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
