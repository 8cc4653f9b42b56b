use super::{Column, Index, Type};
use crate::schema::Names;

/// A database table
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,

    pub indices: Vec<Index>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            indices: vec![],
        }
    }

    /// A class table, starting with the `oid` and `cid` columns.
    pub fn class_table(name: impl Into<String>) -> Self {
        let mut table = Self::new(name);
        table.columns.push(Column::primary_key(Names::OID));
        table.columns.push(Column::new(Names::CID, Type::Integer));
        table
    }

    /// An association table holding one row per container element.
    pub fn association(name: impl Into<String>) -> Self {
        let mut table = Self::new(name);
        for column in ["owner_oid", "owner_cid", "element_oid", "element_cid"] {
            table.columns.push(Column::new(column, Type::Integer));
        }
        let index = Names::index(&table.name, "_owner_oid");
        table
            .indices
            .push(Index::new(index, table.name.clone(), "owner_oid"));
        table
    }

    /// The registry of class names and ids.
    pub fn classes() -> Self {
        let mut table = Self::new(Names::CLASSES_TABLE);
        table.columns.push(Column::primary_key(Names::CID));
        table.columns.push(Column::new("class", Type::Text));
        table
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Adds a column unless one with the same name exists. Returns `true` if
    /// the column was added.
    pub fn push_column(&mut self, column: Column) -> bool {
        if self.has_column(&column.name) {
            return false;
        }
        self.columns.push(column);
        true
    }

    /// Columns other than `oid` and `cid`.
    pub fn member_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns
            .iter()
            .filter(|column| column.name != Names::OID && column.name != Names::CID)
    }

    pub fn add_index(&mut self, column: &str) {
        let name = Names::index(&self.name, column);
        if self.indices.iter().all(|index| index.name != name) {
            self.indices.push(Index::new(name, self.name.clone(), column));
        }
    }
}
