use super::*;

use tenon_core::schema::db::Index;

#[derive(Debug, Clone)]
pub struct CreateIndex {
    /// Name of the index
    pub name: Name,

    /// Which table to index
    pub on: Name,

    /// The indexed column
    pub column: Name,
}

impl Statement {
    pub fn create_index(index: &Index) -> Self {
        CreateIndex {
            name: Name::from(&index.name),
            on: Name::from(&index.on),
            column: Name::from(&index.column),
        }
        .into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
