use super::*;

/// Inserts one row, every column bound to a positional parameter.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: Name,

    pub columns: Vec<Name>,
}

impl Statement {
    pub fn insert<C: Into<Name>>(
        table: impl Into<Name>,
        columns: impl IntoIterator<Item = C>,
    ) -> Self {
        Insert {
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
