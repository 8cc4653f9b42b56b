use super::*;

/// Updates the row identified by `key`. Assigned columns are bound first, in
/// order, followed by the key.
#[derive(Debug, Clone)]
pub struct Update {
    pub table: Name,

    pub assignments: Vec<Name>,

    pub key: Name,
}

impl Statement {
    pub fn update<C: Into<Name>>(
        table: impl Into<Name>,
        assignments: impl IntoIterator<Item = C>,
        key: impl Into<Name>,
    ) -> Self {
        Update {
            table: table.into(),
            assignments: assignments.into_iter().map(Into::into).collect(),
            key: key.into(),
        }
        .into()
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
