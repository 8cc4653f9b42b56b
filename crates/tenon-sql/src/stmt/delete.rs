use super::*;

#[derive(Debug, Clone)]
pub struct Delete {
    pub from: Name,

    pub filter: Condition,
}

impl Statement {
    pub fn delete(from: impl Into<Name>, filter: Condition) -> Self {
        Delete {
            from: from.into(),
            filter,
        }
        .into()
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
