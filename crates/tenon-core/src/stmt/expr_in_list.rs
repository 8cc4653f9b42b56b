use super::*;

/// `member IN (v1, v2, ...)`. Only literals are accepted; the list cannot be
/// late-bound.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub member: String,
    pub list: Vec<Value>,
}

impl Expr {
    pub fn in_list<T: Into<Value>>(
        member: impl Into<String>,
        list: impl IntoIterator<Item = T>,
    ) -> Self {
        ExprInList {
            member: member.into(),
            list: list.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Self::InList(value)
    }
}
