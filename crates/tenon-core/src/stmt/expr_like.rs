use super::*;

/// `member LIKE pattern`, the pattern is passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    pub member: String,
    pub pattern: Operand,
}

impl Expr {
    pub fn like(member: impl Into<String>, pattern: impl Into<Operand>) -> Self {
        ExprLike {
            member: member.into(),
            pattern: pattern.into(),
        }
        .into()
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Self {
        Self::Like(value)
    }
}
