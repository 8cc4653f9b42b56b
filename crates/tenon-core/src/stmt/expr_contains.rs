use super::*;

/// Substring match, compiled as a LIKE with wildcards on both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprContains {
    pub member: String,
    pub substring: Operand,
}

impl Expr {
    pub fn contains(member: impl Into<String>, substring: impl Into<Operand>) -> Self {
        ExprContains {
            member: member.into(),
            substring: substring.into(),
        }
        .into()
    }
}

impl From<ExprContains> for Expr {
    fn from(value: ExprContains) -> Self {
        Self::Contains(value)
    }
}
