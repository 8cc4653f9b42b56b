use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    /// Name of the member being compared
    pub member: String,

    pub op: BinaryOp,

    pub rhs: Operand,
}

impl ExprBinaryOp {
    pub fn new(member: impl Into<String>, op: BinaryOp, rhs: impl Into<Operand>) -> Self {
        Self {
            member: member.into(),
            op,
            rhs: rhs.into(),
        }
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
