use super::*;

/// A filter predicate over the members of a class.
///
/// Expressions name members, not columns. They are bound to the physical
/// columns of a class only when compiled into query text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of expressions
    And(ExprAnd),

    /// Compare a member with a value
    BinaryOp(ExprBinaryOp),

    /// The member's text contains a substring
    Contains(ExprContains),

    /// The member's value is one of a list of literals
    InList(ExprInList),

    /// The member's text matches a LIKE pattern
    Like(ExprLike),

    /// Negate an expression
    Not(ExprNot),

    /// OR a set of expressions
    Or(ExprOr),
}

impl Expr {
    pub fn eq(member: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        ExprBinaryOp::new(member, BinaryOp::Eq, rhs).into()
    }

    pub fn ne(member: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        ExprBinaryOp::new(member, BinaryOp::Ne, rhs).into()
    }

    pub fn gt(member: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        ExprBinaryOp::new(member, BinaryOp::Gt, rhs).into()
    }

    pub fn ge(member: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        ExprBinaryOp::new(member, BinaryOp::Ge, rhs).into()
    }

    pub fn lt(member: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        ExprBinaryOp::new(member, BinaryOp::Lt, rhs).into()
    }

    pub fn le(member: impl Into<String>, rhs: impl Into<Operand>) -> Self {
        ExprBinaryOp::new(member, BinaryOp::Le, rhs).into()
    }

    /// A late-bound argument, taken from the argument list at `position`.
    pub fn arg(position: usize) -> ExprArg {
        ExprArg::new(position)
    }

    /// Returns the member names referenced by this expression, in order of
    /// appearance.
    pub fn members(&self) -> Vec<&str> {
        let mut members = vec![];
        self.collect_members(&mut members);
        members
    }

    fn collect_members<'a>(&'a self, members: &mut Vec<&'a str>) {
        match self {
            Self::And(expr) => expr.iter().for_each(|e| e.collect_members(members)),
            Self::Or(expr) => expr.iter().for_each(|e| e.collect_members(members)),
            Self::Not(expr) => expr.expr.collect_members(members),
            Self::BinaryOp(expr) => members.push(&expr.member),
            Self::Contains(expr) => members.push(&expr.member),
            Self::InList(expr) => members.push(&expr.member),
            Self::Like(expr) => members.push(&expr.member),
        }
    }

    pub fn is_and(&self) -> bool {
        matches!(self, Self::And(_))
    }

    pub fn is_or(&self) -> bool {
        matches!(self, Self::Or(_))
    }
}
