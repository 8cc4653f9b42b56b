use super::*;

/// A `WHERE` clause.
#[derive(Debug, Clone)]
pub enum Condition {
    /// `column=?`
    Param(Name),

    /// `column=<literal>`
    Literal(Name, Value),

    /// `lhs=rhs` between two columns
    Columns(Name, Name),

    /// A compiled member filter, see [`Serializer::compile`]
    ///
    /// [`Serializer::compile`]: crate::Serializer::compile
    Filter(String),

    /// Conjunction of conditions
    And(Vec<Condition>),
}

impl Condition {
    pub fn param(column: impl Into<Name>) -> Self {
        Self::Param(column.into())
    }

    pub fn literal(column: impl Into<Name>, value: impl Into<Value>) -> Self {
        Self::Literal(column.into(), value.into())
    }

    pub fn columns(lhs: impl Into<Name>, rhs: impl Into<Name>) -> Self {
        Self::Columns(lhs.into(), rhs.into())
    }

    /// Appends `other`, flattening nested conjunctions.
    pub fn and(self, other: Condition) -> Self {
        let mut operands = match self {
            Self::And(operands) => operands,
            condition => vec![condition],
        };

        match other {
            Self::And(rest) => operands.extend(rest),
            condition => operands.push(condition),
        }

        Self::And(operands)
    }
}
