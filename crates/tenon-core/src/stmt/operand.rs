use super::{ExprArg, Value};

/// Right hand side of a comparison: either a literal or a late-bound argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Value(Value),
    Arg(ExprArg),
}

impl Operand {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Arg(_) => None,
        }
    }

    pub fn is_arg(&self) -> bool {
        matches!(self, Self::Arg(_))
    }
}

impl From<ExprArg> for Operand {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! impl_from_literal {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Self::Value(value.into())
                }
            }
        )+
    };
}

impl_from_literal!(bool, i32, i64, f64, &str, String, Vec<u8>);
