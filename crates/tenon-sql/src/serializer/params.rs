use super::{Formatter, ToSql};

use crate::stmt::ExprArg;

/// Collects the late-bound arguments referenced by compiled text.
pub trait Params {
    fn push(&mut self, arg: ExprArg) -> Placeholder;
}

/// A positional parameter, one-based in order of appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<ExprArg> {
    fn push(&mut self, arg: ExprArg) -> Placeholder {
        Vec::push(self, arg);
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('?');
    }
}
