/// A value that is not known when the expression is built.
///
/// The compiled query text carries a placeholder in its place and the value is
/// bound when the statement executes, taken from the argument list at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprArg {
    pub position: usize,
}

impl ExprArg {
    pub fn new(position: usize) -> Self {
        Self { position }
    }
}
