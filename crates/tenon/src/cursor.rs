use crate::engine::Engine;

use tenon_core::{
    stmt::{Expr, Value},
    ObjectRef, Result, Rows,
};

/// Iterates the instances of a class and all of its subclasses that match a
/// filter.
///
/// Each concrete class is queried through its own view, one statement per
/// class, in depth-first order starting with the queried class. The cursor
/// materializes exactly one object ahead of the one last returned.
///
/// An error ends the iteration after it is returned.
pub struct Cursor<'a> {
    engine: &'a mut Engine,

    /// Classes not queried yet
    worklist: std::vec::IntoIter<usize>,

    filter: Option<Expr>,

    args: Vec<Value>,

    /// Class and buffered rows of the running query
    current: Option<(usize, Rows)>,

    pending: Option<Result<ObjectRef>>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(
        engine: &'a mut Engine,
        class: usize,
        filter: Option<Expr>,
        args: Vec<Value>,
    ) -> Self {
        let worklist = engine.hierarchy(class).into_iter();

        let mut cursor = Self {
            engine,
            worklist,
            filter,
            args,
            current: None,
            pending: None,
        };

        cursor.pending = cursor.advance();
        cursor
    }

    /// Returns `true` if another object is ready.
    pub fn has_next(&self) -> bool {
        self.pending.is_some()
    }

    fn advance(&mut self) -> Option<Result<ObjectRef>> {
        loop {
            if let Some((class, rows)) = &mut self.current {
                if rows.next_row() {
                    return Some(self.engine.load_row(*class, rows));
                }
                self.current = None;
            }

            let class = self.worklist.next()?;
            match self
                .engine
                .execute_query(class, self.filter.as_ref(), &self.args)
            {
                Ok(rows) => self.current = Some((class, rows)),
                Err(err) => {
                    self.worklist = Vec::new().into_iter();
                    return Some(Err(err));
                }
            }
        }
    }
}

impl Iterator for Cursor<'_> {
    type Item = Result<ObjectRef>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.pending.take()?;

        if next.is_ok() {
            self.pending = self.advance();
        } else {
            self.current = None;
            self.worklist = Vec::new().into_iter();
        }

        Some(next)
    }
}
