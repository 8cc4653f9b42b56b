use crate::logging_driver::{DriverOp, OpKind, OpsLog};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: OpsLog,
}

impl ExecLog {
    pub(crate) fn new(ops: OpsLog) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.borrow().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.borrow().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&DriverOp) -> bool,
    {
        self.ops.borrow().iter().filter(|op| predicate(op)).count()
    }

    pub fn count_kind(&self, kind: OpKind) -> usize {
        self.count(|op| op.kind == kind)
    }

    /// Number of selects run through prepared statements
    pub fn queries(&self) -> usize {
        self.count_kind(OpKind::Query)
    }

    /// Statements that changed rows, in execution order
    pub fn writes(&self) -> Vec<String> {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op.kind, OpKind::Execute | OpKind::Insert))
            .map(|op| op.sql.clone())
            .collect()
    }

    /// SQL text of every logged operation
    pub fn sql(&self) -> Vec<String> {
        self.ops.borrow().iter().map(|op| op.sql.clone()).collect()
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.ops.borrow_mut().clear();
    }

    /// Get access to all operations for custom assertions
    pub fn with_ops<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[DriverOp]) -> R,
    {
        f(&self.ops.borrow())
    }
}
