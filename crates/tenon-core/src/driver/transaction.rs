use crate::{bail, Result};

/// Tracks nesting depth of store transactions.
///
/// Only the outermost `begin` and the matching `commit` reach the driver;
/// inner pairs only move the depth.
#[derive(Debug, Default)]
pub struct TransactionDepth {
    depth: u32,
}

impl TransactionDepth {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_active(&self) -> bool {
        self.depth > 0
    }

    /// Increments the depth. Returns `true` when this opens the outermost
    /// transaction.
    pub fn begin(&mut self) -> bool {
        self.depth += 1;
        self.depth == 1
    }

    /// Decrements the depth. Returns `true` when this closes the outermost
    /// transaction.
    pub fn commit(&mut self) -> Result<bool> {
        if self.depth == 0 {
            bail!("commit without a matching begin");
        }
        self.depth -= 1;
        Ok(self.depth == 0)
    }
}
