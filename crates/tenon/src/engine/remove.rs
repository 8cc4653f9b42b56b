use super::Engine;

use tenon_core::{stmt::Value, ObjectRef, Result, Statement as _};

impl Engine {
    /// Deletes the object's row from every table of its class and detaches
    /// it. Referenced and contained objects are not removed.
    pub(crate) fn remove_object(&mut self, object: &ObjectRef) -> Result<()> {
        let oid = object.borrow().object_id();
        if !oid.is_valid() {
            return Ok(());
        }

        let class = self.class_of(object)?;
        let statements = self.classes[class].statements_mut()?;
        for table in &mut statements.tables {
            table.delete.bind(0, Value::I64(oid.0));
            table.delete.execute()?;
        }

        self.classes[class].cache.remove(oid);
        object.borrow_mut().identity_mut().detach();

        tracing::debug!(class = self.classes[class].name(), %oid, "removed object");
        Ok(())
    }

    /// Drops the object from the identity cache and detaches it. The
    /// database is not touched; fetching the id again builds a new instance.
    pub(crate) fn release_object(&mut self, object: &ObjectRef) -> Result<()> {
        let oid = object.borrow().object_id();
        if !oid.is_valid() {
            return Ok(());
        }

        let class = self.class_of(object)?;
        self.classes[class].cache.remove(oid);
        object.borrow_mut().identity_mut().detach();

        tracing::trace!(class = self.classes[class].name(), %oid, "released object");
        Ok(())
    }
}
