use super::{insert::bind_members, Engine};

use tenon_core::{stmt::Value, ObjectRef, Result, Statement as _};

impl Engine {
    /// Writes the primitive and reference members of a persisted object back
    /// to every table of its class. Transient references are inserted first;
    /// already persisted ones are not updated. Containers are left as they
    /// were stored.
    pub(crate) fn update_object(&mut self, object: &ObjectRef) -> Result<()> {
        let oid = object.borrow().object_id();
        if !oid.is_valid() {
            tracing::debug!("update of a transient object ignored");
            return Ok(());
        }

        let class = self.class_of(object)?;
        let state = self.export(class, object);
        let values = self.member_values(class, &state)?;

        let statements = self.classes[class].statements_mut()?;
        for table in &mut statements.tables {
            let Some(update) = &mut table.update else {
                continue;
            };

            let key = bind_members(&mut **update, 0, &table.members, &values);
            update.bind(key, Value::I64(oid.0));
            update.execute()?;
        }

        tracing::debug!(class = self.classes[class].name(), %oid, "updated object");
        Ok(())
    }
}
