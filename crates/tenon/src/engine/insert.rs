use super::Engine;

use by_address::ByAddress;
use tenon_core::{stmt::Value, MemberTy, ObjectId, ObjectRef, ObjectState, Result, Statement};

impl Engine {
    /// Inserts `object` and, first, every transient object it refers to or
    /// contains. Returns the object's id.
    ///
    /// Already persisted objects are left alone. An object whose insert is
    /// still running further up the call chain yields an invalid id.
    pub(crate) fn insert_object(&mut self, object: &ObjectRef) -> Result<ObjectId> {
        let oid = object.borrow().object_id();
        if oid.is_valid() {
            return Ok(oid);
        }

        let key = ByAddress(object.clone());
        if !self.in_progress.insert(key.clone()) {
            return Ok(ObjectId::INVALID);
        }

        let ret = self
            .class_of(object)
            .and_then(|class| self.insert_into(class, object));
        self.in_progress.remove(&key);
        ret
    }

    fn insert_into(&mut self, class: usize, object: &ObjectRef) -> Result<ObjectId> {
        let state = self.export(class, object);
        let values = self.member_values(class, &state)?;

        // Elements are inserted before the owner; their association rows
        // are written once the owner has an id.
        let mut containers = vec![];
        for member in self.classes[class].containers().collect::<Vec<_>>() {
            let elements = state.container(self.classes[class].members[member].name).to_vec();
            for element in &elements {
                self.insert_object(element)?;
            }
            containers.push((member, elements));
        }

        let cid = self.classes[class].cid;
        let statements = self.classes[class].statements_mut()?;

        let mut oid = ObjectId::INVALID;
        for (position, table) in statements.tables.iter_mut().enumerate() {
            let insert = &mut table.insert;
            if position == 0 {
                insert.bind(0, Value::Null);
            } else {
                insert.bind(0, Value::I64(oid.0));
            }
            insert.bind(1, Value::I64(cid.0));
            bind_members(&mut **insert, 2, &table.members, &values);

            if position == 0 {
                oid = ObjectId(insert.execute_insert()?);
            } else {
                insert.execute()?;
            }
        }

        object.borrow_mut().identity_mut().connect(cid, oid);
        self.classes[class].cache.add(object);

        tracing::debug!(class = self.classes[class].name(), %oid, "inserted object");

        let statements = self.classes[class].statements_mut()?;
        for (member, elements) in containers {
            let Some(association) = statements
                .associations
                .iter_mut()
                .find(|association| association.member == member)
            else {
                continue;
            };

            association.insert.bind(0, Value::I64(oid.0));
            association.insert.bind(1, Value::I64(cid.0));

            for element in elements {
                let identity = *element.borrow().identity();
                if !identity.is_persisted() {
                    tracing::warn!(
                        %oid,
                        "container element is still being inserted; skipping its association row"
                    );
                    continue;
                }

                association.insert.bind(2, Value::I64(identity.oid.0));
                association.insert.bind(3, Value::I64(identity.cid.0));
                association.insert.execute()?;
            }
        }

        Ok(oid)
    }

    /// Exports the members of `object` into a state shaped after class
    /// `class`.
    pub(super) fn export(&self, class: usize, object: &ObjectRef) -> ObjectState {
        let names = self.classes[class].members.iter().map(|member| member.name);
        let mut state = ObjectState::new(names);
        object.borrow().store_members(&mut state);
        state
    }

    /// Bind values of every member, parallel to the class's member list.
    /// References are inserted on demand; containers bind nothing.
    pub(super) fn member_values(
        &mut self,
        class: usize,
        state: &ObjectState,
    ) -> Result<Vec<Vec<Value>>> {
        let mut values = Vec::with_capacity(self.classes[class].members.len());

        for index in 0..self.classes[class].members.len() {
            let member = &self.classes[class].members[index];
            let (name, ty) = (member.name, member.ty);

            let value = match ty {
                MemberTy::Container(_) => vec![],
                MemberTy::Object(_) => self.reference_values(name, state.object(name))?,
                _ => vec![state.get(name).clone()],
            };
            values.push(value);
        }

        Ok(values)
    }

    /// `[cid, oid]` of the referenced object, inserting it first if it is
    /// transient.
    fn reference_values(&mut self, member: &str, target: Option<ObjectRef>) -> Result<Vec<Value>> {
        let Some(target) = target else {
            return Ok(vec![Value::Null, Value::Null]);
        };

        let oid = self.insert_object(&target)?;
        if !oid.is_valid() {
            tracing::warn!(
                member,
                "referenced object is still being inserted; storing the reference as NULL"
            );
            return Ok(vec![Value::Null, Value::Null]);
        }

        let cid = target.borrow().identity().cid;
        Ok(vec![Value::I64(cid.0), Value::I64(oid.0)])
    }
}

/// Binds the values of `members` to consecutive parameters starting at
/// `start`. Returns the next free parameter index.
pub(super) fn bind_members(
    stmt: &mut dyn Statement,
    start: usize,
    members: &[usize],
    values: &[Vec<Value>],
) -> usize {
    let mut index = start;
    for &member in members {
        for value in &values[member] {
            stmt.bind(index, value.clone());
            index += 1;
        }
    }
    index
}
