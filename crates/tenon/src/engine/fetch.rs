use super::Engine;

use tenon_core::{
    err, stmt::Value, ClassId, MemberTy, ObjectId, ObjectRef, ObjectState, Result, Rows,
    Statement as _,
};

impl Engine {
    /// The instance of exactly class `class` with id `oid`, from the cache or
    /// the database.
    pub(crate) fn fetch_object(&mut self, class: usize, oid: ObjectId) -> Result<Option<ObjectRef>> {
        if let Some(object) = self.classes[class].cache.lookup(oid) {
            return Ok(Some(object));
        }

        let statements = self.classes[class].statements_mut()?;
        statements.fetch.bind(0, Value::I64(oid.0));
        let mut rows = statements.fetch.query()?;

        if !rows.next_row() {
            return Ok(None);
        }

        self.load_row(class, &rows).map(Some)
    }

    /// Looks `oid` up in `class` and then in each of its subclasses, depth
    /// first.
    ///
    /// Every flat table numbers its rows on its own, so distinct objects of
    /// classes with separate flat tables can share an id. The first class in
    /// this order holding the id wins.
    pub(crate) fn find_object(&mut self, class: usize, oid: ObjectId) -> Result<Option<ObjectRef>> {
        for index in self.hierarchy(class) {
            if let Some(object) = self.fetch_object(index, oid)? {
                return Ok(Some(object));
            }
        }
        Ok(None)
    }

    /// Materializes the current row of `rows`, laid out as the view of class
    /// `class`. A cached instance with the same id wins over the row.
    ///
    /// The blank instance is cached before its members are imported, so a
    /// reference cycle leading back to it resolves to the same instance.
    pub(crate) fn load_row(&mut self, class: usize, rows: &Rows) -> Result<ObjectRef> {
        let oid = rows
            .value(0)
            .to_option_i64()?
            .map(ObjectId)
            .ok_or_else(|| err!("row of `{}` has no object id", self.classes[class].name()))?;

        if let Some(object) = self.classes[class].cache.lookup(oid) {
            return Ok(object);
        }

        let descriptor = &mut self.classes[class];
        let object = descriptor.ty.create_instance();
        object.borrow_mut().identity_mut().connect(descriptor.cid, oid);
        descriptor.cache.add(&object);

        let ret = self
            .restore_state(class, oid, rows)
            .and_then(|state| object.borrow_mut().restore_members(&state));

        if let Err(cause) = ret {
            self.classes[class].cache.remove(oid);
            object.borrow_mut().identity_mut().detach();
            return Err(cause.context(err!(
                "failed to load `{}` object {oid}",
                self.classes[class].name()
            )));
        }

        tracing::trace!(class = self.classes[class].name(), %oid, "loaded object");
        Ok(object)
    }

    /// Builds the member state of one row, resolving references and
    /// containers.
    fn restore_state(&mut self, class: usize, oid: ObjectId, rows: &Rows) -> Result<ObjectState> {
        let cid = self.classes[class].cid;
        let mut state = ObjectState::new(self.classes[class].members.iter().map(|m| m.name));

        // `oid` and `cid` come first
        let mut column = 2;

        for index in 0..self.classes[class].members.len() {
            let member = &self.classes[class].members[index];
            let (name, ty) = (member.name, member.ty);

            match ty {
                MemberTy::Object(target) => {
                    let ref_cid = rows.value(column).to_option_i64()?;
                    let ref_oid = rows.value(column + 1).to_option_i64()?;
                    column += 2;

                    let object = match (ref_cid, ref_oid) {
                        (Some(ref_cid), Some(ref_oid)) => {
                            self.fetch_reference(target, ClassId(ref_cid), ObjectId(ref_oid))?
                        }
                        _ => None,
                    };
                    state.set_object(name, object);
                }
                MemberTy::Container(target) => {
                    let elements = self.fetch_elements(class, index, cid, oid, target)?;
                    state.set_container(name, elements);
                }
                _ => {
                    state.set(name, rows.value(column));
                    column += 1;
                }
            }
        }

        Ok(state)
    }

    /// Resolves a stored `(cid, oid)` pair against the hierarchy rooted at
    /// the declared class `class_name`.
    fn fetch_reference(
        &mut self,
        class_name: &str,
        cid: ClassId,
        oid: ObjectId,
    ) -> Result<Option<ObjectRef>> {
        let root = self.class_index(class_name)?;

        let Some(class) = self.find_sub_class(root, cid) else {
            tracing::warn!(class = class_name, ?cid, %oid, "reference to an unknown class id");
            return Ok(None);
        };

        let object = self.fetch_object(class, oid)?;
        if object.is_none() {
            tracing::warn!(class = class_name, %oid, "dangling reference");
        }
        Ok(object)
    }

    /// Elements of container `member` owned by `(cid, oid)`, in insertion
    /// order.
    fn fetch_elements(
        &mut self,
        class: usize,
        member: usize,
        cid: ClassId,
        oid: ObjectId,
        class_name: &str,
    ) -> Result<Vec<ObjectRef>> {
        let statements = self.classes[class].statements_mut()?;
        let Some(association) = statements
            .associations
            .iter_mut()
            .find(|association| association.member == member)
        else {
            return Ok(vec![]);
        };

        association.select.bind(0, Value::I64(oid.0));
        association.select.bind(1, Value::I64(cid.0));
        let mut rows = association.select.query()?;

        let mut elements = Vec::with_capacity(rows.remaining());
        while rows.next_row() {
            let element_oid = rows.value(0).to_option_i64()?;
            let element_cid = rows.value(1).to_option_i64()?;

            let (Some(element_oid), Some(element_cid)) = (element_oid, element_cid) else {
                continue;
            };

            if let Some(element) =
                self.fetch_reference(class_name, ClassId(element_cid), ObjectId(element_oid))?
            {
                elements.push(element);
            }
        }

        Ok(elements)
    }
}
