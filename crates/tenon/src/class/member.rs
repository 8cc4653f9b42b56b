use tenon_core::{MemberDef, MemberFlags, MemberTy};

/// A member assigned to its storage.
#[derive(Debug, Clone)]
pub(crate) struct MappedMember {
    pub(crate) name: &'static str,

    pub(crate) ty: MemberTy,

    /// Class declaring the member
    pub(crate) declared_by: &'static str,

    /// Index of the table holding the member's column(s)
    pub(crate) table: usize,

    /// Value column; `None` for containers
    pub(crate) column: Option<String>,

    /// Index of the association table, for containers
    pub(crate) association: Option<usize>,

    pub(crate) flags: MemberFlags,
}

impl MappedMember {
    pub(crate) fn new(def: &MemberDef, declared_by: &'static str, flags: MemberFlags) -> Self {
        Self {
            name: def.name,
            ty: def.ty,
            declared_by,
            table: usize::MAX,
            column: None,
            association: None,
            flags,
        }
    }

    pub(crate) fn is_object(&self) -> bool {
        matches!(self.ty, MemberTy::Object(_))
    }

    /// Statement parameters this member binds: two for references (class
    /// id, object id), one for other columns, none for containers.
    pub(crate) fn width(&self) -> usize {
        match self.ty {
            MemberTy::Object(_) => 2,
            MemberTy::Container(_) => 0,
            _ => 1,
        }
    }

    /// Physical columns in bind order.
    pub(crate) fn columns(&self) -> Vec<String> {
        let Some(column) = &self.column else {
            return vec![];
        };

        if self.is_object() {
            vec![tenon_core::schema::Names::class_id_column(self.name), column.clone()]
        } else {
            vec![column.clone()]
        }
    }
}
