mod member;
pub(crate) use member::MappedMember;

mod statements;
pub(crate) use statements::{AssociationStatements, Statements, TableStatements};

use crate::cache::ObjectCache;

use tenon_core::{schema::app::TypeInfo, ClassId, MemberTy, TableMapping};
use tenon_sql::ResolveColumn;

/// How instances of one registered class are stored.
pub(crate) struct ClassDescriptor {
    pub(crate) ty: &'static TypeInfo,

    /// Requested policy; replaced by the resolved policy once mapped
    pub(crate) mapping: TableMapping,

    pub(crate) cid: ClassId,

    /// Index of the superclass descriptor
    pub(crate) parent: Option<usize>,

    /// Indices of direct subclass descriptors
    pub(crate) subclasses: Vec<usize>,

    /// Indices of the tables holding this class's rows, in join order. The
    /// first table assigns object ids.
    pub(crate) tables: Vec<usize>,

    /// Inherited members first, then own members
    pub(crate) members: Vec<MappedMember>,

    /// Name of the view exposing one row per instance of exactly this class
    pub(crate) view: String,

    pub(crate) statements: Option<Statements>,

    pub(crate) cache: ObjectCache,
}

impl ClassDescriptor {
    pub(crate) fn new(ty: &'static TypeInfo, mapping: TableMapping) -> Self {
        Self {
            ty,
            mapping,
            cid: ClassId::INVALID,
            parent: None,
            subclasses: vec![],
            tables: vec![],
            members: vec![],
            view: String::new(),
            statements: None,
            cache: ObjectCache::default(),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.ty.name
    }

    pub(crate) fn member(&self, name: &str) -> Option<&MappedMember> {
        self.members.iter().find(|member| member.name == name)
    }

    /// Members stored in `table`, in mapped order.
    pub(crate) fn members_in(&self, table: usize) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(move |(_, member)| member.column.is_some() && member.table == table)
            .map(|(index, _)| index)
    }

    /// Members backed by an association table.
    pub(crate) fn containers(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, member)| matches!(member.ty, MemberTy::Container(_)))
            .map(|(index, _)| index)
    }

    pub(crate) fn statements_mut(&mut self) -> tenon_core::Result<&mut Statements> {
        let name = self.name();
        self.statements
            .as_mut()
            .ok_or_else(|| tenon_core::err!("statements for class `{name}` are not prepared"))
    }
}

impl ResolveColumn for ClassDescriptor {
    fn resolve_column(&self, member: &str) -> Option<String> {
        self.member(member)?.column.clone()
    }
}
