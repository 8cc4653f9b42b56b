use tenon_core::Statement;

/// Statements prepared for one class.
#[derive(Debug)]
pub(crate) struct Statements {
    /// `SELECT ... FROM <view> WHERE oid=?`
    pub(crate) fetch: Box<dyn Statement>,

    /// One entry per used table, parallel to `ClassDescriptor::tables`
    pub(crate) tables: Vec<TableStatements>,

    pub(crate) associations: Vec<AssociationStatements>,
}

#[derive(Debug)]
pub(crate) struct TableStatements {
    /// Members bound after `oid` and `cid`, in parameter order
    pub(crate) members: Vec<usize>,

    pub(crate) insert: Box<dyn Statement>,

    /// `None` when the table holds no member columns of this class
    pub(crate) update: Option<Box<dyn Statement>>,

    pub(crate) delete: Box<dyn Statement>,
}

/// Statements for one container member's association table.
#[derive(Debug)]
pub(crate) struct AssociationStatements {
    pub(crate) member: usize,

    pub(crate) insert: Box<dyn Statement>,

    /// Element ids and class ids of one owner, in insertion order
    pub(crate) select: Box<dyn Statement>,
}
