mod add_column;
pub use add_column::AddColumn;

mod column_def;
pub use column_def::ColumnDef;

mod condition;
pub use condition::Condition;

mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::CreateTable;

mod create_view;
pub use create_view::CreateView;

mod delete;
pub use delete::Delete;

mod drop_view;
pub use drop_view::DropView;

mod insert;
pub use insert::Insert;

mod name;
pub use name::Name;

mod query;
pub use query::{Join, Query, Select, SelectColumn, TableRef};

mod update;
pub use update::Update;

pub use tenon_core::stmt::*;

#[derive(Debug, Clone)]
pub enum Statement {
    AddColumn(AddColumn),
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    CreateView(CreateView),
    Delete(Delete),
    DropView(DropView),
    Insert(Insert),
    Query(Query),
    Update(Update),
}

impl Statement {
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Query(_))
    }

    /// Returns `true` for schema statements.
    pub fn is_ddl(&self) -> bool {
        matches!(
            self,
            Statement::AddColumn(_)
                | Statement::CreateIndex(_)
                | Statement::CreateTable(_)
                | Statement::CreateView(_)
                | Statement::DropView(_)
        )
    }
}
