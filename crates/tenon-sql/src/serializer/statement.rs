use super::{Comma, Delimited, Ident, Literal, Params, Placeholder, ToSql};

use crate::stmt::{self, Statement, Value};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::AddColumn(stmt) => stmt.to_sql(f),
            Statement::CreateIndex(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::CreateView(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropView(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);
        let primary_key = self.primary_key.then_some(" PRIMARY KEY");

        fmt!(f, name " " self.ty primary_key);
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = &self.name;
        let columns = Comma(&self.columns);

        fmt!(f, "CREATE TABLE " name " (" columns ")");
    }
}

impl ToSql for &stmt::AddColumn {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table;
        let column = &self.column;

        fmt!(f, "ALTER TABLE " table " ADD COLUMN " column);
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = &self.name;
        let on = &self.on;
        let column = &self.column;

        fmt!(f, "CREATE INDEX IF NOT EXISTS " name " ON " on " (" column ")");
    }
}

impl ToSql for &stmt::CreateView {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = &self.name;
        let select = &self.select;

        fmt!(f, "CREATE VIEW " name " AS " select);
    }
}

impl ToSql for &stmt::DropView {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = &self.name;

        fmt!(f, "DROP VIEW IF EXISTS " name);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table;
        let columns = Comma(&self.columns);
        let values = Comma((1..=self.columns.len()).map(Placeholder));

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table;
        let assignments = Comma(self.assignments.iter().map(Assignment));
        let key = &self.key;

        fmt!(f, "UPDATE " table " SET " assignments " WHERE " key "=?");
    }
}

struct Assignment<'a>(&'a stmt::Name);

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, self.0 "=?");
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let from = &self.from;
        let filter = &self.filter;

        fmt!(f, "DELETE FROM " from " WHERE " filter);
    }
}

impl ToSql for &stmt::Query {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Delimited(&self.body, " UNION "));

        if let Some(order_by) = &self.order_by {
            fmt!(f, " ORDER BY " order_by);
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let distinct = self.distinct.then_some("DISTINCT ");
        let columns = Comma(&self.columns);
        let from = &self.from;

        fmt!(f, "SELECT " distinct columns " FROM " from);

        for join in &self.joins {
            let table = &join.table;
            let on = &join.on;

            fmt!(f, " JOIN " table " ON " on);
        }

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }
    }
}

impl ToSql for &stmt::SelectColumn {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, &self.expr);

        if let Some(alias) = &self.alias {
            fmt!(f, " AS " Ident(alias));
        }
    }
}

impl ToSql for &stmt::TableRef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, &self.name);

        if let Some(alias) = &self.alias {
            fmt!(f, " " Ident(alias));
        }
    }
}

impl ToSql for &stmt::Condition {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Condition;

        match self {
            Condition::Param(column) => fmt!(f, column "=?"),
            Condition::Literal(column, Value::Null) => fmt!(f, column " IS NULL"),
            Condition::Literal(column, value) => fmt!(f, column "=" Literal(value)),
            Condition::Columns(lhs, rhs) => fmt!(f, lhs "=" rhs),
            Condition::Filter(filter) => fmt!(f, filter),
            Condition::And(operands) => {
                let bracket = operands.len() > 1;
                let operands = operands
                    .iter()
                    .map(|operand| Conjunct { operand, bracket });
                fmt!(f, Delimited(operands, " AND "));
            }
        }
    }
}

/// An operand of a conjunction. Compiled filters may contain `OR` and are
/// bracketed.
struct Conjunct<'a> {
    operand: &'a stmt::Condition,
    bracket: bool,
}

impl ToSql for Conjunct<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self.operand {
            stmt::Condition::Filter(filter) if self.bracket => fmt!(f, "(" filter ")"),
            operand => operand.to_sql(f),
        }
    }
}
