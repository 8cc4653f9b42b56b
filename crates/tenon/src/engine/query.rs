use super::Engine;
use crate::class::ClassDescriptor;

use tenon_core::{
    err,
    schema::Names,
    stmt::{Expr, ExprArg, Value},
    Result, Rows, Statement as _,
};
use tenon_sql::{Condition, Name, Select, Statement};

impl Engine {
    /// `SELECT oid, cid, <member columns> FROM <view>`
    pub(crate) fn select_class(&self, class: &ClassDescriptor) -> Select {
        let mut select = Select::from_table(&class.view)
            .column(Names::OID)
            .column(Names::CID);

        for member in &class.members {
            for column in member.columns() {
                select = select.column(column);
            }
        }

        select
    }

    /// Runs one select over the view of class `class`, filtered by `filter`.
    /// Late-bound arguments in the filter are taken from `args`.
    pub(crate) fn execute_query(
        &mut self,
        class: usize,
        filter: Option<&Expr>,
        args: &[Value],
    ) -> Result<Rows> {
        let descriptor = &self.classes[class];
        let name = descriptor.name();
        let mut select = self.select_class(descriptor);
        let mut params: Vec<ExprArg> = vec![];

        if let Some(filter) = filter {
            let text = self.serializer.compile(filter, descriptor, &mut params);
            select = select.filter(Condition::Filter(text));
        }

        let sql = self.serializer.serialize(&Statement::query(select));
        let mut stmt = self.connection.create_statement(&sql)?;
        bind_args(&mut *stmt, &params, args)?;

        tracing::trace!(class = name, %sql, "query");
        stmt.query()
    }

    /// Distinct values of `member` across `class` and its subclasses, sorted
    /// ascending. Classes without a column for the member contribute
    /// nothing; if none has one the result is empty.
    pub(crate) fn collect_values(
        &mut self,
        class: usize,
        member: &str,
        filter: Option<&Expr>,
        args: &[Value],
    ) -> Result<Vec<Value>> {
        let mut params: Vec<ExprArg> = vec![];
        let mut selects = vec![];
        let mut column = None;

        for index in self.hierarchy(class) {
            let descriptor = &self.classes[index];
            let Some(found) = descriptor.member(member).and_then(|m| m.column.clone()) else {
                continue;
            };

            let mut select = Select::from_table(&descriptor.view)
                .column(&found)
                .distinct();
            if let Some(filter) = filter {
                let text = self.serializer.compile(filter, descriptor, &mut params);
                select = select.filter(Condition::Filter(text));
            }

            selects.push(select);
            column = Some(found);
        }

        let Some(column) = column else {
            tracing::debug!(
                class = self.classes[class].name(),
                member,
                "no column to collect values from"
            );
            return Ok(vec![]);
        };

        let sql = self
            .serializer
            .serialize(&Statement::union(selects, Some(Name::from(column))));
        let mut stmt = self.connection.create_statement(&sql)?;
        bind_args(&mut *stmt, &params, args)?;

        tracing::trace!(%sql, "collect values");
        let mut rows = stmt.query()?;
        let mut values = vec![];
        while rows.next_row() {
            values.push(rows.value(0));
        }

        Ok(values)
    }
}

/// Binds the argument each placeholder refers to, in placeholder order.
fn bind_args(
    stmt: &mut dyn tenon_core::Statement,
    params: &[ExprArg],
    args: &[Value],
) -> Result<()> {
    for (index, param) in params.iter().enumerate() {
        let value = args
            .get(param.position)
            .ok_or_else(|| err!("query argument {} is missing", param.position))?;
        stmt.bind(index, value.clone());
    }
    Ok(())
}
