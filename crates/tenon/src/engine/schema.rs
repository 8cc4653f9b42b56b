use super::Engine;
use crate::class::ClassDescriptor;

use std::collections::HashMap;
use tenon_core::{schema::db::Table, schema::Names, stmt::Value, ClassId, Result};
use tenon_sql::{Condition, Name, Select, Statement, TableRef};

impl Engine {
    /// Reads the class registry and assigns ids to classes it does not list
    /// yet. Existing ids are reused across sessions.
    pub(super) fn assign_class_ids(&mut self) -> Result<()> {
        let registry = Table::classes();
        if !self.connection.has_table(&registry.name)? {
            let sql = self.serializer.serialize(&Statement::create_table(&registry));
            tracing::debug!(table = %registry.name, "creating class registry");
            self.connection.execute(&sql)?;
        }

        let select = Select::from_table(Names::CLASSES_TABLE)
            .column(Names::CID)
            .column("class");
        let sql = self.serializer.serialize(&Statement::query(select));
        let mut rows = self.connection.create_statement(&sql)?.query()?;

        let mut known = HashMap::new();
        while rows.next_row() {
            let cid = rows.value(0).to_option_i64()?;
            if let (Some(cid), Value::String(class)) = (cid, rows.value(1)) {
                known.insert(class, ClassId(cid));
            }
        }

        let sql = self
            .serializer
            .serialize(&Statement::insert(Names::CLASSES_TABLE, [Names::CID, "class"]));
        let mut insert = self.connection.create_statement(&sql)?;

        for class in self.classes.values_mut() {
            class.cid = match known.get(class.name()) {
                Some(&cid) => cid,
                None => {
                    insert.bind(0, Value::Null);
                    insert.bind(1, Value::from(class.name()));
                    let cid = ClassId(insert.execute_insert()?);
                    tracing::debug!(class = class.name(), ?cid, "registered class id");
                    cid
                }
            };
        }

        Ok(())
    }

    /// Creates missing tables, adds missing columns to existing ones, and
    /// ensures every index exists.
    pub(super) fn create_tables(&mut self) -> Result<()> {
        for table in self.tables.values() {
            if !self.connection.has_table(&table.name)? {
                tracing::debug!(table = %table.name, "creating table");
                let sql = self.serializer.serialize(&Statement::create_table(table));
                self.connection.execute(&sql)?;
            } else {
                for column in &table.columns {
                    if self.connection.has_column(&table.name, &column.name)? {
                        continue;
                    }

                    tracing::debug!(table = %table.name, column = %column.name, "adding column");
                    let sql = self
                        .serializer
                        .serialize(&Statement::add_column(&table.name, column));
                    self.connection.execute(&sql)?;
                }
            }

            for index in &table.indices {
                let sql = self.serializer.serialize(&Statement::create_index(index));
                self.connection.execute(&sql)?;
            }
        }

        Ok(())
    }

    /// Recreates the per-class views.
    pub(super) fn create_views(&mut self) -> Result<()> {
        for class in self.classes.values() {
            if self.connection.has_view(&class.view)? {
                let sql = self.serializer.serialize(&Statement::drop_view(&class.view));
                self.connection.execute(&sql)?;
            }

            let select = self.view_select(class);
            tracing::debug!(view = %class.view, class = class.name(), "creating view");
            let sql = self
                .serializer
                .serialize(&Statement::create_view(&class.view, select));
            self.connection.execute(&sql)?;
        }

        Ok(())
    }

    /// Joins the class's tables on `oid` and keeps only rows whose `cid` is
    /// exactly this class.
    fn view_select(&self, class: &ClassDescriptor) -> Select {
        if let [table] = class.tables.as_slice() {
            let mut select = Select::from_table(&self.tables[*table].name)
                .column(Names::OID)
                .column(Names::CID);
            for member in &class.members {
                for column in member.columns() {
                    select = select.column(column);
                }
            }
            return select.filter(Condition::literal(Names::CID, class.cid.0));
        }

        let aliases: Vec<String> = (0..class.tables.len()).map(alias).collect();
        let first = &aliases[0];

        let mut select = Select::from_table(TableRef::aliased(
            &self.tables[class.tables[0]].name,
            first.clone(),
        ))
        .column_as(Name::qualified(first, Names::OID), Names::OID)
        .column_as(Name::qualified(first, Names::CID), Names::CID);

        for member in &class.members {
            let Some(position) = class.tables.iter().position(|&table| table == member.table)
            else {
                continue;
            };

            for column in member.columns() {
                select = select.column_as(Name::qualified(&aliases[position], &column), column);
            }
        }

        for (position, &table) in class.tables.iter().enumerate().skip(1) {
            let alias = &aliases[position];
            select = select.join(
                TableRef::aliased(&self.tables[table].name, alias.clone()),
                Condition::columns(
                    Name::qualified(first, Names::OID),
                    Name::qualified(alias, Names::OID),
                ),
            );
        }

        select.filter(Condition::literal(
            Name::qualified(first, Names::CID),
            class.cid.0,
        ))
    }
}

/// `a`, `b`, ... then `t26`, `t27`, ...
fn alias(position: usize) -> String {
    match u8::try_from(position) {
        Ok(position) if position < 26 => char::from(b'a' + position).to_string(),
        _ => format!("t{position}"),
    }
}
