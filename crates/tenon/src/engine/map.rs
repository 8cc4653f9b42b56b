use super::Engine;
use crate::{class::MappedMember, store::Config};

use tenon_core::{
    schema::db::{Column, Table, Type},
    schema::Names,
    Error, MemberTy, Result, TableMapping,
};

impl Engine {
    pub(super) fn map_classes(&mut self, config: &Config) -> Result<()> {
        // Parents come first, so every superclass is mapped before its
        // subclasses copy its layout.
        for index in 0..self.classes.len() {
            self.map_class(index, config)?;
        }
        Ok(())
    }

    fn map_class(&mut self, index: usize, config: &Config) -> Result<()> {
        let parent = self.classes[index].parent;
        let mapping = match (self.classes[index].mapping, parent) {
            (TableMapping::Default, Some(parent)) => self.classes[parent].mapping,
            (TableMapping::Default, None) => TableMapping::Flat,
            (mapping, _) => mapping,
        };

        let class_name = self.classes[index].name();
        let inherited = self.take_inherited_columns(index);

        let mut members = std::mem::take(&mut self.classes[index].members);
        let mut tables = std::mem::take(&mut self.classes[index].tables);

        let mut own = vec![];
        for def in self.classes[index].ty.members {
            if let Some(existing) = members.iter().find(|member| member.name == def.name) {
                return Err(Error::invalid_schema(format!(
                    "member `{}` of class `{class_name}` is already declared by `{}`",
                    def.name, existing.declared_by
                )));
            }

            let flags = config.member_flags(class_name, def.name);
            own.push(MappedMember::new(def, class_name, flags));
        }

        let table = match mapping {
            TableMapping::Flat => {
                let table = self.class_table(class_name);

                // The subclass table repeats every inherited column
                for member in &mut members {
                    self.assign_member(member, table);
                }
                tables = vec![table];
                table
            }
            TableMapping::Linked => {
                let has_columns = own.iter().any(|member| member.width() > 0);

                match tables.last() {
                    Some(&last) if !has_columns => last,
                    _ => {
                        let table = self.class_table(class_name);
                        tables.push(table);
                        table
                    }
                }
            }
            TableMapping::Embedded => match tables.last() {
                Some(&last) => last,
                None => {
                    let table = self.class_table(class_name);
                    tables.push(table);
                    table
                }
            },
            TableMapping::Default => unreachable!("default mapping is resolved above"),
        };

        for mut member in own {
            self.assign_member(&mut member, table);
            members.push(member);
        }

        let view = self.names.view(class_name);

        tracing::debug!(
            class = class_name,
            ?mapping,
            inherited,
            tables = ?tables.iter().map(|&table| &self.tables[table].name).collect::<Vec<_>>(),
            "mapped class"
        );

        let class = &mut self.classes[index];
        class.mapping = mapping;
        class.members = members;
        class.tables = tables;
        class.view = view;

        Ok(())
    }

    /// Copies the superclass's tables and member assignments into class
    /// `index`. Returns `false` for root classes.
    fn take_inherited_columns(&mut self, index: usize) -> bool {
        let Some(parent) = self.classes[index].parent else {
            return false;
        };

        let tables = self.classes[parent].tables.clone();
        let members = self.classes[parent].members.clone();

        let class = &mut self.classes[index];
        class.tables = tables;
        class.members = members;
        true
    }

    /// The table named after `class_name`, created on first use.
    fn class_table(&mut self, class_name: &str) -> usize {
        let name = self.names.class_table(class_name);
        let entry = self.tables.entry(name);
        let index = entry.index();
        entry.or_insert_with_key(|name| Table::class_table(name.clone()));
        index
    }

    /// Places `member` in `table`, adding its columns. Containers get their
    /// association table once, from the class declaring them.
    fn assign_member(&mut self, member: &mut MappedMember, table: usize) {
        member.table = table;

        match member.ty {
            MemberTy::Container(_) => {
                if member.association.is_none() {
                    let name = self.names.association_table(member.declared_by, member.name);
                    let entry = self.tables.entry(name);
                    member.association = Some(entry.index());
                    entry.or_insert_with_key(|name| Table::association(name.clone()));
                }
                return;
            }
            MemberTy::Object(_) => {
                let column = Column::new(Names::class_id_column(member.name), Type::Integer);
                self.tables[table].push_column(column);
            }
            _ => {}
        }

        let column = Names::member_column(member.name);
        if let Some(ty) = Type::from_member(member.ty) {
            self.tables[table].push_column(Column::new(column.clone(), ty));
        }

        if member.flags.contains(tenon_core::MemberFlags::INDEXED) {
            self.tables[table].add_index(&column);
        }

        member.column = Some(column);
    }
}
