use super::Engine;
use crate::class::{AssociationStatements, Statements, TableStatements};

use tenon_core::{schema::Names, Result};
use tenon_sql::{Condition, Name, Query, Select, Statement};

const OWNER_OID: &str = "owner_oid";
const OWNER_CID: &str = "owner_cid";
const ELEMENT_OID: &str = "element_oid";
const ELEMENT_CID: &str = "element_cid";

impl Engine {
    /// Compiles the fetch, per-table and per-container statements of class
    /// `index`.
    pub(super) fn prepare_class(&mut self, index: usize) -> Result<()> {
        let class = &self.classes[index];

        let fetch = Statement::query(self.select_class(class).filter(Condition::param(Names::OID)));
        let fetch = self.serializer.serialize(&fetch);

        let mut tables = vec![];
        for &table in &class.tables {
            let name = &self.tables[table].name;
            let members: Vec<usize> = class.members_in(table).collect();
            let columns: Vec<String> = members
                .iter()
                .flat_map(|&member| class.members[member].columns())
                .collect();

            let insert = Statement::insert(
                name,
                [Names::OID.to_string(), Names::CID.to_string()]
                    .into_iter()
                    .chain(columns.iter().cloned()),
            );
            let update = (!columns.is_empty()).then(|| Statement::update(name, &columns, Names::OID));
            let delete = Statement::delete(name, Condition::param(Names::OID));

            tables.push((
                members,
                self.serializer.serialize(&insert),
                update.map(|update| self.serializer.serialize(&update)),
                self.serializer.serialize(&delete),
            ));
        }

        let mut associations = vec![];
        for member in class.containers() {
            let Some(association) = class.members[member].association else {
                continue;
            };
            let name = &self.tables[association].name;

            let insert = Statement::insert(name, [OWNER_OID, OWNER_CID, ELEMENT_OID, ELEMENT_CID]);
            let select = Query {
                body: vec![Select::from_table(name)
                    .column(ELEMENT_OID)
                    .column(ELEMENT_CID)
                    .filter(Condition::param(OWNER_OID))
                    .filter(Condition::param(OWNER_CID))],
                order_by: Some(Name::from("rowid")),
            };

            associations.push((
                member,
                self.serializer.serialize(&insert),
                self.serializer.serialize(&select.into()),
            ));
        }

        tracing::debug!(class = class.name(), %fetch, "preparing statements");

        let statements = Statements {
            fetch: self.connection.create_statement(&fetch)?,
            tables: tables
                .into_iter()
                .map(|(members, insert, update, delete)| {
                    Ok(TableStatements {
                        members,
                        insert: self.connection.create_statement(&insert)?,
                        update: update
                            .map(|update| self.connection.create_statement(&update))
                            .transpose()?,
                        delete: self.connection.create_statement(&delete)?,
                    })
                })
                .collect::<Result<_>>()?,
            associations: associations
                .into_iter()
                .map(|(member, insert, select)| {
                    Ok(AssociationStatements {
                        member,
                        insert: self.connection.create_statement(&insert)?,
                        select: self.connection.create_statement(&select)?,
                    })
                })
                .collect::<Result<_>>()?,
        };

        self.classes[index].statements = Some(statements);
        Ok(())
    }
}
