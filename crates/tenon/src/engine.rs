mod fetch;
mod insert;
mod map;
mod prepare;
mod query;
mod remove;
mod schema;
mod update;

use crate::{class::ClassDescriptor, store::Config};

use by_address::ByAddress;
use indexmap::IndexMap;
use std::collections::HashSet;
use tenon_core::{
    driver::TransactionDepth, schema::db::Table, schema::Names, ClassId, Connection, Error,
    ObjectRef, Result, TypeInfo,
};
use tenon_sql::Serializer;

/// Mapped schema plus the single open connection.
///
/// Classes are stored parents first, so a class's superclass always has a
/// lower index than the class itself.
pub(crate) struct Engine {
    connection: Box<dyn Connection>,

    names: Names,

    /// Every table any class maps to, by physical name
    tables: IndexMap<String, Table>,

    classes: IndexMap<&'static str, ClassDescriptor>,

    serializer: Serializer,

    transaction: TransactionDepth,

    /// Objects whose insert is running
    in_progress: HashSet<ByAddress<ObjectRef>>,
}

impl Engine {
    /// Maps every registered class onto `connection` and prepares its
    /// statements, creating missing tables, columns, indices and views.
    pub(crate) fn open(config: &Config, connection: Box<dyn Connection>) -> Result<Engine> {
        let mut engine = Engine {
            connection,
            names: config.names.clone(),
            tables: IndexMap::new(),
            classes: IndexMap::new(),
            serializer: Serializer::sqlite(),
            transaction: TransactionDepth::new(),
            in_progress: HashSet::new(),
        };

        engine.register_hierarchy(config)?;
        engine.assign_class_ids()?;
        engine.map_classes(config)?;
        engine.create_tables()?;
        engine.create_views()?;

        for index in 0..engine.classes.len() {
            engine.prepare_class(index)?;
        }

        tracing::debug!(
            classes = engine.classes.len(),
            tables = engine.tables.len(),
            "store opened"
        );

        Ok(engine)
    }

    /// Adds registered classes and their unregistered ancestors, parents
    /// first, then links superclasses and subclasses.
    fn register_hierarchy(&mut self, config: &Config) -> Result<()> {
        for (ty, _) in config.classes.values() {
            let mut chain: Vec<_> = ty.ancestry().collect();
            chain.reverse();

            for ancestor in chain {
                if self.classes.contains_key(ancestor.name) {
                    continue;
                }

                let mapping = config.mapping_of(ancestor.name).unwrap_or_default();
                if !config.classes.contains_key(ancestor.name) {
                    tracing::debug!(class = ancestor.name, "registering superclass implicitly");
                }

                self.classes
                    .insert(ancestor.name, ClassDescriptor::new(ancestor, mapping));
            }
        }

        for index in 0..self.classes.len() {
            let Some(parent) = self.classes[index].ty.parent else {
                continue;
            };

            let parent = self
                .classes
                .get_index_of(parent.name)
                .ok_or_else(|| Error::unknown_class(parent.name))?;
            self.classes[index].parent = Some(parent);
            self.classes[parent].subclasses.push(index);
        }

        for class in self.classes.values() {
            for def in class.ty.members {
                let Some(target) = def.class_name() else {
                    continue;
                };

                if !self.classes.contains_key(target) {
                    return Err(Error::invalid_schema(format!(
                        "member `{}.{}` refers to class `{target}`, which is not registered",
                        class.name(),
                        def.name
                    )));
                }
            }
        }

        Ok(())
    }

    pub(crate) fn class_index(&self, name: &str) -> Result<usize> {
        self.classes
            .get_index_of(name)
            .ok_or_else(|| Error::unknown_class(name))
    }

    pub(crate) fn class_of_type(&self, ty: &TypeInfo) -> Result<usize> {
        self.class_index(ty.name)
    }

    pub(crate) fn class_of(&self, object: &ObjectRef) -> Result<usize> {
        let ty = object.borrow().type_info();
        self.class_index(ty.name)
    }

    /// `class` followed by all of its subclasses, depth first.
    pub(crate) fn hierarchy(&self, class: usize) -> Vec<usize> {
        let mut ret = vec![];
        let mut stack = vec![class];

        while let Some(index) = stack.pop() {
            ret.push(index);
            stack.extend(self.classes[index].subclasses.iter().rev());
        }

        ret
    }

    /// The descriptor within `class`'s hierarchy whose class id is `cid`.
    pub(crate) fn find_sub_class(&self, class: usize, cid: ClassId) -> Option<usize> {
        self.hierarchy(class)
            .into_iter()
            .find(|&index| self.classes[index].cid == cid)
    }

    pub(crate) fn cached_objects(&self, class: usize) -> usize {
        self.classes[class].cache.len()
    }

    pub(crate) fn release_unreferenced(&mut self) -> usize {
        self.classes
            .values_mut()
            .map(|class| class.cache.release_unreferenced())
            .sum()
    }

    pub(crate) fn begin_transaction(&mut self) -> Result<()> {
        if self.transaction.begin() {
            tracing::trace!("begin transaction");
            self.connection.begin_transaction()?;
        }
        Ok(())
    }

    pub(crate) fn commit_transaction(&mut self) -> Result<()> {
        if self.transaction.commit()? {
            tracing::trace!("commit transaction");
            self.connection.commit_transaction()?;
        }
        Ok(())
    }

    pub(crate) fn transaction_depth(&self) -> u32 {
        self.transaction.depth()
    }
}
