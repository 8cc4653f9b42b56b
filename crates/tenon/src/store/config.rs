use indexmap::IndexMap;
use std::collections::HashMap;
use tenon_core::{schema::Names, Error, MemberFlags, Result, TableMapping, TypeInfo};

/// Everything a store needs before it can open its connection.
#[derive(Debug, Default, Clone)]
pub(crate) struct Config {
    /// Explicitly registered classes with their requested policy
    pub(crate) classes: IndexMap<&'static str, (&'static TypeInfo, TableMapping)>,

    /// Flags keyed by declaring class and member name
    member_flags: HashMap<(&'static str, &'static str), MemberFlags>,

    pub(crate) names: Names,

    /// Connection URL, used when no driver was supplied
    pub(crate) location: Option<String>,
}

impl Config {
    pub(crate) fn register(&mut self, ty: &'static TypeInfo, mapping: TableMapping) -> Result<()> {
        if let Some((existing, _)) = self.classes.get(ty.name) {
            if !std::ptr::eq(*existing, ty) {
                return Err(Error::invalid_schema(format!(
                    "a different class named `{}` is already registered",
                    ty.name
                )));
            }
        }

        self.classes.insert(ty.name, (ty, mapping));
        Ok(())
    }

    pub(crate) fn mapping_of(&self, class_name: &str) -> Option<TableMapping> {
        self.classes.get(class_name).map(|(_, mapping)| *mapping)
    }

    /// Sets flags on `member`, declared by `ty` or one of its ancestors.
    pub(crate) fn set_member_flags(
        &mut self,
        ty: &'static TypeInfo,
        member: &str,
        flags: MemberFlags,
    ) -> Result<()> {
        let declared = ty.ancestry().find_map(|class| {
            class
                .members
                .iter()
                .find(|def| def.name == member)
                .map(|def| (class.name, def.name))
        });

        let Some(key) = declared else {
            return Err(Error::invalid_schema(format!(
                "class `{}` has no member `{member}`",
                ty.name
            )));
        };

        self.member_flags.insert(key, flags);
        Ok(())
    }

    pub(crate) fn member_flags(&self, class_name: &'static str, member: &'static str) -> MemberFlags {
        self.member_flags
            .get(&(class_name, member))
            .copied()
            .unwrap_or_default()
    }
}
