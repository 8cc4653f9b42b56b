/// Physical naming rules for tables, views and columns.
#[derive(Debug, Default, Clone)]
pub struct Names {
    /// Prepended to every table and view name
    pub table_name_prefix: String,
}

impl Names {
    /// Identity column present in every class table
    pub const OID: &'static str = "oid";

    /// Class discriminator column present in every class table
    pub const CID: &'static str = "cid";

    /// Registry mapping class names to class ids
    pub const CLASSES_TABLE: &'static str = "_classes";

    pub fn new(table_name_prefix: impl Into<String>) -> Self {
        Self {
            table_name_prefix: table_name_prefix.into(),
        }
    }

    pub fn class_table(&self, class_name: &str) -> String {
        format!("{}{class_name}", self.table_name_prefix)
    }

    pub fn view(&self, class_name: &str) -> String {
        format!("{}{class_name}_v", self.table_name_prefix)
    }

    pub fn member_column(member: &str) -> String {
        format!("_{member}")
    }

    /// Column holding the class id of a referenced object
    pub fn class_id_column(member: &str) -> String {
        format!("{}{}", Self::CID, Self::member_column(member))
    }

    pub fn association_table(&self, class_name: &str, member: &str) -> String {
        format!(
            "{}_{class_name}{}",
            self.table_name_prefix,
            Self::member_column(member)
        )
    }

    pub fn index(table: &str, column: &str) -> String {
        format!("idx_{table}{column}")
    }
}
