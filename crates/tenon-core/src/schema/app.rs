mod member;
pub use member::{MemberDef, MemberTy, StorageKind};

mod type_info;
pub use type_info::TypeInfo;
