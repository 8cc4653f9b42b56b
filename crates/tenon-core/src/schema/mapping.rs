/// Rule for distributing a class's members across tables relative to its
/// ancestors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TableMapping {
    /// Use the superclass's policy; root classes use [`TableMapping::Flat`]
    #[default]
    Default,

    /// One table per class holding inherited and own members, no joins
    Flat,

    /// Own members in a dedicated table, joined to the base tables by id
    Linked,

    /// Own members folded into the nearest base table
    Embedded,
}

bitflags::bitflags! {
    /// Per-member storage options.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MemberFlags: u32 {
        /// Create an index on the member's column.
        const INDEXED = 0b0000_0001;
    }
}
