use hickory_proto::rr::{Name, Record, RecordType};
use std::sync::Arc;

use super::TypeIndex;

/// Answer to one question against one owner name.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    /// Records of the requested type, possibly none
    pub answers: &'a [Record],
    /// Always exactly the zone SOA
    pub authority: &'a [Record],
    pub authoritative: bool,
}

/// Immutable association of an owner name with its records and the zone SOA.
#[derive(Debug)]
pub struct ResolverBinding {
    owner: Name,
    index: TypeIndex,
    soa: Arc<Record>,
}

impl ResolverBinding {
    pub fn new(owner: Name, index: TypeIndex, soa: Arc<Record>) -> Self {
        Self { owner, index, soa }
    }

    pub fn owner(&self) -> &Name {
        &self.owner
    }

    pub fn index(&self) -> &TypeIndex {
        &self.index
    }

    pub fn soa(&self) -> &Record {
        &self.soa
    }

    /// No recursion and no NXDOMAIN: a type this owner does not hold yields
    /// an authoritative answer with no records and the SOA as authority.
    pub fn resolve(&self, record_type: RecordType) -> Resolution<'_> {
        Resolution {
            answers: self.index.lookup(record_type),
            authority: std::slice::from_ref(self.soa.as_ref()),
            authoritative: true,
        }
    }
}
