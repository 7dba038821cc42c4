use hickory_proto::rr::{Name, Record};
use rustc_hash::FxHashMap;

use super::ZoneRecords;

/// Records grouped by owner name.
///
/// Every record lands in exactly one group, the one keyed by its own owner
/// name. Order inside a group follows load order. Keys compare the way DNS
/// names do on the wire, so no further normalization happens here.
#[derive(Debug, Clone, Default)]
pub struct ZonePartition {
    groups: FxHashMap<Name, Vec<Record>>,
}

impl ZonePartition {
    pub fn from_records(records: &ZoneRecords) -> Self {
        let mut groups: FxHashMap<Name, Vec<Record>> = FxHashMap::default();
        for rr in records.records() {
            groups.entry(rr.name().clone()).or_default().push(rr.clone());
        }
        Self { groups }
    }

    /// Records owned by `owner`, empty when the name owns nothing.
    pub fn group(&self, owner: &Name) -> &[Record] {
        self.groups.get(owner).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn owners(&self) -> impl Iterator<Item = &Name> {
        self.groups.keys()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_groups(self) -> impl Iterator<Item = (Name, Vec<Record>)> {
        self.groups.into_iter()
    }
}
