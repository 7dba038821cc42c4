use hickory_proto::rr::{Record, RecordType};
use rustc_hash::FxHashMap;

/// Per-owner lookup table from record type to the records of that type.
#[derive(Debug, Clone, Default)]
pub struct TypeIndex {
    by_type: FxHashMap<RecordType, Vec<Record>>,
}

impl TypeIndex {
    pub fn build(records: Vec<Record>) -> Self {
        let mut by_type: FxHashMap<RecordType, Vec<Record>> = FxHashMap::default();
        for rr in records {
            by_type.entry(rr.record_type()).or_default().push(rr);
        }
        Self { by_type }
    }

    /// Records of `record_type` in load order; empty when there are none.
    pub fn lookup(&self, record_type: RecordType) -> &[Record] {
        self.by_type
            .get(&record_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn record_types(&self) -> impl Iterator<Item = RecordType> + '_ {
        self.by_type.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}
