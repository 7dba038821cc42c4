use dnsf_domain::ZoneError;
use hickory_proto::rr::{DNSClass, Record, RecordType};
use tracing::debug;

/// Every record produced by one zone file load, in parser order.
#[derive(Debug, Clone, Default)]
pub struct ZoneRecords {
    records: Vec<Record>,
}

impl ZoneRecords {
    pub fn new(records: Vec<Record>) -> Self {
        for rr in &records {
            debug!(rr = %rr, "Loaded DNS record");
        }
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First SOA record in load order.
    ///
    /// It is treated as authoritative for every owner name of the load, even
    /// when the file carries more than one.
    pub fn soa(&self) -> Result<&Record, ZoneError> {
        self.records
            .iter()
            .find(|rr| rr.record_type() == RecordType::SOA)
            .ok_or(ZoneError::MissingAuthorityRecord)
    }

    pub fn ensure_internet_class(&self) -> Result<(), ZoneError> {
        match self.records.iter().find(|rr| rr.dns_class() != DNSClass::IN) {
            Some(rr) => Err(ZoneError::UnsupportedClass {
                name: rr.name().to_string(),
                class: rr.dns_class().to_string(),
            }),
            None => Ok(()),
        }
    }

}

impl From<Vec<Record>> for ZoneRecords {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
