use crate::ports::ZoneParser;
use crate::use_cases::dns::ZoneDispatcher;
use dnsf_domain::ZoneError;
use std::sync::Arc;
use tracing::{debug, info};

use super::{ResolverBinding, TypeIndex, ZonePartition, ZoneRecords};

/// Builds the request dispatcher from raw zone file contents.
///
/// Runs once at startup; the resulting bindings are never rebuilt.
pub struct LoadZoneUseCase {
    parser: Arc<dyn ZoneParser>,
}

impl LoadZoneUseCase {
    pub fn new(parser: Arc<dyn ZoneParser>) -> Self {
        Self { parser }
    }

    pub fn execute(&self, zone_data: &[u8]) -> Result<ZoneDispatcher, ZoneError> {
        let records = ZoneRecords::new(self.parser.parse(zone_data)?);
        records.ensure_internet_class()?;

        let soa = Arc::new(records.soa()?.clone());
        let partition = ZonePartition::from_records(&records);

        let mut dispatcher = ZoneDispatcher::new();
        for (owner, group) in partition.into_groups() {
            debug!(zone_id = %owner, records = ?group, "Zone");
            let binding = ResolverBinding::new(owner, TypeIndex::build(group), soa.clone());
            dispatcher.register(binding);
        }

        info!(
            soa = %soa.name(),
            records = records.len(),
            zones = dispatcher.len(),
            "Zone file loaded"
        );

        Ok(dispatcher)
    }
}
