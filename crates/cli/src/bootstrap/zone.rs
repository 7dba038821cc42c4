use anyhow::Context;
use dnsf_application::use_cases::{LoadZoneUseCase, ZoneDispatcher};
use dnsf_domain::Config;
use dnsf_infrastructure::zone::{read_zone_file, MasterFileParser};
use hickory_proto::rr::Name;
use std::str::FromStr;
use std::sync::Arc;
use tracing::error;

pub fn load_zone(config: &Config) -> anyhow::Result<Arc<ZoneDispatcher>> {
    let path = config.records_file();
    let zone_data = read_zone_file(path).inspect_err(|e| {
        error!(path, error = %e, "Unable to read the zone file");
    })?;

    let mut parser = MasterFileParser::new().with_path(path);
    if let Some(origin) = config.zone.origin.as_deref() {
        let origin =
            Name::from_str(origin).with_context(|| format!("Invalid zone origin '{}'", origin))?;
        parser = parser.with_origin(origin);
    }

    let dispatcher = LoadZoneUseCase::new(Arc::new(parser))
        .execute(&zone_data)
        .inspect_err(|e| {
            error!(path, error = %e, "Unable to load the zone file");
        })?;

    Ok(Arc::new(dispatcher))
}
