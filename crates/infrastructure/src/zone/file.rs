use dnsf_domain::ZoneError;
use std::path::Path;
use tracing::info;

pub fn read_zone_file(path: impl AsRef<Path>) -> Result<Vec<u8>, ZoneError> {
    let path = path.as_ref();
    info!(path = %path.display(), "Reading zone file");
    std::fs::read(path)
        .map_err(|e| ZoneError::FileRead(path.display().to_string(), e.to_string()))
}
