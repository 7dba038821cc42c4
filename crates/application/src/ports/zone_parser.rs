use dnsf_domain::ZoneError;
use hickory_proto::rr::Record;

/// Turns raw zone file contents into typed resource records.
///
/// Implementations must keep the order in which they produce records; the
/// first SOA in that order becomes the authority record of the whole load.
pub trait ZoneParser: Send + Sync {
    fn parse(&self, zone_data: &[u8]) -> Result<Vec<Record>, ZoneError>;
}
