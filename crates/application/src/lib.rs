//! dnsf application layer: zone indexing and query resolution
pub mod ports;
pub mod use_cases;
