//! dnsf infrastructure: hickory-backed zone parsing and request handling
pub mod dns;
pub mod zone;
