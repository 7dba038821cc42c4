use hickory_proto::rr::rdata::{A, AAAA, NS, SOA};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

pub const ORIGIN: &str = "matt.local.";
pub const WORKERS: &str = "workers.matt.local.";

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn soa_record(owner: &str, serial: u32) -> Record {
    let soa = SOA::new(
        name(&format!("ns.{}", owner)),
        name(&format!("username.{}", owner)),
        serial,
        7200,
        3600,
        1_209_600,
        3600,
    );
    Record::from_rdata(name(owner), 3600, RData::SOA(soa))
}

pub fn a_record(owner: &str, ip: &str) -> Record {
    let ip = Ipv4Addr::from_str(ip).unwrap();
    Record::from_rdata(name(owner), 3600, RData::A(A(ip)))
}

pub fn aaaa_record(owner: &str, ip: &str) -> Record {
    let ip = Ipv6Addr::from_str(ip).unwrap();
    Record::from_rdata(name(owner), 3600, RData::AAAA(AAAA(ip)))
}

pub fn ns_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 3600, RData::NS(NS(name(target))))
}

pub fn chaos_record(owner: &str, ip: &str) -> Record {
    let mut record = a_record(owner, ip);
    record.set_dns_class(DNSClass::CH);
    record
}

/// The example zone: SOA, NS and A at the apex, two A records at `workers`.
pub fn matt_local_zone() -> Vec<Record> {
    vec![
        soa_record(ORIGIN, 2020091025),
        ns_record(ORIGIN, "ns.matt.local."),
        a_record(ORIGIN, "127.0.0.1"),
        a_record("ns.matt.local.", "127.0.0.1"),
        a_record(WORKERS, "12.0.0.2"),
        a_record(WORKERS, "12.0.0.3"),
    ]
}
