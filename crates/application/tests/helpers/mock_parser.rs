use dnsf_application::ports::ZoneParser;
use dnsf_domain::ZoneError;
use hickory_proto::rr::Record;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Parser double that ignores its input and replays a fixed outcome.
pub struct MockZoneParser {
    outcome: Result<Vec<Record>, ZoneError>,
    calls: AtomicUsize,
}

impl MockZoneParser {
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            outcome: Ok(records),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: ZoneError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ZoneParser for MockZoneParser {
    fn parse(&self, _zone_data: &[u8]) -> Result<Vec<Record>, ZoneError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
