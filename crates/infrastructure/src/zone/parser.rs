use dnsf_application::ports::ZoneParser;
use dnsf_domain::ZoneError;
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};
use hickory_proto::serialize::txt::{Parser, RDataParser};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use super::lexer::{self, Entry, Word};

const MAX_INCLUDE_DEPTH: usize = 16;

/// RFC 1035 master file parser.
///
/// Records are produced one per line in the order they are written, with
/// nothing merged or dropped. Record data is decoded by hickory's rdata
/// parsers.
#[derive(Debug, Clone, Default)]
pub struct MasterFileParser {
    origin: Option<Name>,
    path: Option<PathBuf>,
}

impl MasterFileParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Origin for relative names until the file sets one with `$ORIGIN`.
    ///
    /// Without it the root is used, so only absolute names are meaningful.
    pub fn with_origin(mut self, origin: Name) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Location of the file, used to resolve relative `$INCLUDE` paths.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl ZoneParser for MasterFileParser {
    fn parse(&self, zone_data: &[u8]) -> Result<Vec<Record>, ZoneError> {
        let text =
            std::str::from_utf8(zone_data).map_err(|e| ZoneError::InvalidEncoding(e.to_string()))?;

        let mut reader = ZoneReader::new(self.origin.clone().unwrap_or_else(Name::root));
        reader.read(text, self.path.as_deref(), 0)?;

        debug!(origin = %reader.origin, records = reader.records.len(), "Parsed zone file");
        Ok(reader.records)
    }
}

#[derive(Clone, Copy)]
struct Location<'a> {
    path: Option<&'a Path>,
    line: usize,
}

impl Location<'_> {
    fn error(self, reason: impl fmt::Display) -> ZoneError {
        match self.path {
            Some(path) => ZoneError::Parse(format!("{}:{}: {}", path.display(), self.line, reason)),
            None => ZoneError::Parse(format!("line {}: {}", self.line, reason)),
        }
    }
}

/// Parsing state carried from one entry to the next.
struct ZoneReader {
    origin: Name,
    default_ttl: Option<u32>,
    last_ttl: Option<u32>,
    last_owner: Option<Name>,
    last_class: DNSClass,
    records: Vec<Record>,
}

impl ZoneReader {
    fn new(origin: Name) -> Self {
        Self {
            origin,
            default_ttl: None,
            last_ttl: None,
            last_owner: None,
            last_class: DNSClass::IN,
            records: Vec::new(),
        }
    }

    fn read(&mut self, text: &str, path: Option<&Path>, depth: usize) -> Result<(), ZoneError> {
        let entries = lexer::entries(text).map_err(|e| {
            Location {
                path,
                line: e.line,
            }
            .error(e.reason)
        })?;

        for entry in entries {
            self.read_entry(entry, path, depth)?;
        }
        Ok(())
    }

    fn read_entry(&mut self, entry: Entry, path: Option<&Path>, depth: usize) -> Result<(), ZoneError> {
        let at = Location {
            path,
            line: entry.line,
        };
        let is_directive = entry
            .words
            .first()
            .is_some_and(|w| !w.quoted && w.text.starts_with('$'));
        let mut words = entry.words.into_iter();

        match words.next() {
            Some(word) if is_directive => {
                self.directive(&word.text.to_ascii_uppercase(), words, at, depth)
            }
            first => self.record(entry.continues_owner, first.into_iter().chain(words), at),
        }
    }

    fn directive(
        &mut self,
        directive: &str,
        mut args: impl Iterator<Item = Word>,
        at: Location<'_>,
        depth: usize,
    ) -> Result<(), ZoneError> {
        let first = args.next();
        let second = args.next();
        if args.next().is_some() {
            return Err(at.error(format!("too many arguments to {}", directive)));
        }

        match (directive, first, second) {
            ("$ORIGIN", Some(name), None) => {
                self.origin = self.name(&name.text).map_err(|e| at.error(e))?;
            }
            ("$TTL", Some(ttl), None) => {
                self.default_ttl = Some(Parser::parse_time(&ttl.text).map_err(|e| at.error(e))?);
            }
            ("$INCLUDE", Some(file), origin) => {
                let origin = origin
                    .map(|w| self.name(&w.text))
                    .transpose()
                    .map_err(|e| at.error(e))?;
                self.include(&file.text, origin, at, depth)?;
            }
            ("$ORIGIN" | "$TTL" | "$INCLUDE", _, _) => {
                return Err(at.error(format!("bad arguments to {}", directive)));
            }
            (other, _, _) => return Err(at.error(format!("unknown directive {}", other))),
        }
        Ok(())
    }

    /// The included file starts from the current origin, or the given one,
    /// and the origin is restored once it has been read.
    fn include(
        &mut self,
        file: &str,
        origin: Option<Name>,
        at: Location<'_>,
        depth: usize,
    ) -> Result<(), ZoneError> {
        if depth >= MAX_INCLUDE_DEPTH {
            return Err(at.error("too many nested $INCLUDE directives"));
        }

        let target = Path::new(file);
        let target = match (target.is_absolute(), at.path.and_then(Path::parent)) {
            (true, _) => target.to_path_buf(),
            (false, Some(dir)) => dir.join(target),
            (false, None) => return Err(at.error("relative $INCLUDE needs the zone file path")),
        };
        debug!(path = %target.display(), "Including zone file");

        let text = std::fs::read_to_string(&target)
            .map_err(|e| ZoneError::FileRead(target.display().to_string(), e.to_string()))?;

        let saved_origin = self.origin.clone();
        if let Some(origin) = origin {
            self.origin = origin;
        }
        let result = self.read(&text, Some(&target), depth + 1);
        self.origin = saved_origin;
        result
    }

    fn record(
        &mut self,
        continues_owner: bool,
        mut words: impl Iterator<Item = Word>,
        at: Location<'_>,
    ) -> Result<(), ZoneError> {
        let owner = if continues_owner {
            self.last_owner
                .clone()
                .ok_or_else(|| at.error("record without an owner name"))?
        } else {
            let word = words
                .next()
                .ok_or_else(|| at.error("record without an owner name"))?;
            self.name(&word.text).map_err(|e| at.error(e))?
        };

        // TTL and class are optional and may come in either order.
        let mut ttl = None;
        let mut class = None;
        let record_type = loop {
            let word = words.next().ok_or_else(|| at.error("missing record type"))?;
            if word.quoted {
                return Err(at.error(format!("unexpected string \"{}\"", word.text)));
            }
            if ttl.is_none() && word.text.starts_with(|c: char| c.is_ascii_digit()) {
                ttl = Some(Parser::parse_time(&word.text).map_err(|e| at.error(e))?);
                continue;
            }
            let token = word.text.to_ascii_uppercase();
            if class.is_none() {
                if let Ok(parsed) = DNSClass::from_str(&token) {
                    class = Some(parsed);
                    continue;
                }
            }
            break RecordType::from_str(&token).map_err(|e| at.error(e))?;
        };

        let parts: Vec<String> = words
            .map(|w| {
                if !w.quoted && w.text == "@" {
                    self.origin.to_string()
                } else {
                    w.text
                }
            })
            .collect();
        let rdata = <RData as RDataParser>::parse(
            record_type,
            parts.iter().map(String::as_str),
            Some(&self.origin),
        )
        .map_err(|e| at.error(e))?;

        if ttl.is_some() {
            self.last_ttl = ttl;
        }
        let ttl = match (ttl.or(self.default_ttl).or(self.last_ttl), &rdata) {
            (Some(ttl), _) => ttl,
            (None, RData::SOA(soa)) => {
                self.last_ttl = Some(soa.minimum());
                soa.minimum()
            }
            (None, _) => return Err(at.error("no TTL given and no $TTL in effect")),
        };
        let class = class.unwrap_or(self.last_class);

        let mut record = Record::from_rdata(owner.clone(), ttl, rdata);
        record.set_dns_class(class);

        self.last_owner = Some(owner);
        self.last_class = class;
        self.records.push(record);
        Ok(())
    }

    /// `@` is the current origin; relative names are completed with it.
    fn name(&self, text: &str) -> Result<Name, hickory_proto::ProtoError> {
        if text == "@" {
            return Ok(self.origin.clone());
        }
        Name::parse(text, Some(&self.origin))
    }
}
