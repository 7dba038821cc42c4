mod zone_parser;

pub use zone_parser::ZoneParser;
