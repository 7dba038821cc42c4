#![allow(dead_code)]
mod logs;
mod mock_parser;
mod records;

pub use logs::CapturedLogs;
pub use mock_parser::MockZoneParser;
pub use records::*;
