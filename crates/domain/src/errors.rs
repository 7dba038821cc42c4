use thiserror::Error;

/// Fatal conditions raised while loading a zone file.
///
/// None of these are retried: any of them aborts startup before a listener
/// is opened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    #[error("Failed to read zone file {0}: {1}")]
    FileRead(String, String),

    #[error("Zone file is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("Parsing zone file failed: {0}")]
    Parse(String),

    #[error("No SOA record found in zone file")]
    MissingAuthorityRecord,

    #[error("Unsupported record class {class} for {name}, only IN is served")]
    UnsupportedClass { name: String, class: String },
}
