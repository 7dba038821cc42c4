use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Path of the RFC 1035 records file to serve
    #[serde(default)]
    pub records_file: Option<String>,

    /// Origin used for relative names when the file carries no `$ORIGIN`
    #[serde(default)]
    pub origin: Option<String>,
}
