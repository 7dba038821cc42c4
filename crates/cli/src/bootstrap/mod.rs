mod config;
mod logging;
mod zone;

pub use config::load_config;
pub use logging::init_logging;
pub use zone::load_zone;
