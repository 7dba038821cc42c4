mod file;
mod lexer;
mod parser;

pub use file::read_zone_file;
pub use parser::MasterFileParser;
