#![allow(dead_code)]
mod test_server;

pub use test_server::TestDnsServer;
pub use wire::{build_query, build_query_without_question, tcp_exchange, udp_exchange};
