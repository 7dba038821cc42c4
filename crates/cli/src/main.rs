use clap::{Args, Parser, Subcommand};
use dnsf_domain::CliOverrides;
use dnsf_infrastructure::dns::DnsServerHandler;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::info;

mod bootstrap;
mod server;

const RUN_LONG_ABOUT: &str = "\
Loads the DNS records file and starts the DNS server.

The records file is line based and follows RFC 1035,
please refer to it for the format of each record.

Example of a zone file:

    $ORIGIN matt.local.     ; designates the start of this zone file in the namespace
    $TTL 3600                ; default expiration time (in seconds) of all RRs without their own TTL value
    matt.local.  IN  SOA   ns.matt.local. username.matt.local. ( 2020091025 7200 3600 1209600 3600 )
    matt.local.  IN  NS    ns
    matt.local.  IN  A     127.0.0.1
    ns            IN  A     127.0.0.1
    workers            IN  A     12.0.0.2
    workers            IN  A     12.0.0.3

Every distinct owner name found in the records file is served by its own
zone handler, all of them sharing the first SOA record of the file.

You can test the server with the following commands:

    dig -p 8053 @127.0.0.1 matt.local A
    dig -p 8053 @127.0.0.1 workers.matt.local A";

#[derive(Parser)]
#[command(name = "dnsf")]
#[command(version)]
#[command(about = "Runs a DNS server that answers queries from the loaded zone file.")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Loads the DNS records file and starts the DNS server
    #[command(long_about = RUN_LONG_ABOUT)]
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// RFC 1035 zone file to serve
    records_file: String,

    /// UDP and TCP port to listen on [default: 8053]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Origin for relative names when the file has no $ORIGIN
    #[arg(long)]
    origin: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let Command::Run(run) = &self.command;
        CliOverrides {
            dns_port: run.port,
            bind_address: run.bind.clone(),
            records_file: Some(run.records_file.clone()),
            origin: run.origin.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting dnsf v{}", env!("CARGO_PKG_VERSION"));

    // The zone must be fully indexed before any socket is opened
    let dispatcher = bootstrap::load_zone(&config)?;
    let handler = DnsServerHandler::new(dispatcher);

    let bind_ip: IpAddr = config.server.bind_address.parse()?;
    let dns_addr = SocketAddr::new(bind_ip, config.server.dns_port);
    let tcp_timeout = Duration::from_secs(config.server.tcp_timeout_secs);

    let mut dns_server = server::start_dns_server(dns_addr, handler, tcp_timeout)?;

    info!("Waiting for termination signal");
    let stopped_early = tokio::select! {
        result = dns_server.block_until_done() => {
            result?;
            true
        }
        _ = server::shutdown_signal() => false,
    };

    if stopped_early {
        info!("DNS server stopped");
        return Ok(());
    }

    info!("Terminating");
    dns_server.shutdown_gracefully().await?;

    info!("Server shutdown complete");
    Ok(())
}
