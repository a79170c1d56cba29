use clap::Parser;
use sinkhole_dns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "sinkhole-dns")]
#[command(version)]
#[command(about = "Sinkhole DNS - answers every query with one configured A record")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// UDP port to listen on
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// IPv4 address every answer points at
    #[arg(short = 'a', long)]
    address: Option<String>,

    /// TTL of synthesized answers, in seconds
    #[arg(long)]
    ttl: Option<u32>,

    /// Stop after handling this many datagrams
    #[arg(long)]
    max_packets: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        address: cli.address.clone(),
        ttl: cli.ttl,
        max_packets: cli.max_packets,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Sinkhole DNS v{}", env!("CARGO_PKG_VERSION"));

    server::start_dns_server(&config).await
}
