use std::net::SocketAddr;

use anyhow::Context;
use sinkhole_dns_domain::Config;
use sinkhole_dns_infrastructure::UdpResponder;
use tracing::info;

pub async fn start_dns_server(config: &Config) -> anyhow::Result<()> {
    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.port)
            .parse()
            .context("Invalid bind address")?;

    let target = config.sinkhole_target()?;

    let responder = UdpResponder::bind(bind_addr, target, config.server.max_packets)?;
    info!(
        bind_address = %responder.local_addr()?,
        response_address = %target.address,
        ttl = target.ttl,
        "Sinkhole DNS ready"
    );

    responder.run().await
}
