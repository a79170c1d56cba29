use std::net::SocketAddr;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

use sinkhole_dns_application::engine;
use sinkhole_dns_application::MessageBuf;
use sinkhole_dns_domain::protocol::{HEADER_SIZE, MESSAGE_CAPACITY, UDP_MAX_SIZE};
use sinkhole_dns_domain::SinkholeTarget;

/// UDP front end: receives each datagram into its own buffer, runs the
/// message engine over it in place, and sends back exactly the bytes the
/// engine reports.
pub struct UdpResponder {
    socket: UdpSocket,
    target: SinkholeTarget,
    max_packets: Option<u64>,
}

impl UdpResponder {
    /// Binds the responder socket. Must be called from within a tokio
    /// runtime.
    pub fn bind(
        bind_addr: SocketAddr,
        target: SinkholeTarget,
        max_packets: Option<u64>,
    ) -> anyhow::Result<Self> {
        let socket = create_udp_socket(bind_addr)?;
        let socket = UdpSocket::from_std(socket)?;

        Ok(Self {
            socket,
            target,
            max_packets,
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Receive/transform/send loop. Returns once the packet budget is
    /// exhausted; runs until cancelled when none is set.
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut handled: u64 = 0;

        loop {
            if let Some(max) = self.max_packets {
                if handled >= max {
                    info!(packets = handled, "Packet budget exhausted, stopping");
                    return Ok(());
                }
            }

            // Fresh buffer per datagram. Receives are capped at the UDP
            // message ceiling, which leaves room in the buffer for every
            // answer the engine can synthesize.
            let mut message: MessageBuf = [0u8; MESSAGE_CAPACITY];
            let (received_len, peer) =
                match self.socket.recv_from(&mut message[..UDP_MAX_SIZE]).await {
                    Ok(received) => received,
                    Err(e) => {
                        warn!(error = %e, "UDP recv error");
                        continue;
                    }
                };

            // The engine assumes the fixed header is present.
            if received_len < HEADER_SIZE {
                warn!(peer = %peer, received_len, "Datagram shorter than a DNS header, dropping");
                continue;
            }
            handled += 1;

            match engine::transform(&mut message, received_len, &self.target) {
                Some(response_len) => {
                    debug!(peer = %peer, received_len, response_len, "Sending response");
                    if let Err(e) = self.socket.send_to(&message[..response_len], peer).await {
                        warn!(peer = %peer, error = %e, "Failed to send response");
                    }
                }
                None => {
                    debug!(peer = %peer, "Dropping response-flagged message");
                }
            }
        }
    }
}

fn create_udp_socket(bind_addr: SocketAddr) -> anyhow::Result<std::net::UdpSocket> {
    let domain = if bind_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&bind_addr.into())?;
    socket.set_nonblocking(true)?;
    Ok(socket.into())
}
