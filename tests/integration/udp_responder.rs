//! Drives a bound responder over a real UDP socket on an ephemeral port.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use sinkhole_dns_domain::SinkholeTarget;
use sinkhole_dns_infrastructure::UdpResponder;
use tokio::net::UdpSocket;
use tokio::time::timeout;

// ID=0x1032, RD set, one question: "google.com" A IN.
const GOOGLE_A_QUERY: [u8; 28] = [
    0x10, 0x32, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, b'g', b'o',
    b'o', b'g', b'l', b'e', 0x03, b'c', b'o', b'm', 0x00, 0x00, 0x01, 0x00, 0x01,
];

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

async fn spawn_responder(target: SinkholeTarget, max_packets: Option<u64>) -> SocketAddr {
    let responder =
        UdpResponder::bind("127.0.0.1:0".parse().unwrap(), target, max_packets).unwrap();
    let addr = responder.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = responder.run().await;
    });
    addr
}

async fn client() -> UdpSocket {
    UdpSocket::bind("127.0.0.1:0").await.unwrap()
}

async fn recv(socket: &UdpSocket) -> Vec<u8> {
    let mut response = [0u8; 512];
    let (len, _) = timeout(RECV_TIMEOUT, socket.recv_from(&mut response))
        .await
        .expect("timed out waiting for a response")
        .unwrap();
    response[..len].to_vec()
}

#[tokio::test]
async fn test_a_query_gets_sinkhole_answer() {
    let addr = spawn_responder(SinkholeTarget::new(Ipv4Addr::new(6, 6, 6, 6), 3600), None).await;
    let client = client().await;

    client.send_to(&GOOGLE_A_QUERY, addr).await.unwrap();
    let response = recv(&client).await;

    assert_eq!(response.len(), 44);
    assert_eq!(&response[..2], &[0x10, 0x32], "ID echoed");
    assert_ne!(response[2] & 0x80, 0, "QR set");
    assert_eq!(response[3] & 0x0F, 0, "NOERROR");
    assert_eq!(u16::from_be_bytes([response[6], response[7]]), 1, "ANCOUNT");
    assert_eq!(&response[12..28], &GOOGLE_A_QUERY[12..], "question echoed");
    assert_eq!(&response[28..30], &[0xC0, 0x0C]);
    assert_eq!(&response[40..44], &[6, 6, 6, 6]);
}

#[tokio::test]
async fn test_txt_query_gets_notimp() {
    let addr = spawn_responder(SinkholeTarget::new(Ipv4Addr::new(6, 6, 6, 6), 3600), None).await;
    let client = client().await;

    let mut query = GOOGLE_A_QUERY;
    query[25] = 0x10; // QTYPE=TXT
    client.send_to(&query, addr).await.unwrap();
    let response = recv(&client).await;

    assert_eq!(response.len(), 28);
    assert_eq!(response[3] & 0x0F, 4, "NOTIMP");
    assert_eq!(u16::from_be_bytes([response[6], response[7]]), 0, "no answers");
}

#[tokio::test]
async fn test_response_datagram_is_ignored() {
    let addr = spawn_responder(SinkholeTarget::new(Ipv4Addr::new(6, 6, 6, 6), 3600), None).await;
    let client = client().await;

    let mut response_message = GOOGLE_A_QUERY;
    response_message[0] = 0xAB; // distinct ID
    response_message[2] |= 0x80; // QR=1
    client.send_to(&response_message, addr).await.unwrap();
    client.send_to(&GOOGLE_A_QUERY, addr).await.unwrap();

    // The only reply is for the genuine query; the QR=1 datagram got none.
    let response = recv(&client).await;
    assert_eq!(&response[..2], &[0x10, 0x32]);
}

#[tokio::test]
async fn test_short_datagram_is_ignored() {
    let addr = spawn_responder(SinkholeTarget::new(Ipv4Addr::new(6, 6, 6, 6), 3600), None).await;
    let client = client().await;

    client.send_to(&[0x10, 0x32, 0x01], addr).await.unwrap();
    client.send_to(&GOOGLE_A_QUERY, addr).await.unwrap();

    let response = recv(&client).await;
    assert_eq!(&response[..2], &[0x10, 0x32]);
    assert_eq!(response.len(), 44);
}

#[tokio::test]
async fn test_configured_address_and_ttl_reach_the_wire() {
    let addr = spawn_responder(SinkholeTarget::new(Ipv4Addr::new(10, 66, 0, 9), 60), None).await;
    let client = client().await;

    client.send_to(&GOOGLE_A_QUERY, addr).await.unwrap();
    let response = recv(&client).await;

    assert_eq!(&response[34..38], &60u32.to_be_bytes());
    assert_eq!(&response[40..44], &[10, 66, 0, 9]);
}

#[tokio::test]
async fn test_packet_budget_stops_the_responder() {
    let addr =
        spawn_responder(SinkholeTarget::new(Ipv4Addr::new(6, 6, 6, 6), 3600), Some(1)).await;
    let client = client().await;

    client.send_to(&GOOGLE_A_QUERY, addr).await.unwrap();
    let response = recv(&client).await;
    assert_eq!(response.len(), 44);

    // Budget spent: the loop has exited and the socket is gone, so a second
    // query gets no reply.
    client.send_to(&GOOGLE_A_QUERY, addr).await.unwrap();
    let mut ignored = [0u8; 512];
    let outcome = timeout(Duration::from_millis(500), client.recv_from(&mut ignored)).await;
    assert!(outcome.is_err(), "no response expected after the budget");
}
