use dnsf_application::use_cases::LoadZoneUseCase;
use dnsf_infrastructure::dns::DnsServerHandler;
use dnsf_infrastructure::zone::MasterFileParser;
use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// A real hickory server on ephemeral loopback ports, serving one zone.
pub struct TestDnsServer {
    udp_addr: SocketAddr,
    tcp_addr: SocketAddr,
    handler: DnsServerHandler,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestDnsServer {
    pub async fn start(zone: &str) -> Self {
        let parser = Arc::new(MasterFileParser::new());
        let dispatcher = LoadZoneUseCase::new(parser)
            .execute(zone.as_bytes())
            .expect("zone should load");
        let handler = DnsServerHandler::new(Arc::new(dispatcher));

        let udp_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let tcp_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let udp_addr = udp_socket.local_addr().unwrap();
        let tcp_addr = tcp_listener.local_addr().unwrap();

        let mut server = ServerFuture::new(handler.clone());
        server.register_socket(udp_socket);
        server.register_listener(tcp_listener, Duration::from_secs(5));

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            tokio::select! {
                _ = server.block_until_done() => {}
                _ = shutdown_rx => {
                    let _ = server.shutdown_gracefully().await;
                }
            }
        });

        Self {
            udp_addr,
            tcp_addr,
            handler,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn udp_addr(&self) -> SocketAddr {
        self.udp_addr
    }

    pub fn tcp_addr(&self) -> SocketAddr {
        self.tcp_addr
    }

    pub fn requests_seen(&self) -> u64 {
        self.handler.dispatcher().requests_seen()
    }
}

impl Drop for TestDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
