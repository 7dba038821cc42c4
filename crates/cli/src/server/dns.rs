use dnsf_infrastructure::dns::DnsServerHandler;
use hickory_server::ServerFuture;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::{error, info};

/// Binds UDP and TCP on the same address and registers both with one server.
///
/// Bind failures are returned to the caller; nothing is served unless both
/// listeners are up.
pub fn start_dns_server(
    socket_addr: SocketAddr,
    handler: DnsServerHandler,
    tcp_timeout: Duration,
) -> anyhow::Result<ServerFuture<DnsServerHandler>> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let mut server = ServerFuture::new(handler);

    info!(bind_address = %socket_addr.ip(), port = socket_addr.port(), "Starting DNS server (UDP)");
    let udp_socket = create_udp_socket(domain, socket_addr).inspect_err(|e| {
        error!(bind_address = %socket_addr, error = %e, "Failed to set UDP listener");
    })?;
    server.register_socket(udp_socket);

    info!(bind_address = %socket_addr.ip(), port = socket_addr.port(), "Starting DNS server (TCP)");
    let tcp_listener = create_tcp_listener(domain, socket_addr).inspect_err(|e| {
        error!(bind_address = %socket_addr, error = %e, "Failed to set TCP listener");
    })?;
    server.register_listener(tcp_listener, tcp_timeout);

    Ok(server)
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
