//! Listener configuration, read from environment variables with fallbacks.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the game sends to unless told otherwise.
pub const DEFAULT_PORT: u16 = 20777;
/// Receive buffer size; larger than any F1 23 datagram (1460 bytes).
pub const DEFAULT_MAX_DATAGRAM_BYTES: usize = 2048;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;

pub const ENV_HOST: &str = "F1_TELEMETRY_UDP_HOST";
pub const ENV_PORT: &str = "F1_TELEMETRY_UDP_PORT";
pub const ENV_MAX_DATAGRAM: &str = "F1_TELEMETRY_MAX_DATAGRAM";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    pub bind_addr: SocketAddr,
    /// Datagrams longer than this are truncated by the socket and then
    /// rejected by the decoder as a size mismatch.
    pub max_datagram_bytes: usize,
    /// Bound of the channel returned by
    /// [`TelemetryListener::spawn`](crate::TelemetryListener::spawn).
    pub channel_capacity: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            max_datagram_bytes: DEFAULT_MAX_DATAGRAM_BYTES,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl ListenerConfig {
    /// Read `F1_TELEMETRY_UDP_HOST`, `F1_TELEMETRY_UDP_PORT` and
    /// `F1_TELEMETRY_MAX_DATAGRAM`. Missing or unparsable values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = lookup(ENV_HOST)
            .and_then(|v| v.trim().parse::<IpAddr>().ok())
            .unwrap_or(defaults.bind_addr.ip());
        let port = parse_nonzero(lookup(ENV_PORT)).unwrap_or(DEFAULT_PORT);
        let max_datagram_bytes =
            parse_nonzero(lookup(ENV_MAX_DATAGRAM)).unwrap_or(DEFAULT_MAX_DATAGRAM_BYTES);
        Self {
            bind_addr: SocketAddr::new(host, port),
            max_datagram_bytes,
            ..defaults
        }
    }

    /// Override the bind address (tests bind `127.0.0.1:0`).
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }
}

fn parse_nonzero<T>(raw: Option<String>) -> Option<T>
where
    T: std::str::FromStr + Default + PartialEq,
{
    raw.and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v != T::default())
}
