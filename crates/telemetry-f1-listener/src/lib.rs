//! UDP listener for F1 23 telemetry.
//!
//! Binds a tokio [`UdpSocket`], decodes each datagram with
//! [`f1_telemetry::decode`] and hands the resulting [`Packet`]s to the caller,
//! either one at a time via [`TelemetryListener::recv`] or as a stream over an
//! mpsc channel via [`TelemetryListener::spawn`].
//!
//! ```rust,no_run
//! use f1_telemetry_listener::{ListenerConfig, TelemetryListener};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let listener = TelemetryListener::bind(ListenerConfig::from_env()).await?;
//! let mut packets = listener.spawn();
//! while let Some(packet) = packets.recv().await {
//!     println!("{} frame {}", packet.packet_id(), packet.header().frame_identifier);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(static_mut_refs)]

pub mod config;

use std::net::SocketAddr;

use anyhow::Context;
use f1_telemetry::{DecodeError, Packet, decode};
use thiserror::Error;
use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub use config::ListenerConfig;

/// Failure to receive one packet.
#[derive(Debug, Error)]
pub enum ListenError {
    #[error("UDP receive failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("datagram rejected: {0}")]
    Decode(#[from] DecodeError),
}

/// A bound socket plus its receive buffer.
#[derive(Debug)]
pub struct TelemetryListener {
    socket: UdpSocket,
    buf: Vec<u8>,
    channel_capacity: usize,
}

impl TelemetryListener {
    /// Bind the socket described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub async fn bind(config: ListenerConfig) -> anyhow::Result<Self> {
        let socket = UdpSocket::bind(config.bind_addr)
            .await
            .with_context(|| format!("failed to bind F1 telemetry socket on {}", config.bind_addr))?;
        let local = socket.local_addr().ok();
        info!(
            addr = %config.bind_addr,
            local = ?local,
            "F1 telemetry UDP listener bound"
        );
        Ok(Self {
            socket,
            buf: vec![0u8; config.max_datagram_bytes.max(1)],
            channel_capacity: config.channel_capacity.max(1),
        })
    }

    /// Address actually bound, useful after binding port 0.
    ///
    /// # Errors
    ///
    /// Propagates the socket's `local_addr` failure.
    pub fn local_addr(&self) -> Result<SocketAddr, ListenError> {
        Ok(self.socket.local_addr()?)
    }

    /// Wait for the next datagram and decode it.
    ///
    /// # Errors
    ///
    /// [`ListenError::Io`] if the socket read fails, [`ListenError::Decode`]
    /// if the datagram is not a valid F1 23 packet. Neither is fatal; the
    /// listener can keep receiving.
    pub async fn recv(&mut self) -> Result<Packet, ListenError> {
        let len = self.socket.recv(&mut self.buf).await?;
        let datagram = self.buf.get(..len).unwrap_or_default();
        Ok(decode(datagram)?)
    }

    /// Move the listener onto a tokio task and stream decoded packets.
    ///
    /// Undecodable datagrams and receive errors are logged and skipped. The
    /// task stops once the returned receiver is dropped. Must be called from
    /// within a tokio runtime.
    pub fn spawn(mut self) -> mpsc::Receiver<Packet> {
        let (tx, rx) = mpsc::channel(self.channel_capacity);
        tokio::spawn(async move {
            loop {
                let result = tokio::select! {
                    () = tx.closed() => break,
                    result = self.recv() => result,
                };
                match result {
                    Ok(packet) => {
                        if tx.send(packet).await.is_err() {
                            break;
                        }
                    }
                    Err(ListenError::Decode(err)) => {
                        warn!(error = %err, "F1 datagram decode failed");
                    }
                    Err(ListenError::Io(err)) => {
                        warn!(error = %err, "F1 UDP receive error");
                    }
                }
            }
            debug!("F1 telemetry receiver dropped; listener task exiting");
        });
        rx
    }
}
