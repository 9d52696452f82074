//! Host transport errors.

#![allow(missing_docs)]

use quickdocs_panel::PanelError;
use smol_str::SmolStr;
use thiserror::Error;

/// Failures talking to the device.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// WebSocket handshake or TCP/TLS connection failure.
    #[error("connect {endpoint}: {message}")]
    Connect { endpoint: SmolStr, message: SmolStr },

    /// Unexpected frame or transport failure after connecting.
    #[error("xapi protocol error '{0}'")]
    Protocol(SmolStr),

    /// The device answered a command with a JSON-RPC error.
    #[error("{method} rejected: {message}")]
    Rejected { method: SmolStr, message: SmolStr },

    /// The device closed the connection while a response was pending.
    #[error("host connection closed")]
    Closed,
}

/// Errors surfaced by the panel lifecycle.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Panel(#[from] PanelError),

    #[error(transparent)]
    Host(#[from] HostError),
}
