//! `quickdocs-runtime` - drives the quick docs panel on a RoomOS device.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Panel lifecycle and event loop.
pub mod app;
/// Host transport errors.
pub mod error;
/// Host command surface.
pub mod host;
/// xAPI WebSocket JSON-RPC client.
pub mod xapi;

pub use app::{QuickDocsApp, Startup};
pub use error::{AppError, HostError};
pub use host::PanelHost;
pub use xapi::XapiClient;
