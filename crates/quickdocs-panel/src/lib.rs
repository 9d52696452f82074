//! `quickdocs-panel` - quick docs panel generation and widget routing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Category grouping and ordering.
pub mod catalog;
/// Quick docs configuration loading.
pub mod config;
/// Panel errors.
pub mod error;
/// Panel markup tree and serialization.
pub mod markup;
/// QR code rendering URLs.
pub mod qr;
/// Widget interaction routing.
pub mod router;
/// Site entries.
pub mod site;
/// Widget identifier scheme.
pub mod widget_id;

pub use catalog::{normalize, Catalog, CategoryKey, CategoryOrder, CategoryTier, DEFAULT_CATEGORY};
pub use config::{HostConfig, PanelAppearance, QuickDocsConfig};
pub use error::PanelError;
pub use markup::{build_panel, PanelDocument, PANEL_ID};
pub use qr::{QrMode, QrSettings};
pub use router::{route, PanelAction, Routed, WebViewRequest, WidgetEvent, WidgetEventKind};
pub use site::SiteEntry;
pub use widget_id::{WidgetAction, WidgetId, WIDGET_ID_DELIMITER, WIDGET_NAMESPACE};
