//! Host command surface.
//!
//! Everything the panel needs from the device, as blocking calls. Each call is a
//! single attempt; failures are returned to the caller, never retried here.

use quickdocs_panel::{WebViewRequest, WidgetEvent};

use crate::error::HostError;

/// Device operations used by [`crate::QuickDocsApp`].
pub trait PanelHost {
    /// Saves (creates or replaces) the panel stored under `panel_id`.
    fn save_panel(&mut self, panel_id: &str, markup: &str) -> Result<(), HostError>;

    /// Removes the panel stored under `panel_id`.
    fn remove_panel(&mut self, panel_id: &str) -> Result<(), HostError>;

    /// Opens a web view on the touch controller.
    fn display_web_view(&mut self, request: &WebViewRequest) -> Result<(), HostError>;

    /// Deactivates the named automation on the device.
    fn deactivate_automation(&mut self, name: &str) -> Result<(), HostError>;

    /// Restarts the device's automation runtime.
    fn restart_automation_runtime(&mut self) -> Result<(), HostError>;

    /// Starts delivery of widget action events.
    fn subscribe_widget_events(&mut self) -> Result<(), HostError>;

    /// Blocks for the next widget action event. `None` once the host has gone away.
    fn next_widget_event(&mut self) -> Result<Option<WidgetEvent>, HostError>;
}
