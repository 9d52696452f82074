//! Panel lifecycle and event loop.

use std::thread;

use quickdocs_panel::config::DEFAULT_AUTOMATION_NAME;
use quickdocs_panel::{
    build_panel, normalize, route, PanelDocument, PanelError, QuickDocsConfig, Routed,
    WebViewRequest, WidgetEvent, PANEL_ID,
};

use crate::error::AppError;
use crate::host::PanelHost;

/// What [`QuickDocsApp::start`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Startup {
    /// The panel was saved on the device.
    Registered {
        /// Category pages on the panel.
        pages: usize,
        /// Buttons across all pages.
        widgets: usize,
    },
    /// No sites were configured; the panel was removed and the automation disabled.
    Disabled,
}

/// Quick docs panel bound to one device.
pub struct QuickDocsApp<H> {
    host: H,
    config: QuickDocsConfig,
}

impl<H: PanelHost> QuickDocsApp<H> {
    /// Binds `config` to `host`. Nothing is sent until [`QuickDocsApp::start`].
    pub fn new(host: H, config: QuickDocsConfig) -> Self {
        Self { host, config }
    }

    /// Device handle.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Consumes the app and returns the device handle.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Registers the panel, or disables the automation when no sites are configured.
    pub fn start(&mut self) -> Result<Startup, AppError> {
        if self.config.sites.is_empty() {
            self.self_disable()?;
            return Ok(Startup::Disabled);
        }
        let document = self.rebuild_panel()?;
        Ok(Startup::Registered {
            pages: document.pages.len(),
            widgets: document.widgets().count(),
        })
    }

    /// Builds the panel from the configuration and saves it on the device.
    pub fn rebuild_panel(&mut self) -> Result<PanelDocument, AppError> {
        tracing::info!("building user interface");
        let catalog = normalize(&self.config.sites)?;
        let document = build_panel(&catalog, &self.config.panel);
        self.host.save_panel(PANEL_ID, &document.to_xml())?;
        tracing::info!(
            panel = %self.config.panel.name,
            pages = document.pages.len(),
            "user interface built, look for the panel on the touch controller"
        );
        Ok(document)
    }

    /// Routes one widget event and opens the resulting web view.
    ///
    /// Returns the web view that was requested, if any.
    pub fn handle_event(
        &mut self,
        event: &WidgetEvent,
    ) -> Result<Option<WebViewRequest>, AppError> {
        let action = match route(event)? {
            Routed::Ignored => return Ok(None),
            Routed::UnknownAction(action) => {
                tracing::debug!(
                    %action,
                    widget = %event.widget_id,
                    "ignoring unknown widget action"
                );
                return Ok(None);
            }
            Routed::Action(action) => action,
        };
        let request = action.web_view(&self.config.qr)?;
        self.host.display_web_view(&request)?;
        tracing::info!(title = %request.title, url = %request.url, "web view displayed");
        Ok(Some(request))
    }

    /// Starts the panel, then dispatches widget events until the host disconnects.
    pub fn run(&mut self) -> Result<Startup, AppError> {
        let startup = self.start()?;
        if startup == Startup::Disabled {
            return Ok(startup);
        }
        self.host.subscribe_widget_events()?;
        while let Some(event) = self.host.next_widget_event()? {
            match self.handle_event(&event) {
                Ok(_) => {}
                Err(AppError::Panel(err @ PanelError::MalformedWidgetId { .. })) => {
                    tracing::error!(%err, "widget identifier scheme violation");
                }
                Err(err) => {
                    tracing::warn!(%err, widget = %event.widget_id, "widget action failed");
                }
            }
        }
        tracing::info!("host connection closed");
        Ok(startup)
    }

    fn self_disable(&mut self) -> Result<(), AppError> {
        let automation = self
            .config
            .host
            .as_ref()
            .map_or(DEFAULT_AUTOMATION_NAME, |host| host.automation.as_str())
            .to_string();
        tracing::error!(
            tip = "configure at least one [[sites]] entry",
            automation = %automation,
            grace_ms = u64::try_from(self.config.grace_period.as_millis()).unwrap_or(u64::MAX),
            "sites not configured, disabling after grace period"
        );
        thread::sleep(self.config.grace_period);
        if let Err(err) = self.host.remove_panel(PANEL_ID) {
            tracing::warn!(%err, panel = PANEL_ID, "panel removal failed, continuing shutdown");
        }
        self.host.deactivate_automation(&automation)?;
        self.host.restart_automation_runtime()?;
        Ok(())
    }
}
