#![allow(dead_code)]

use std::collections::VecDeque;

use quickdocs_panel::{QuickDocsConfig, WebViewRequest, WidgetEvent};
use quickdocs_runtime::{HostError, PanelHost};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    SavePanel { panel_id: String, markup: String },
    RemovePanel(String),
    DisplayWebView(WebViewRequest),
    DeactivateAutomation(String),
    RestartRuntime,
    Subscribe,
}

/// In-memory host that records every call and replays scripted events.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub events: VecDeque<WidgetEvent>,
    pub fail_web_views: bool,
    pub fail_removal: bool,
}

impl RecordingHost {
    pub fn with_events(events: impl IntoIterator<Item = WidgetEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn saved_markup(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::SavePanel { markup, .. } => Some(markup.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn web_views(&self) -> Vec<&WebViewRequest> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::DisplayWebView(request) => Some(request),
                _ => None,
            })
            .collect()
    }
}

impl PanelHost for RecordingHost {
    fn save_panel(&mut self, panel_id: &str, markup: &str) -> Result<(), HostError> {
        self.calls.push(HostCall::SavePanel {
            panel_id: panel_id.to_string(),
            markup: markup.to_string(),
        });
        Ok(())
    }

    fn remove_panel(&mut self, panel_id: &str) -> Result<(), HostError> {
        if self.fail_removal {
            return Err(HostError::Rejected {
                method: "xCommand/UserInterface/Extensions/Panel/Remove".into(),
                message: "No panel with that id".into(),
            });
        }
        self.calls.push(HostCall::RemovePanel(panel_id.to_string()));
        Ok(())
    }

    fn display_web_view(&mut self, request: &WebViewRequest) -> Result<(), HostError> {
        if self.fail_web_views {
            return Err(HostError::Rejected {
                method: "xCommand/UserInterface/WebView/Display".into(),
                message: "WebView not available".into(),
            });
        }
        self.calls.push(HostCall::DisplayWebView(request.clone()));
        Ok(())
    }

    fn deactivate_automation(&mut self, name: &str) -> Result<(), HostError> {
        self.calls
            .push(HostCall::DeactivateAutomation(name.to_string()));
        Ok(())
    }

    fn restart_automation_runtime(&mut self) -> Result<(), HostError> {
        self.calls.push(HostCall::RestartRuntime);
        Ok(())
    }

    fn subscribe_widget_events(&mut self) -> Result<(), HostError> {
        self.calls.push(HostCall::Subscribe);
        Ok(())
    }

    fn next_widget_event(&mut self) -> Result<Option<WidgetEvent>, HostError> {
        Ok(self.events.pop_front())
    }
}

pub const PANEL_SECTION: &str = r#"
[panel]
name = "Docs and Community Spaces"
color = "800000"
icon = "Language"

[runtime]
grace_period_ms = 0
"#;

pub fn config_with_sites(sites: &str) -> QuickDocsConfig {
    QuickDocsConfig::from_toml_str(&format!("{PANEL_SECTION}\n{sites}")).expect("valid config")
}

pub fn two_site_config() -> QuickDocsConfig {
    config_with_sites(
        r#"
[[sites]]
name = "A"
url = "http://x"
category = ""
enable_qr = true

[[sites]]
name = "B"
url = "http://y"
category = "Dev"
enable_qr = false
"#,
    )
}
