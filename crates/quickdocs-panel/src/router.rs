//! Widget interaction routing.

#![allow(missing_docs)]

use smol_str::SmolStr;

use crate::error::PanelError;
use crate::qr::QrSettings;
use crate::widget_id::{WidgetAction, WidgetId};

/// Interaction kinds the host reports for a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEventKind {
    Pressed,
    Released,
    Clicked,
    Changed,
    Other(SmolStr),
}

impl WidgetEventKind {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text {
            "pressed" => Self::Pressed,
            "released" => Self::Released,
            "clicked" => Self::Clicked,
            "changed" => Self::Changed,
            other => Self::Other(SmolStr::new(other)),
        }
    }
}

/// Widget action event as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEvent {
    pub kind: WidgetEventKind,
    pub widget_id: SmolStr,
}

impl WidgetEvent {
    pub fn new(kind: &str, widget_id: impl Into<SmolStr>) -> Self {
        Self {
            kind: WidgetEventKind::parse(kind),
            widget_id: widget_id.into(),
        }
    }
}

/// Decoded request to show something on the touch controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    OpenSite { name: SmolStr, url: SmolStr },
    OpenQrCode { name: SmolStr, url: SmolStr },
}

impl PanelAction {
    /// Web view that carries out this action.
    pub fn web_view(&self, qr: &QrSettings) -> Result<WebViewRequest, PanelError> {
        match self {
            Self::OpenSite { name, url } => {
                Ok(WebViewRequest::modal(name.to_string(), url.to_string()))
            }
            Self::OpenQrCode { name, url } => Ok(WebViewRequest::modal(
                format!("{name} QR Code"),
                qr.render_url(url)?,
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebViewRequest {
    pub title: String,
    pub url: String,
    pub target: &'static str,
    pub mode: &'static str,
}

impl WebViewRequest {
    /// Modal web view on the paired controller.
    #[must_use]
    pub fn modal(title: String, url: String) -> Self {
        Self {
            title,
            url,
            target: "Controller",
            mode: "Modal",
        }
    }
}

/// Outcome of routing one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    /// Not ours, or not a release.
    Ignored,
    /// Ours, but the action is unknown to this build.
    UnknownAction(SmolStr),
    Action(PanelAction),
}

/// Decodes a widget event into an action.
///
/// Only `released` events on identifiers carrying the panel namespace are acted on.
/// An owned identifier without exactly five fields is an error.
pub fn route(event: &WidgetEvent) -> Result<Routed, PanelError> {
    if event.kind != WidgetEventKind::Released || !WidgetId::is_owned(&event.widget_id) {
        return Ok(Routed::Ignored);
    }
    let id = WidgetId::parse(&event.widget_id)?;
    Ok(match id.action {
        WidgetAction::OpenSite => Routed::Action(PanelAction::OpenSite {
            name: id.name,
            url: id.url,
        }),
        WidgetAction::OpenQrCode => Routed::Action(PanelAction::OpenQrCode {
            name: id.name,
            url: id.url,
        }),
        WidgetAction::Other(action) => Routed::UnknownAction(action),
    })
}
