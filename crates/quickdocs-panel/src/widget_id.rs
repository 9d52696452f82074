//! Widget identifier scheme.
//!
//! Every button the panel owns carries its routing information in the widget id:
//! `uDocsQR~<category>~<name>~<action>~<url>`. The host echoes the id back on
//! interaction events, so the id is the only state the router needs.

#![allow(missing_docs)]

use std::fmt;

use smol_str::SmolStr;

use crate::error::PanelError;

/// Namespace tag marking identifiers owned by this panel.
pub const WIDGET_NAMESPACE: &str = "uDocsQR";
/// Field separator inside widget identifiers.
pub const WIDGET_ID_DELIMITER: char = '~';

const WIDGET_ID_FIELDS: usize = 5;

/// Button action encoded in the fourth identifier field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WidgetAction {
    OpenSite,
    OpenQrCode,
    /// Action written by a newer or foreign builder; routed as a no-op.
    Other(SmolStr),
}

impl WidgetAction {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::OpenSite => "OpenSite",
            Self::OpenQrCode => "OpenQRCode",
            Self::Other(text) => text.as_str(),
        }
    }

    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text {
            "OpenSite" => Self::OpenSite,
            "OpenQRCode" => Self::OpenQrCode,
            other => Self::Other(SmolStr::new(other)),
        }
    }
}

/// Decoded widget identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId {
    pub category: SmolStr,
    pub name: SmolStr,
    pub action: WidgetAction,
    pub url: SmolStr,
}

impl WidgetId {
    pub fn new(
        category: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
        action: WidgetAction,
        url: impl Into<SmolStr>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            action,
            url: url.into(),
        }
    }

    /// Returns true when `raw` carries this panel's namespace tag.
    #[must_use]
    pub fn is_owned(raw: &str) -> bool {
        raw.strip_prefix(WIDGET_NAMESPACE)
            .is_some_and(|rest| rest.starts_with(WIDGET_ID_DELIMITER))
    }

    /// Decodes an owned identifier. Callers check [`WidgetId::is_owned`] first.
    pub fn parse(raw: &str) -> Result<Self, PanelError> {
        let fields = raw.split(WIDGET_ID_DELIMITER).collect::<Vec<_>>();
        let [namespace, category, name, action, url] = fields.as_slice() else {
            return Err(PanelError::MalformedWidgetId {
                id: SmolStr::new(raw),
                fields: fields.len(),
            });
        };
        if *namespace != WIDGET_NAMESPACE {
            return Err(PanelError::MalformedWidgetId {
                id: SmolStr::new(raw),
                fields: WIDGET_ID_FIELDS,
            });
        }
        Ok(Self::new(*category, *name, WidgetAction::parse(action), *url))
    }

    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = WIDGET_ID_DELIMITER;
        write!(
            f,
            "{WIDGET_NAMESPACE}{d}{}{d}{}{d}{}{d}{}",
            self.category,
            self.name,
            self.action.as_str(),
            self.url
        )
    }
}

/// Page identifier for a category page.
#[must_use]
pub fn page_id(category: &str) -> String {
    format!("{WIDGET_NAMESPACE}{WIDGET_ID_DELIMITER}{category}")
}
