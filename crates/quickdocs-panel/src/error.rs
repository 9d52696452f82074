//! Panel errors.

#![allow(missing_docs)]

use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised while loading, normalizing, or routing the quick docs panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// Configuration error.
    #[error("invalid config '{0}'")]
    InvalidConfig(SmolStr),

    /// A site field contains the widget identifier delimiter.
    #[error("site '{site}' has '~' in its {field}: '{value}'")]
    DelimiterInField {
        site: SmolStr,
        field: &'static str,
        value: SmolStr,
    },

    /// Identifier carries the namespace tag but does not have five fields.
    #[error("malformed widget id '{id}' ({fields} fields)")]
    MalformedWidgetId { id: SmolStr, fields: usize },

    /// QR code rendering failure.
    #[error("qr: {0}")]
    QrRender(SmolStr),
}
