//! Site entries.

use smol_str::SmolStr;

use crate::error::PanelError;
use crate::widget_id::WIDGET_ID_DELIMITER;

/// One quick link shown on the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteEntry {
    /// User-facing name, also used as the row label.
    pub name: SmolStr,
    /// Target URL.
    pub url: SmolStr,
    /// Page the site is grouped under; empty means the default category.
    pub category: SmolStr,
    /// Adds a "QR Code" button next to "Open Site".
    pub enable_qr: bool,
}

impl SiteEntry {
    /// Creates an entry; an empty `category` means the default category.
    pub fn new(
        name: impl Into<SmolStr>,
        url: impl Into<SmolStr>,
        category: impl Into<SmolStr>,
        enable_qr: bool,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            category: category.into(),
            enable_qr,
        }
    }

    /// Rejects fields that would break widget identifier decoding.
    pub fn check_delimiters(&self) -> Result<(), PanelError> {
        for (field, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("url", &self.url),
        ] {
            if value.contains(WIDGET_ID_DELIMITER) {
                return Err(PanelError::DelimiterInField {
                    site: self.name.clone(),
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
