//! QR code rendering URLs.

#![allow(missing_docs)]

use base64::Engine as _;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use qrcode::{render::svg, QrCode};

use crate::error::PanelError;

pub const QR_SERVICE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const DEFAULT_QR_SIZE: u32 = 500;

/// Characters escaped when a URL is embedded as a query value. Matches the
/// unreserved set browsers leave alone in `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrMode {
    /// Link to the external QR image service.
    Service,
    /// Render locally into an SVG data URL.
    Inline,
}

impl QrMode {
    pub fn parse(text: &str) -> Result<Self, PanelError> {
        match text.trim().to_ascii_lowercase().as_str() {
            "service" => Ok(Self::Service),
            "inline" => Ok(Self::Inline),
            _ => Err(PanelError::InvalidConfig(
                format!("invalid qr.mode '{text}'").into(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrSettings {
    pub mode: QrMode,
    /// Edge length in pixels.
    pub size: u32,
}

impl Default for QrSettings {
    fn default() -> Self {
        Self {
            mode: QrMode::Service,
            size: DEFAULT_QR_SIZE,
        }
    }
}

impl QrSettings {
    /// URL the web view opens to show `target` as a QR code.
    pub fn render_url(&self, target: &str) -> Result<String, PanelError> {
        match self.mode {
            QrMode::Service => Ok(service_url(target, self.size)),
            QrMode::Inline => inline_svg_url(target, self.size),
        }
    }
}

#[must_use]
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

#[must_use]
pub fn service_url(target: &str, size: u32) -> String {
    format!(
        "{QR_SERVICE_ENDPOINT}?data={}&size={size}x{size}",
        encode_component(target)
    )
}

pub fn inline_svg_url(target: &str, size: u32) -> Result<String, PanelError> {
    let code = QrCode::new(target.as_bytes())
        .map_err(|err| PanelError::QrRender(format!("{err}").into()))?;
    let svg = code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .build();
    let encoded = base64::engine::general_purpose::STANDARD.encode(svg.as_bytes());
    Ok(format!("data:image/svg+xml;base64,{encoded}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_url_percent_encodes_target() {
        assert_eq!(
            service_url("https://eurl.io/#ywxvh25AA", 500),
            "https://api.qrserver.com/v1/create-qr-code/?data=https%3A%2F%2Feurl.io%2F%23ywxvh25AA&size=500x500"
        );
    }

    #[test]
    fn component_encoding_keeps_unreserved_marks() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("it's-(ok)!*_.~"), "it's-(ok)!*_.~");
    }

    #[test]
    fn inline_mode_yields_svg_data_url() {
        let settings = QrSettings {
            mode: QrMode::Inline,
            size: 120,
        };
        let url = settings.render_url("https://roomos.cisco.com/").unwrap();
        assert!(url.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn mode_parse_is_case_insensitive() {
        assert_eq!(QrMode::parse("Inline").unwrap(), QrMode::Inline);
        assert!(QrMode::parse("paper").is_err());
    }
}
