//! Quick docs configuration loading.

#![allow(missing_docs)]

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use smol_str::SmolStr;

use crate::error::PanelError;
use crate::qr::{QrMode, QrSettings, DEFAULT_QR_SIZE};
use crate::site::SiteEntry;

pub const DEFAULT_AUTOMATION_NAME: &str = "QuickDoc_Manager";
pub const DEFAULT_GRACE_PERIOD_MS: u64 = 5_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Icons the touch controller can show on a home screen panel.
const KNOWN_ICONS: &[&str] = &[
    "Blinds",
    "Briefing",
    "Camera",
    "Concierge",
    "Disc",
    "Handset",
    "Help",
    "Helpdesk",
    "Home",
    "Hvac",
    "Info",
    "Input",
    "Language",
    "Laptop",
    "Lightbulb",
    "Media",
    "Microphone",
    "Power",
    "Proximity",
    "Record",
    "Sliders",
    "Spark",
    "Tv",
    "Webex",
    "General",
    "Custom",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelAppearance {
    pub name: SmolStr,
    /// Six hex digits, without the leading `#`.
    pub color: SmolStr,
    pub icon: SmolStr,
}

impl PanelAppearance {
    pub fn new(
        name: impl Into<SmolStr>,
        color: &str,
        icon: impl Into<SmolStr>,
    ) -> Result<Self, PanelError> {
        Ok(Self {
            name: name.into(),
            color: parse_color(color)?,
            icon: icon.into(),
        })
    }

    /// Color as the host expects it, `#RRGGBB`.
    #[must_use]
    pub fn color_hex(&self) -> String {
        format!("#{}", self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub endpoint: SmolStr,
    pub username: SmolStr,
    pub password: SmolStr,
    pub automation: SmolStr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickDocsConfig {
    pub panel: PanelAppearance,
    pub host: Option<HostConfig>,
    pub grace_period: Duration,
    pub log_level: SmolStr,
    pub qr: QrSettings,
    pub sites: Vec<SiteEntry>,
}

impl QuickDocsConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PanelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| {
            PanelError::InvalidConfig(format!("{}: {err}", path.display()).into())
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, PanelError> {
        let raw: QuickDocsToml = toml::from_str(text)
            .map_err(|err| PanelError::InvalidConfig(format!("quickdocs.toml: {err}").into()))?;
        raw.into_config()
    }

    /// Host settings, required by commands that talk to a device.
    pub fn require_host(&self) -> Result<&HostConfig, PanelError> {
        self.host
            .as_ref()
            .ok_or_else(|| PanelError::InvalidConfig("missing [host] section".into()))
    }
}

#[derive(Debug, Deserialize)]
struct QuickDocsToml {
    panel: PanelSection,
    host: Option<HostSection>,
    runtime: Option<RuntimeSection>,
    log: Option<LogSection>,
    qr: Option<QrSection>,
    #[serde(default)]
    sites: Vec<SiteSection>,
}

#[derive(Debug, Deserialize)]
struct PanelSection {
    name: String,
    color: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct HostSection {
    endpoint: String,
    username: String,
    password: Option<String>,
    automation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RuntimeSection {
    grace_period_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct LogSection {
    level: String,
}

#[derive(Debug, Deserialize)]
struct QrSection {
    mode: Option<String>,
    size: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SiteSection {
    name: String,
    url: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    enable_qr: bool,
}

impl QuickDocsToml {
    fn into_config(self) -> Result<QuickDocsConfig, PanelError> {
        if self.panel.name.trim().is_empty() {
            return Err(PanelError::InvalidConfig("panel.name must not be empty".into()));
        }
        let panel = PanelAppearance::new(self.panel.name, &self.panel.color, self.panel.icon)?;
        if !KNOWN_ICONS.contains(&panel.icon.as_str()) {
            tracing::warn!(icon = %panel.icon, "panel.icon is not a known host icon");
        }

        let host = self.host.map(HostSection::into_config).transpose()?;

        let grace_period = Duration::from_millis(
            self.runtime
                .and_then(|runtime| runtime.grace_period_ms)
                .unwrap_or(DEFAULT_GRACE_PERIOD_MS),
        );

        let qr_section = self.qr.unwrap_or(QrSection {
            mode: None,
            size: None,
        });
        let qr = QrSettings {
            mode: QrMode::parse(qr_section.mode.as_deref().unwrap_or("service"))?,
            size: qr_section.size.unwrap_or(DEFAULT_QR_SIZE),
        };
        if qr.size == 0 {
            return Err(PanelError::InvalidConfig("qr.size must be positive".into()));
        }

        let sites = self
            .sites
            .into_iter()
            .map(|site| SiteEntry::new(site.name, site.url, site.category, site.enable_qr))
            .collect();

        Ok(QuickDocsConfig {
            panel,
            host,
            grace_period,
            log_level: SmolStr::new(
                self.log
                    .map_or_else(|| DEFAULT_LOG_LEVEL.to_string(), |log| log.level),
            ),
            qr,
            sites,
        })
    }
}

impl HostSection {
    fn into_config(self) -> Result<HostConfig, PanelError> {
        if !(self.endpoint.starts_with("ws://") || self.endpoint.starts_with("wss://")) {
            return Err(PanelError::InvalidConfig(
                format!("host.endpoint must be ws:// or wss:// (got '{}')", self.endpoint).into(),
            ));
        }
        let automation = self
            .automation
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTOMATION_NAME.to_string());
        Ok(HostConfig {
            endpoint: SmolStr::new(self.endpoint),
            username: SmolStr::new(self.username),
            password: SmolStr::new(self.password.unwrap_or_default()),
            automation: SmolStr::new(automation),
        })
    }
}

fn parse_color(text: &str) -> Result<SmolStr, PanelError> {
    let trimmed = text.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(PanelError::InvalidConfig(
            format!("invalid panel.color '{text}' (expected RRGGBB)").into(),
        ));
    }
    Ok(SmolStr::new(hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[panel]
name = "Docs"
color = "800000"
icon = "Language"
"#;

    #[test]
    fn defaults_fill_optional_sections() {
        let config = QuickDocsConfig::from_toml_str(MINIMAL).unwrap();
        assert!(config.host.is_none());
        assert!(config.sites.is_empty());
        assert_eq!(config.grace_period, Duration::from_millis(DEFAULT_GRACE_PERIOD_MS));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.qr.mode, QrMode::Service);
        assert_eq!(config.qr.size, DEFAULT_QR_SIZE);
        assert!(config.require_host().is_err());
    }

    #[test]
    fn color_accepts_leading_hash() {
        let panel = PanelAppearance::new("Docs", "#80a0ff", "Language").unwrap();
        assert_eq!(panel.color, "80a0ff");
        assert_eq!(panel.color_hex(), "#80a0ff");
    }

    #[test]
    fn color_rejects_short_values() {
        assert!(matches!(
            PanelAppearance::new("Docs", "fff", "Language"),
            Err(PanelError::InvalidConfig(_))
        ));
        assert!(PanelAppearance::new("Docs", "zz0000", "Language").is_err());
    }

    #[test]
    fn host_endpoint_must_be_websocket() {
        let text = format!(
            "{MINIMAL}\n[host]\nendpoint = \"http://10.0.0.1\"\nusername = \"admin\"\n"
        );
        let err = QuickDocsConfig::from_toml_str(&text).unwrap_err();
        assert!(err.to_string().contains("host.endpoint"));
    }

    #[test]
    fn host_automation_defaults() {
        let text = format!(
            "{MINIMAL}\n[host]\nendpoint = \"wss://10.0.0.1/ws\"\nusername = \"admin\"\n"
        );
        let config = QuickDocsConfig::from_toml_str(&text).unwrap();
        let host = config.require_host().unwrap();
        assert_eq!(host.automation, DEFAULT_AUTOMATION_NAME);
        assert_eq!(host.password, "");
    }

    #[test]
    fn unknown_qr_mode_is_rejected() {
        let text = format!("{MINIMAL}\n[qr]\nmode = \"printer\"\n");
        assert!(QuickDocsConfig::from_toml_str(&text).is_err());
    }
}
