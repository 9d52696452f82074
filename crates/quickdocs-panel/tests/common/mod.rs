#![allow(dead_code)]

use quickdocs_panel::{PanelAppearance, SiteEntry};

pub fn appearance() -> PanelAppearance {
    PanelAppearance::new("Docs and Community Spaces", "800000", "Language")
        .expect("valid appearance")
}

/// The default site list shipped in the example configuration.
pub fn sample_sites() -> Vec<SiteEntry> {
    vec![
        SiteEntry::new(
            "xAPI Developers and Integrations",
            "https://eurl.io/#ywxvh25AA",
            "Webex Spaces",
            true,
        ),
        SiteEntry::new(
            "AV Integrators Discussion with Cisco",
            "https://eurl.io/#rkp76XDrG",
            "Webex Spaces",
            true,
        ),
        SiteEntry::new(
            "RoomOS xAPI Docs and Samples",
            "https://roomos.cisco.com/",
            "Developer Sites",
            true,
        ),
        SiteEntry::new(
            "Developer.Webex.Com",
            "https://developer.webex.com/",
            "",
            true,
        ),
    ]
}

/// Sites spread over mixed-case categories, some without QR.
pub fn mixed_sites() -> Vec<SiteEntry> {
    vec![
        SiteEntry::new("Wiki", "https://wiki.example.com/", "ops", false),
        SiteEntry::new("Runbook", "https://runbook.example.com/", "Ops", true),
        SiteEntry::new("Status", "https://status.example.com/", "", false),
        SiteEntry::new("Board", "https://board.example.com/", "Agile", true),
        SiteEntry::new("Handbook", "https://handbook.example.com/", "General", false),
        SiteEntry::new("Zulip", "https://chat.example.com/", "zeta", true),
    ]
}
