#![no_main]

use libfuzzer_sys::fuzz_target;
use quickdocs_panel::{build_panel, normalize, PanelAppearance, SiteEntry, WidgetId};

const MAX_SITES: usize = 32;

fn decode_sites(text: &str) -> Vec<SiteEntry> {
    text.lines()
        .take(MAX_SITES)
        .map(|line| {
            let mut fields = line.splitn(3, '|');
            let name = fields.next().unwrap_or_default();
            let category = fields.next().unwrap_or_default();
            let url = fields.next().unwrap_or_default();
            SiteEntry::new(name, url, category, name.len() % 2 == 0)
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let sites = decode_sites(&text);
    let Ok(catalog) = normalize(&sites) else {
        return;
    };
    let Ok(appearance) = PanelAppearance::new("Docs", "800000", "Language") else {
        return;
    };
    let panel = build_panel(&catalog, &appearance);
    assert_eq!(panel.pages.len(), catalog.categories.len());
    for widget in panel.widgets() {
        assert_eq!(WidgetId::parse(&widget.id.encode()).as_ref(), Ok(&widget.id));
    }
    let _ = panel.to_xml();
});
