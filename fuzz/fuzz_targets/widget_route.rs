#![no_main]

use libfuzzer_sys::fuzz_target;
use quickdocs_panel::{route, QrSettings, Routed, WidgetEvent, WidgetId};

const MAX_ID_BYTES: usize = 1024;
const EVENT_KINDS: [&str; 5] = ["pressed", "released", "clicked", "changed", "held"];

fuzz_target!(|data: &[u8]| {
    let Some((&seed, rest)) = data.split_first() else {
        return;
    };
    let capped = &rest[..rest.len().min(MAX_ID_BYTES)];
    let raw = String::from_utf8_lossy(capped);
    let kind = EVENT_KINDS[usize::from(seed) % EVENT_KINDS.len()];

    let event = WidgetEvent::new(kind, raw.as_ref());
    if let Ok(Routed::Action(action)) = route(&event) {
        let _ = action.web_view(&QrSettings::default());
    }

    if let Ok(id) = WidgetId::parse(&raw) {
        assert_eq!(id.encode(), raw);
        assert_eq!(WidgetId::parse(&id.encode()), Ok(id));
    }
});
