mod common;

use common::{HostCall, RecordingHost};
use quickdocs_panel::{WidgetEvent, PANEL_ID};
use quickdocs_runtime::{AppError, QuickDocsApp, Startup};

#[test]
fn start_registers_panel_once() {
    let mut app = QuickDocsApp::new(RecordingHost::default(), common::two_site_config());
    let startup = app.start().unwrap();
    assert_eq!(
        startup,
        Startup::Registered {
            pages: 2,
            widgets: 3
        }
    );
    let host = app.into_host();
    assert_eq!(host.calls.len(), 1);
    let HostCall::SavePanel { panel_id, markup } = &host.calls[0] else {
        panic!("expected a panel save");
    };
    assert_eq!(panel_id, PANEL_ID);
    let document = roxmltree::Document::parse(markup).expect("parse saved markup");
    let page_names = document
        .descendants()
        .filter(|node| node.has_tag_name("Page"))
        .filter_map(|page| {
            page.children()
                .find(|child| child.has_tag_name("Name"))
                .and_then(|name| name.text())
        })
        .collect::<Vec<_>>();
    assert_eq!(page_names, ["General", "Dev"]);
}

#[test]
fn empty_site_list_disables_without_registering() {
    let config = common::config_with_sites("");
    let mut app = QuickDocsApp::new(RecordingHost::default(), config);
    assert_eq!(app.run().unwrap(), Startup::Disabled);
    let host = app.into_host();
    assert!(host.saved_markup().is_empty());
    assert_eq!(
        host.calls,
        [
            HostCall::RemovePanel(PANEL_ID.to_string()),
            HostCall::DeactivateAutomation("QuickDoc_Manager".to_string()),
            HostCall::RestartRuntime,
        ]
    );
}

#[test]
fn disabled_path_continues_when_no_panel_was_saved() {
    let host = RecordingHost {
        fail_removal: true,
        ..RecordingHost::default()
    };
    let mut app = QuickDocsApp::new(host, common::config_with_sites(""));
    assert_eq!(app.start().unwrap(), Startup::Disabled);
    assert_eq!(
        app.into_host().calls,
        [
            HostCall::DeactivateAutomation("QuickDoc_Manager".to_string()),
            HostCall::RestartRuntime,
        ]
    );
}

#[test]
fn disabled_path_uses_configured_automation_name() {
    let config = common::config_with_sites(
        r#"
[host]
endpoint = "ws://127.0.0.1:1/ws"
username = "admin"
automation = "Docs_Panel"
"#,
    );
    let mut app = QuickDocsApp::new(RecordingHost::default(), config);
    app.start().unwrap();
    assert!(app
        .host()
        .calls
        .contains(&HostCall::DeactivateAutomation("Docs_Panel".to_string())));
}

#[test]
fn run_dispatches_released_events_in_order() {
    let host = RecordingHost::with_events([
        WidgetEvent::new("pressed", "uDocsQR~General~A~OpenSite~http://x"),
        WidgetEvent::new("released", "uDocsQR~General~A~OpenSite~http://x"),
        WidgetEvent::new("released", "lights~General~A~OpenSite~http://x"),
        WidgetEvent::new("released", "uDocsQR~General~A~OpenQRCode~http://x"),
        WidgetEvent::new("released", "uDocsQR~Dev~B~OpenSite~http://y"),
    ]);
    let mut app = QuickDocsApp::new(host, common::two_site_config());
    app.run().unwrap();
    let host = app.into_host();
    assert!(matches!(host.calls[0], HostCall::SavePanel { .. }));
    assert_eq!(host.calls[1], HostCall::Subscribe);

    let views = host.web_views();
    assert_eq!(views.len(), 3);
    assert_eq!(views[0].title, "A");
    assert_eq!(views[0].url, "http://x");
    assert_eq!(views[1].title, "A QR Code");
    assert_eq!(
        views[1].url,
        "https://api.qrserver.com/v1/create-qr-code/?data=http%3A%2F%2Fx&size=500x500"
    );
    assert_eq!(views[2].title, "B");
    assert_eq!(views[2].url, "http://y");
    assert!(views
        .iter()
        .all(|view| view.target == "Controller" && view.mode == "Modal"));
}

#[test]
fn unknown_actions_and_malformed_ids_do_not_stop_the_loop() {
    let host = RecordingHost::with_events([
        WidgetEvent::new("released", "uDocsQR~Dev~B~Share~http://y"),
        WidgetEvent::new("released", "uDocsQR~broken"),
        WidgetEvent::new("released", "uDocsQR~Dev~B~OpenSite~http://y"),
    ]);
    let mut app = QuickDocsApp::new(host, common::two_site_config());
    app.run().unwrap();
    assert_eq!(app.host().web_views().len(), 1);
}

#[test]
fn web_view_failures_are_reported_per_event() {
    let mut host = RecordingHost::default();
    host.fail_web_views = true;
    let mut app = QuickDocsApp::new(host, common::two_site_config());
    app.start().unwrap();
    let err = app
        .handle_event(&WidgetEvent::new("released", "uDocsQR~Dev~B~OpenSite~http://y"))
        .unwrap_err();
    assert!(matches!(err, AppError::Host(_)));
}

#[test]
fn rebuild_saves_identical_markup() {
    let mut app = QuickDocsApp::new(RecordingHost::default(), common::two_site_config());
    app.rebuild_panel().unwrap();
    app.rebuild_panel().unwrap();
    let markup = app.host().saved_markup();
    assert_eq!(markup.len(), 2);
    assert_eq!(markup[0], markup[1]);
}

#[test]
fn delimiter_in_site_fails_before_registering() {
    let config = common::config_with_sites(
        r#"
[[sites]]
name = "Home"
url = "https://example.com/~me"
"#,
    );
    let mut app = QuickDocsApp::new(RecordingHost::default(), config);
    assert!(matches!(app.start(), Err(AppError::Panel(_))));
    assert!(app.host().calls.is_empty());
}
