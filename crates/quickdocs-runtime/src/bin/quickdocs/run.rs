//! Command handlers.

use std::path::{Path, PathBuf};

use anyhow::Context;
use quickdocs_panel::{
    build_panel, normalize, route, QrSettings, QuickDocsConfig, Routed, WidgetEvent, PANEL_ID,
};
use quickdocs_runtime::{PanelHost, QuickDocsApp, Startup, XapiClient};

use crate::style;

fn init_logging(level: &str, verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        level
            .parse::<tracing::Level>()
            .with_context(|| format!("invalid log.level '{level}'"))?
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn load(config: &Path, verbose: bool) -> anyhow::Result<QuickDocsConfig> {
    let config = QuickDocsConfig::load(config)?;
    init_logging(&config.log_level, verbose)?;
    Ok(config)
}

fn connect(config: &QuickDocsConfig) -> anyhow::Result<XapiClient> {
    let host = config.require_host()?;
    Ok(XapiClient::connect(host)?)
}

pub fn run_panel(config: &Path, verbose: bool) -> anyhow::Result<()> {
    let config = load(config, verbose)?;
    let client = connect(&config)?;
    let mut app = QuickDocsApp::new(client, config);
    if app.run()? == Startup::Disabled {
        anyhow::bail!("no sites configured; panel removed and automation deactivated");
    }
    Ok(())
}

pub fn run_push(config: &Path, verbose: bool) -> anyhow::Result<()> {
    let config = load(config, verbose)?;
    let client = connect(&config)?;
    let mut app = QuickDocsApp::new(client, config);
    match app.start()? {
        Startup::Registered { pages, widgets } => {
            println!(
                "{}",
                style::success(format!("Panel saved ({pages} pages, {widgets} buttons)"))
            );
            Ok(())
        }
        Startup::Disabled => {
            anyhow::bail!("no sites configured; panel removed and automation deactivated")
        }
    }
}

pub fn run_remove(config: &Path, verbose: bool) -> anyhow::Result<()> {
    let config = load(config, verbose)?;
    let mut client = connect(&config)?;
    client.remove_panel(PANEL_ID)?;
    println!("{}", style::success(format!("Panel {PANEL_ID} removed")));
    Ok(())
}

pub fn run_render(config: &Path, output: Option<PathBuf>, verbose: bool) -> anyhow::Result<()> {
    let config = load(config, verbose)?;
    let catalog = normalize(&config.sites)?;
    let xml = build_panel(&catalog, &config.panel).to_xml();
    match output {
        Some(path) => {
            std::fs::write(&path, &xml)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "{}",
                style::success(format!("Markup written to {}", path.display()))
            );
        }
        None => print!("{xml}"),
    }
    Ok(())
}

pub fn run_validate(config: &Path, verbose: bool) -> anyhow::Result<()> {
    let config = load(config, verbose)?;
    let catalog = normalize(&config.sites)?;
    if catalog.is_empty() {
        anyhow::bail!("no sites configured; add at least one [[sites]] entry");
    }
    if config.host.is_none() {
        println!(
            "{}",
            style::warning("Warning: no [host] section; run/push/remove will fail")
        );
    }
    for category in &catalog.categories {
        let count = catalog.sites_in(category).count();
        println!("  {} ({count})", style::accent(category));
    }
    println!(
        "{}",
        style::success(format!(
            "Config ok: {} sites in {} categories",
            catalog.sites.len(),
            catalog.categories.len()
        ))
    );
    Ok(())
}

pub fn run_route(
    widget_id: &str,
    event_type: &str,
    config: Option<PathBuf>,
    verbose: bool,
) -> anyhow::Result<()> {
    let qr = match config {
        Some(path) => load(&path, verbose)?.qr,
        None => {
            init_logging(quickdocs_panel::config::DEFAULT_LOG_LEVEL, verbose)?;
            QrSettings::default()
        }
    };
    let event = WidgetEvent::new(event_type, widget_id);
    match route(&event)? {
        Routed::Ignored => println!("{}", style::warning("Ignored")),
        Routed::UnknownAction(action) => {
            println!("{}", style::warning(format!("Unknown action '{action}'")));
        }
        Routed::Action(action) => {
            let view = action.web_view(&qr)?;
            println!("{} {}", style::accent("title:"), view.title);
            println!("{} {}", style::accent("url:"), view.url);
            println!("{} {}", style::accent("target:"), view.target);
            println!("{} {}", style::accent("mode:"), view.mode);
        }
    }
    Ok(())
}
