//! CLI entrypoint for the quick docs panel.

#[path = "quickdocs/cli.rs"]
mod cli;
#[path = "quickdocs/completions.rs"]
mod completions;
#[path = "quickdocs/run.rs"]
mod run;
#[path = "quickdocs/style.rs"]
mod style;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    if let Err(err) = dispatch() {
        eprintln!("{}", style::error(format!("Error: {err:#}")));
        std::process::exit(1);
    }
}

fn dispatch() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { config } => run::run_panel(&config, cli.verbose),
        Command::Push { config } => run::run_push(&config, cli.verbose),
        Command::Remove { config } => run::run_remove(&config, cli.verbose),
        Command::Render { config, output } => run::run_render(&config, output, cli.verbose),
        Command::Validate { config } => run::run_validate(&config, cli.verbose),
        Command::Route {
            widget_id,
            event_type,
            config,
        } => run::run_route(&widget_id, &event_type, config, cli.verbose),
        Command::Completions { shell } => completions::run_completions(shell),
    }
}
