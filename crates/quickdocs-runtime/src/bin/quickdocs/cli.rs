//! CLI definitions for quickdocs.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "quickdocs",
    version,
    about = "Quick docs panel for RoomOS touch controllers",
    infer_subcommands = true,
    after_help = "Examples:\n  quickdocs validate --config quickdocs.toml\n  quickdocs render --output panel.xml\n  quickdocs run --verbose\n  quickdocs route 'uDocsQR~General~Docs~OpenQRCode~https://roomos.cisco.com'"
)]
pub struct Cli {
    /// Show debug logging.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register the panel and serve button presses until the device disconnects.
    Run {
        /// Configuration file.
        #[arg(long, short, default_value = "quickdocs.toml")]
        config: PathBuf,
    },
    /// Build the panel and save it on the device once.
    Push {
        /// Configuration file.
        #[arg(long, short, default_value = "quickdocs.toml")]
        config: PathBuf,
    },
    /// Remove the panel from the device.
    Remove {
        /// Configuration file.
        #[arg(long, short, default_value = "quickdocs.toml")]
        config: PathBuf,
    },
    /// Print the generated panel markup.
    Render {
        /// Configuration file.
        #[arg(long, short, default_value = "quickdocs.toml")]
        config: PathBuf,
        /// Write the markup to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Check the configuration and list the panel's categories.
    Validate {
        /// Configuration file.
        #[arg(long, short, default_value = "quickdocs.toml")]
        config: PathBuf,
    },
    /// Decode a widget identifier and show the web view it would open.
    Route {
        /// Widget identifier as reported by the device.
        widget_id: String,
        /// Interaction type (pressed, released, clicked, changed).
        #[arg(long = "type", default_value = "released")]
        event_type: String,
        /// Configuration file providing QR settings (defaults apply when omitted).
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}
