use clap::{Parser, Subcommand};

use crate::commands;
use crate::config::Settings;
use crate::error::CliError;

#[derive(Parser)]
#[command(
    name = "keycanvas",
    about = "KeyCanvas: visual mnemonics for Bitcoin addresses",
    version
)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the current address and its visual mnemonic
    Address {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a new current address
    #[command(alias = "refresh")]
    Generate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the visual mnemonic for any address
    Pattern {
        /// Address to derive the pattern for
        address: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare an address against the current one
    Compare {
        /// Address to compare (prompted for when omitted)
        #[arg(long, conflicts_with = "example")]
        with: Option<String>,
        /// Base address (defaults to the current address)
        #[arg(long)]
        base: Option<String>,
        /// Compare against the current address as an example
        #[arg(long)]
        example: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Share an address: message, link and QR code
    Share {
        /// Address to share (defaults to the current address)
        #[arg(long)]
        address: Option<String>,
        /// Save the QR code as a BMP image in this directory
        #[arg(long)]
        save: Option<String>,
        /// Pixels per QR module for the saved image
        #[arg(long, default_value = "8")]
        pixels: u8,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open a shared address link or raw address
    Open {
        /// Share link (…/share/<ADDRESS>) or address
        link: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Gallery of sample addresses and their mnemonics
    Gallery {
        /// Additional freshly generated addresses to show
        #[arg(long, default_value = "0")]
        count: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get or set CLI configuration
    Config {
        /// Set the base URL used for share links
        #[arg(long)]
        share_base_url: Option<String>,
        /// Enable or disable colored output
        #[arg(long)]
        color: Option<bool>,
        /// Restore default settings (forgets the current address)
        #[arg(long)]
        reset: bool,
        /// Show current config as JSON
        #[arg(long)]
        json: bool,
    },
    /// About KeyCanvas
    About,
}

impl Command {
    /// Commands that never read or write the current address.
    pub fn is_stateless(&self) -> bool {
        matches!(
            self,
            Command::Pattern { .. } | Command::Open { .. } | Command::Gallery { .. }
        )
    }
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    let mut settings = if cli.command.is_stateless() {
        Settings::peek()
    } else {
        match Settings::load() {
            Ok(settings) => settings,
            Err(CliError::Config(reason))
                if matches!(cli.command, Command::Config { reset: true, .. }) =>
            {
                tracing::warn!(%reason, "ignoring unreadable settings before reset");
                Settings::default()
            }
            Err(e) => return Err(e),
        }
    };
    if cli.plain || !settings.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match cli.command {
        Command::Address { json } => commands::address::run(&mut settings, json),
        Command::Generate { json } => commands::generate::run(&mut settings, json),
        Command::Pattern { address, json } => commands::pattern::run(&address, json),
        Command::Compare {
            with,
            base,
            example,
            json,
        } => commands::compare::run(&mut settings, with, base.as_deref(), example, json),
        Command::Share {
            address,
            save,
            pixels,
            json,
        } => commands::share::run(
            &mut settings,
            address.as_deref(),
            save.as_deref(),
            pixels,
            json,
        ),
        Command::Open { link, json } => commands::open::run(&link, json),
        Command::Gallery { count, json } => commands::gallery::run(count, json),
        Command::Config {
            share_base_url,
            color,
            reset,
            json,
        } => commands::config_cmd::run(
            &mut settings,
            share_base_url.as_deref(),
            color,
            reset,
            json,
        ),
        Command::About => commands::about::run(&mut settings),
    }
}
