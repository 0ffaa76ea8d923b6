//! Roller CLI
//!
//! Render rolling-number widgets to HTML and preview value changes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use roller_animation::Easing;
use roller_widget::{RollingNumber, RollingNumberDefaults, RollingNumberProps, WidgetConfig};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod report;

#[derive(Parser)]
#[command(name = "roller")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rolling-number widget CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Widget config file (defaults to ./roller.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the HTML markup for a value
    Render {
        /// Value to display
        #[arg(allow_negative_numbers = true)]
        value: i32,

        #[command(flatten)]
        widget: WidgetArgs,
    },

    /// List the easing presets
    Presets,

    /// Show which reels move when the value changes
    Roll {
        /// Value before the change
        #[arg(allow_negative_numbers = true)]
        from: i32,

        /// Value after the change
        #[arg(allow_negative_numbers = true)]
        to: i32,

        /// Also print the markup after the change
        #[arg(long)]
        html: bool,

        #[command(flatten)]
        widget: WidgetArgs,
    },
}

#[derive(Args)]
struct WidgetArgs {
    /// Left-pad with blank slots up to this many digits
    #[arg(short, long)]
    min_digits: Option<i32>,

    /// CSS transition duration (e.g. 0.5s, 300ms)
    #[arg(short, long)]
    duration: Option<String>,

    /// Easing preset name or CSS timing function
    #[arg(short, long)]
    easing: Option<String>,
}

impl WidgetArgs {
    fn props(&self, value: i32, defaults: &RollingNumberDefaults) -> RollingNumberProps {
        let mut props = RollingNumberProps::new(value);
        if let Some(minimum_digits) = self.min_digits {
            props = props.minimum_digits(minimum_digits);
        }
        if let Some(duration) = &self.duration {
            props = props.duration(duration.as_str());
        }
        if let Some(easing) = &self.easing {
            props = props.easing(Easing::resolve(easing));
        }
        props.with_defaults(defaults)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let defaults = load_defaults(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { value, widget } => cmd_render(value, &widget, &defaults),
        Commands::Presets => cmd_presets(),
        Commands::Roll {
            from,
            to,
            html,
            widget,
        } => cmd_roll(from, to, html, &widget, &defaults),
    }
}

fn load_defaults(path: Option<&Path>) -> Result<RollingNumberDefaults> {
    let config = match path {
        Some(path) => WidgetConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => WidgetConfig::load_from_dir(Path::new("."))
            .context("Failed to load roller.toml")?,
    };
    debug!(?config, "widget defaults");
    Ok(config.rolling_number)
}

fn cmd_render(value: i32, args: &WidgetArgs, defaults: &RollingNumberDefaults) -> Result<()> {
    let widget = RollingNumber::new(args.props(value, defaults));
    debug!(slots = widget.slots().len(), "rendering {}", value);
    println!("{}", widget.render());
    Ok(())
}

fn cmd_presets() -> Result<()> {
    print!("{}", report::presets_table());
    Ok(())
}

fn cmd_roll(
    from: i32,
    to: i32,
    html: bool,
    args: &WidgetArgs,
    defaults: &RollingNumberDefaults,
) -> Result<()> {
    let mut widget = RollingNumber::new(args.props(from, defaults));
    let before = widget.slots().to_vec();

    let outcome = widget.set_parameters(args.props(to, defaults));
    info!("{:?}", outcome);

    print!("{}", report::roll_report(&before, &widget, outcome));
    if html {
        println!("{}", widget.render());
    }
    Ok(())
}
