//! `ohfmt` CLI — render and group parsed opening_hours rules from the command line.
//!
//! Rules are read as a JSON array (the structured output of an opening_hours
//! parser) and written back as opening_hours text.
//!
//! ## Usage
//!
//! ```sh
//! # Render rules to a canonical opening_hours string (stdin → stdout)
//! cat rules.json | ohfmt render
//!
//! # Annotated debug rendering from file to file
//! ohfmt render --debug -i rules.json -o rules.txt
//!
//! # Show rules that can be merged for display, one group per line
//! ohfmt groups -i rules.json
//!
//! # Same, as a JSON array of rule arrays
//! ohfmt groups --json -i rules.json
//!
//! # List month names
//! ohfmt months
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use opening_hours_core::{get_mergeable_rules, render_rules, rules_from_json, Month, RenderMode};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "ohfmt",
    version,
    about = "Render and group opening_hours rules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    logging: LoggingArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON rule list as an opening_hours string
    Render {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Use the annotated debug form for each rule
        #[arg(long)]
        debug: bool,
    },
    /// Show groups of rules that only differ in their days and times
    Groups {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Use the annotated debug form for each rule
        #[arg(long, conflicts_with = "json")]
        debug: bool,
        /// Emit the groups as a JSON array of rule arrays
        #[arg(long)]
        json: bool,
    },
    /// List the month names used in date selectors
    Months,
}

/// Logging verbosity flags.
#[derive(Args)]
struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

impl LoggingArgs {
    /// Initialise `env_logger`.
    ///
    /// Defaults to `warn`, then applies `OHFMT_LOG`, then `-q` or the `-v`
    /// count (`info`, `debug`, `trace`).
    fn init(&self) {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(log::LevelFilter::Warn);
        builder.parse_env("OHFMT_LOG");

        if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.logging.init();

    match cli.command {
        Commands::Render {
            input,
            output,
            debug,
        } => {
            let rules = load_rules(input.as_deref())?;
            let text = render_rules(&rules, render_mode(debug));
            write_output(output.as_deref(), &text)?;
        }
        Commands::Groups {
            input,
            output,
            debug,
            json,
        } => {
            let rules = load_rules(input.as_deref())?;
            let groups = get_mergeable_rules(&rules);
            log::info!("{} rules form {} groups", rules.len(), groups.len());

            let text = if json {
                serde_json::to_string_pretty(&groups).context("Failed to serialize groups")?
            } else {
                let mode = render_mode(debug);
                groups
                    .iter()
                    .map(|group| render_rules(group.iter().copied(), mode))
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            write_output(output.as_deref(), &text)?;
        }
        Commands::Months => {
            println!("{}", Month::name_values().join(" "));
        }
    }

    Ok(())
}

fn render_mode(debug: bool) -> RenderMode {
    if debug {
        RenderMode::Debug
    } else {
        RenderMode::Canonical
    }
}

fn load_rules(path: Option<&str>) -> Result<Vec<opening_hours_core::Rule>> {
    let json = read_input(path)?;
    let rules = rules_from_json(&json).context("Failed to load rules from JSON")?;
    log::info!("Loaded {} rules", rules.len());
    Ok(rules)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
