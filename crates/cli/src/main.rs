use clap::Parser;
use greeter_core::demo::run;
use greeter_core::types::{DemoConfig, OutputFormat};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "greeter",
    version,
    about = "Prints a greeting, then the same greeting in several languages"
)]
struct Cli {
    /// Emit one JSON object per greeting instead of plain text.
    #[arg(long)]
    json: bool,
    /// Log lookups and fallbacks to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::JsonLines
        } else {
            OutputFormat::Plain
        }
    }

    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    greet(&mut out, &cli)
}

fn greet<W: Write>(out: &mut W, cli: &Cli) -> anyhow::Result<()> {
    let cfg = DemoConfig::default();
    debug!(codes = ?cfg.codes, "starting greeting demo");
    run(out, &cfg, cli.format())
}

/// Logs go to stderr so stdout carries only greetings.
fn init_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
