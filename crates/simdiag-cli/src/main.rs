use anyhow::Context;
use clap::{Parser, Subcommand};
use simdiag_log::LogParser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simdiag")]
#[command(about = "Smart-contract simulation diagnostic tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a simulation failure message and emit JSON
    Parse {
        /// File holding the message; reads stdin when omitted or `-`
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
}

fn read_message(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut message = String::new();
            io::stdin()
                .read_to_string(&mut message)
                .context("failed to read stdin")?;
            Ok(message)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse { path, compact } => {
            let message = read_message(path.as_ref())?;
            let parsed = LogParser::new().parse(&message);
            log::info!(
                "recovered {} event log entries ({} failed)",
                parsed.event_log.len(),
                parsed.failed_events().count()
            );

            let json = if *compact {
                serde_json::to_string(&parsed)?
            } else {
                serde_json::to_string_pretty(&parsed)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
