//! Cellshade CLI - drive the ribbon commands against the in-memory host

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use cellshade::prelude::*;
use cellshade_host::MemoryHost;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cellshade")]
#[command(author, version, about = "Ribbon fill commands demo driver")]
struct Cli {
    /// Palette overrides as a JSON file (hex colors)
    #[arg(long, global = true)]
    palette: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch one ribbon action against a fresh sheet
    Run {
        /// Action wire name: fillYellow, fillOrange, fillGray, clearFill
        action: String,

        /// Selection as comma-separated A1 ranges (default: A1:B2)
        #[arg(short, long, default_value = "A1:B2")]
        select: String,
    },

    /// Print the effective palette
    Palette,

    /// List the action wire names
    Actions,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let palette = load_palette(cli.palette.as_deref())?;

    match cli.command {
        Commands::Run { action, select } => run(palette, &action, &select).await,
        Commands::Palette => {
            println!("yellow: {}", palette.yellow);
            println!("orange: {}", palette.orange);
            println!("gray:   {}", palette.gray);
            Ok(())
        }
        Commands::Actions => {
            for action in Action::ALL {
                println!("{action}");
            }
            Ok(())
        }
    }
}

fn load_palette(path: Option<&Path>) -> Result<Palette> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Invalid palette file '{}'", path.display()))
        }
        None => Ok(Palette::default()),
    }
}

async fn run(palette: Palette, action: &str, select: &str) -> Result<()> {
    let selection: Selection = select
        .parse()
        .with_context(|| format!("Invalid selection '{select}'"))?;

    let host = Arc::new(MemoryHost::new());
    host.set_selection(selection);

    let ribbon = Ribbon::new(host.clone()).with_palette(palette);
    let (event, probe) = CommandEvent::new();
    ribbon.dispatch_named(action, event).await;

    let mut filled = host.filled_cells();
    filled.sort_by_key(|(addr, _)| (addr.row, addr.col));

    if filled.is_empty() {
        println!("no filled cells");
    } else {
        for (addr, fill) in filled {
            println!("{addr} = {fill}");
        }
    }
    eprintln!(
        "completed: {} (signals: {}), flushes: {}",
        probe.completed(),
        probe.count(),
        host.flush_count()
    );

    Ok(())
}
