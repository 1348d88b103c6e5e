use clap::{Parser, Subcommand};
use hilo::core::config::{self, ResolvedConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hilo", version, about = "Hi-Lo card counting practice")]
struct Args {
    /// Config file to use instead of ~/.hilo/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Deal cards one at a time and keep the running count
    Count {
        /// Fixed shuffle seed for a reproducible deal order
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let Command::Count { seed } = args.command.unwrap_or(Command::Count { seed: None });

    let file_config = config::load_config(args.config.as_deref())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let resolved = config::resolve(&file_config, seed);

    init_logging(&resolved);
    log::info!("Hilo starting up (seed: {:?})", resolved.seed);

    hilo::tui::run(&resolved)
}

/// File logger; the terminal belongs to the TUI, so nothing goes to stdout.
fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}
