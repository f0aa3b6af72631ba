use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use tabwin_logging::{LogDestination, LogSettings};

/// Replays a scripted browser session and prints the resulting windows.
#[derive(Parser, Debug)]
#[command(name = "tabwin-replay")]
#[command(about = "Replay browser tab/window events against saved bookmark folders")]
struct Args {
    /// JSON script with `folders` and `events`
    script: PathBuf,

    /// Maximum log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = parse_level)]
    log_level: LevelFilter,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    raw.parse()
        .map_err(|_| format!("unknown log level {raw:?}"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    tabwin_logging::initialize(&LogSettings {
        level: args.log_level,
        destination: match args.log_file {
            Some(path) => LogDestination::Both(path),
            None => LogDestination::Terminal,
        },
    });

    let script = tabwin_replay::load_script(&args.script)?;
    let store = tabwin_replay::replay(script);
    println!("{}", tabwin_replay::render(&store)?);
    Ok(())
}
