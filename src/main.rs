use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use html5form::config::Config;
use html5form::form::FormState;
use html5form::logging::init_tracing;
use html5form::replay::{load_snapshot, replay};
use html5form::store::FormStore;

/// Replay a log of form validation actions and print the resulting state.
#[derive(Debug, Parser)]
#[command(name = "html5form", version)]
struct Cli {
    /// Newline-delimited JSON actions; `-` reads stdin.
    #[arg(default_value = "-")]
    actions: PathBuf,

    /// Config file (default: ~/.config/html5form/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON state snapshot to start from.
    #[arg(long)]
    initial_state: Option<PathBuf>,

    /// Abort on the first line that fails to decode.
    #[arg(long)]
    strict: bool,

    /// Print the state on a single line.
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.initial_state.is_some() {
        config.replay.initial_state = cli.initial_state.clone();
    }
    if cli.strict {
        config.replay.skip_invalid = false;
    }
    if cli.compact {
        config.output.pretty = false;
    }
    config.validate()?;

    let initial = match &config.replay.initial_state {
        Some(path) => load_snapshot(path)?,
        None => FormState::default(),
    };
    let store = FormStore::new(initial);

    let reader: Box<dyn BufRead> = if cli.actions.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&cli.actions)
            .with_context(|| format!("Failed to open '{}'", cli.actions.display()))?;
        Box::new(BufReader::new(file))
    };
    replay(&store, reader, config.replay.skip_invalid)?;

    let state = store.get();
    let rendered = if config.output.pretty {
        serde_json::to_string_pretty(&state)?
    } else {
        serde_json::to_string(&state)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    Ok(())
}
