mod playback;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use playback::{PlaybackScript, Player, demo_script};
use rill_core::{Config, logging};
use rill_ui::App;

/// Rill - a streaming conversation display for the terminal
#[derive(Parser, Debug)]
#[command(name = "rill")]
#[command(about = "Plays a chat transcript with progressive reveal and viewport auto-follow", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Conversation script to play (JSON); the built-in demo runs without one
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Path to rill.toml (defaults are used when absent)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Session title shown in the header
    #[arg(short, long, value_name = "TITLE")]
    title: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref()).context("loading configuration")?;
    logging::init_logging(Some(config.logging.clone().into())).context("initializing logging")?;

    let script = match &cli.script {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading script {}", path.display()))?;
            PlaybackScript::from_json(&raw).with_context(|| format!("parsing script {}", path.display()))?
        }
        None => demo_script(),
    };

    let title = cli
        .title
        .or_else(|| script.title.clone())
        .unwrap_or_else(|| "rill".to_string());

    tokio::runtime::Runtime::new()
        .context("starting runtime")?
        .block_on(play(config, script, title))
}

async fn play(config: Config, script: PlaybackScript, title: String) -> Result<()> {
    let (updates_tx, updates_rx) = mpsc::unbounded_channel();
    let (regenerate_tx, regenerate_rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    let player = Player::new(updates_tx);
    let feed = tokio::spawn(player.run(script, regenerate_rx, cancel.clone()));

    let mut app = App::new(&config.display, title, updates_rx, regenerate_tx);
    let result = rill_ui::app::run(&mut app).await;

    cancel.cancel();
    let _ = feed.await;

    result.context("running the display")
}
