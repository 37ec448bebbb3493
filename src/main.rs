use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::ai::{Agent, GreedyAgent, MinimaxAgent, RandomAgent};
use connect_four::config::AppConfig;
use connect_four::ui::App;

/// Play Connect Four in the terminal against a computer opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Opponent policy: minimax, greedy, or random
    #[arg(long, default_value = "minimax")]
    opponent: String,

    /// Override search depth (plies)
    #[arg(long)]
    depth: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.opponent.as_str() {
        "minimax" | "greedy" | "random" => {}
        other => bail!("unknown opponent '{}' (expected 'minimax', 'greedy', or 'random')", other),
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.engine.search_depth = depth;
    }
    config.validate().context("validating configuration")?;

    let agent: Box<dyn Agent> = match cli.opponent.as_str() {
        "minimax" => Box::new(MinimaxAgent::new(config.engine.search_depth)),
        "greedy" => Box::new(GreedyAgent::new()),
        "random" => Box::new(RandomAgent::new()),
        _ => unreachable!(),
    };

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let mut app = App::new(&config, agent);
    let res = app.run(&mut terminal);

    // Restore terminal; runs even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.map_err(Into::into)
}
