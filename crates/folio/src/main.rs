use std::io::stdout;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use color_eyre::eyre::{WrapErr, eyre};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::SetTitle,
};
use folio_config::Config;

mod app;
mod cli;
mod header;
mod layout;
mod logging;
mod pages;

use app::{App, AppOptions};
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init_tracing();

    if cli.write_config {
        return write_default_config(&cli);
    }

    let mut config = load_config(&cli);
    if let Some(interval) = cli.frame_interval_ms() {
        config.display.frame_interval_ms = interval;
    }
    let options = AppOptions {
        seed: cli.seed.unwrap_or_else(time_seed),
        route: cli.route.unwrap_or_default(),
        show_background: !cli.no_background,
    };
    tracing::info!(seed = options.seed, route = options.route.path(), "starting");

    let title = config.site.title.clone();
    let terminal = ratatui::init();
    if let Err(e) = execute!(stdout(), EnableMouseCapture, SetTitle(title)) {
        ratatui::restore();
        return Err(e).wrap_err("enabling mouse capture");
    }
    let result = App::new(config, options).run(terminal);
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        tracing::warn!("failed to disable mouse capture: {e}");
    }
    ratatui::restore();
    result
}

/// Load config from `--config` or the default path. Problems are logged and
/// the defaults are used, so a broken file never keeps the page from opening.
fn load_config(cli: &Cli) -> Config {
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|e| {
        tracing::warn!("{e}; using default configuration");
        Config::default()
    })
}

fn write_default_config(cli: &Cli) -> color_eyre::Result<()> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path().ok_or_else(|| eyre!("no config directory available"))?,
    };
    Config::default()
        .save_to(&path)
        .wrap_err("writing default configuration")?;
    println!("wrote {}", path.display());
    Ok(())
}

/// Seed from the wall clock when none was given.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
