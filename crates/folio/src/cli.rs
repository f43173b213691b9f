//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use folio_core::Route;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "A personal portfolio page for the terminal")]
pub struct Cli {
    /// Read configuration from this file instead of the default location.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with the animated background hidden.
    #[arg(long)]
    pub no_background: bool,

    /// Target frames per second; overrides `display.frame_interval_ms`.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: Option<u32>,

    /// Seed for the particle and noise layers.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Page to open, e.g. `/projects`.
    #[arg(long, value_parser = parse_route)]
    pub route: Option<Route>,

    /// Write the default configuration to the config path and exit.
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Frame interval implied by `--fps`, if given.
    pub fn frame_interval_ms(&self) -> Option<u64> {
        self.fps.map(|fps| (1000 / u64::from(fps)).max(1))
    }
}

fn parse_route(value: &str) -> Result<Route, String> {
    Route::from_path(value).ok_or_else(|| {
        let known: Vec<&str> = Route::ALL.iter().map(|r| r.path()).collect();
        format!("unknown route `{value}` (expected one of {})", known.join(", "))
    })
}
