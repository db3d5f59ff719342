use clap::Parser;
use randwalk_config::{load_config, Config, ConfigError};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Random walkers on a bounded ASCII field", long_about = None)]
pub struct Args {
    /// Path to a JSON or TOML scenario file (defaults to the built-in 10x10 scenario)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stop after this many ticks instead of running until interrupted
    #[arg(short, long)]
    pub ticks: Option<u64>,

    /// Fixed RNG seed, overrides the scenario's seed
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Scenario to run: the config file if given, else the defaults, with
    /// command-line overrides applied.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };

        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}
