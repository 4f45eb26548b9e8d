use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use flashdrill_lib::config::DrillConfig;
use flashdrill_lib::drill::{
    Clock, Deck, DrillSession, FileStateStore, FixedClock, MemoryStateStore, StateStore,
    SystemClock,
};
use flashdrill_lib::host::EnvHost;

pub type Session = DrillSession<Box<dyn StateStore>, Box<dyn Clock>>;

/// Global command-line options shared by every command
pub struct Options {
    pub config_path: Option<PathBuf>,
    pub today: Option<NaiveDate>,
    pub seed: Option<u64>,
    pub ephemeral: bool,
}

/// Shared application state for CLI commands
pub struct App {
    pub config: DrillConfig,
    pub session: Session,
}

impl App {
    pub fn new(options: &Options) -> Result<Self> {
        let config = load_config(options)?;

        let deck = match &config.deck_path {
            Some(path) => Deck::load(path)
                .with_context(|| format!("Failed to load deck from {}", path.display()))?,
            None => Deck::bundled(),
        };

        let store: Box<dyn StateStore> = if options.ephemeral {
            Box::new(MemoryStateStore::new())
        } else {
            let data_dir = config
                .resolved_data_dir()
                .context("Failed to get data directory")?;
            Box::new(FileStateStore::new(data_dir, config.storage_key.clone()))
        };

        let clock: Box<dyn Clock> = match options.today {
            Some(date) => Box::new(FixedClock::new(date)),
            None => Box::new(SystemClock),
        };

        let session = match options.seed {
            Some(seed) => DrillSession::with_rng(deck, store, clock, StdRng::seed_from_u64(seed)),
            None => DrillSession::initialize(deck, store, clock),
        };

        Ok(Self { config, session })
    }

    /// Host integration configured for this app
    pub fn host(&self) -> EnvHost {
        EnvHost::new(self.config.host_env_var.clone())
    }
}

/// Load config from `--config` or the default location
pub fn load_config(options: &Options) -> Result<DrillConfig> {
    match &options.config_path {
        Some(path) => DrillConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => DrillConfig::load_default().context("Failed to load config"),
    }
}
