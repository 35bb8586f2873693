use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "dynamic-app", version, about = "Server-rendered counter and dark-mode demo")]
pub struct Cli {
    /// Path to config.toml (defaults to the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override server.bind_addr (host:port)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Verbose logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Load the configured file and apply command line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(bind) = &self.bind {
            config.server.bind_addr = bind.clone();
            config.validate()?;
        }
        Ok(())
    }
}
