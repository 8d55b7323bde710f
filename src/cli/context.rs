use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::forecast::ForecastEngine;
use crate::errors::AppResult;
use crate::models::TimeEntry;
use crate::store;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Everything a command handler needs, resolved once from flags and config.
#[derive(Debug)]
pub struct Context {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub entries_path: PathBuf,
    pub today: NaiveDate,
    pub test: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let config_path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);
        let cfg = Config::load_from(&config_path)?;

        let entries_path = expand_tilde(cli.entries.as_deref().unwrap_or(&cfg.entries_file));

        let today = match &cli.today {
            Some(s) => date::parse_date_strict(s)?,
            None => date::today(),
        };

        Ok(Self {
            cfg,
            config_path,
            entries_path,
            today,
            test: cli.test,
        })
    }

    pub fn engine(&self) -> AppResult<ForecastEngine> {
        Ok(ForecastEngine::new(self.cfg.forecast_params()?))
    }

    pub fn load_entries(&self) -> AppResult<Vec<TimeEntry>> {
        store::load_entries(&self.entries_path)
    }

    /// Horizon from the flag, or the configured default.
    pub fn future_days(&self, flag: Option<u32>) -> u32 {
        flag.unwrap_or(self.cfg.future_days)
    }
}
