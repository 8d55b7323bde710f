use crate::core::forecast::{DEFAULT_FUTURE_DAYS, ForecastParams, MAX_HORIZON_DAYS};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::time::{minutes_of_day, parse_time_strict};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_entries_file")]
    pub entries_file: String,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_min_weekday_samples")]
    pub min_weekday_samples: usize,
    #[serde(default = "default_history_days")]
    pub history_days: u32,
    #[serde(default = "default_future_days")]
    pub future_days: u32,
    #[serde(default = "default_horizon_growth")]
    pub horizon_growth: f64,
    #[serde(default = "default_work_minutes")]
    pub default_work_minutes: u32,
    #[serde(default = "default_break_minutes")]
    pub default_break_minutes: u32,
    #[serde(default = "default_departure")]
    pub default_departure: String,
    #[serde(default = "default_clock_in")]
    pub default_clock_in: String,
    #[serde(default)]
    pub show_weekday: bool,
}

fn default_entries_file() -> String {
    Config::entries_file_path().to_string_lossy().to_string()
}
fn default_alpha() -> f64 {
    0.35
}
fn default_min_weekday_samples() -> usize {
    3
}
fn default_history_days() -> u32 {
    30
}
fn default_future_days() -> u32 {
    DEFAULT_FUTURE_DAYS
}
fn default_horizon_growth() -> f64 {
    0.15
}
fn default_work_minutes() -> u32 {
    480
}
fn default_break_minutes() -> u32 {
    45
}
fn default_departure() -> String {
    "17:30".to_string()
}
fn default_clock_in() -> String {
    "09:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entries_file: default_entries_file(),
            alpha: default_alpha(),
            min_weekday_samples: default_min_weekday_samples(),
            history_days: default_history_days(),
            future_days: default_future_days(),
            horizon_growth: default_horizon_growth(),
            default_work_minutes: default_work_minutes(),
            default_break_minutes: default_break_minutes(),
            default_departure: default_departure(),
            default_clock_in: default_clock_in(),
            show_weekday: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rtimecast`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rtimecast")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimecast.conf")
    }

    /// Return the default path of the entries file
    pub fn entries_file_path() -> PathBuf {
        Self::config_dir().join("entries.json")
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Validate the tuning values and turn them into engine parameters
    pub fn forecast_params(&self) -> AppResult<ForecastParams> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(AppError::Config(format!(
                "alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        if self.min_weekday_samples == 0 {
            return Err(AppError::Config(
                "min_weekday_samples must be at least 1".into(),
            ));
        }
        for (key, days) in [("history_days", self.history_days), ("future_days", self.future_days)] {
            if days > MAX_HORIZON_DAYS {
                return Err(AppError::Config(format!(
                    "{key} must be at most {MAX_HORIZON_DAYS}, got {days}"
                )));
            }
        }
        if self.horizon_growth < 0.0 {
            return Err(AppError::Config(format!(
                "horizon_growth must not be negative, got {}",
                self.horizon_growth
            )));
        }

        Ok(ForecastParams {
            alpha: self.alpha,
            min_weekday_samples: self.min_weekday_samples,
            history_days: self.history_days,
            horizon_growth: self.horizon_growth,
            default_work_minutes: self.default_work_minutes as f64,
            default_break_minutes: self.default_break_minutes as f64,
            default_departure_minutes: minutes_of_day(parse_time_strict(&self.default_departure)?),
            default_clock_in_minutes: minutes_of_day(parse_time_strict(&self.default_clock_in)?),
        })
    }

    /// Initialize the configuration file and an empty entries file
    pub fn init_all(config_path: &Path, entries_override: Option<&Path>, is_test: bool) -> AppResult<Self> {
        let mut config = Config::default();
        if let Some(p) = entries_override {
            config.entries_file = p.to_string_lossy().to_string();
        }

        if !is_test {
            config.save_to(config_path)?;
            success(format!("Config file:  {}", config_path.display()));
        }

        let entries = PathBuf::from(&config.entries_file);
        if !entries.exists() {
            if let Some(dir) = entries.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(&entries, "[]\n")?;
        }
        success(format!("Entries file: {}", entries.display()));

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_engine_defaults() {
        let params = Config::default().forecast_params().unwrap();
        assert_eq!(params, ForecastParams::default());
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let cfg: Config = serde_yaml::from_str("alpha: 0.5\nfuture_days: 14\n").unwrap();
        assert_eq!(cfg.alpha, 0.5);
        assert_eq!(cfg.future_days, 14);
        assert_eq!(cfg.min_weekday_samples, 3);
        assert_eq!(cfg.default_departure, "17:30");
    }

    #[test]
    fn rejects_bad_tuning() {
        let cfg = Config {
            alpha: 0.0,
            ..Config::default()
        };
        assert!(matches!(cfg.forecast_params(), Err(AppError::Config(_))));

        let cfg = Config {
            default_departure: "5pm".into(),
            ..Config::default()
        };
        assert!(matches!(cfg.forecast_params(), Err(AppError::InvalidTime(_))));
    }

    #[test]
    fn rejects_oversized_windows() {
        let cfg = Config {
            history_days: MAX_HORIZON_DAYS + 1,
            ..Config::default()
        };
        assert!(matches!(cfg.forecast_params(), Err(AppError::Config(m)) if m.contains("history_days")));

        let cfg = Config {
            future_days: u32::MAX,
            ..Config::default()
        };
        assert!(matches!(cfg.forecast_params(), Err(AppError::Config(m)) if m.contains("future_days")));

        let cfg = Config {
            history_days: MAX_HORIZON_DAYS,
            future_days: MAX_HORIZON_DAYS,
            ..Config::default()
        };
        assert!(cfg.forecast_params().is_ok());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("rtimecast_missing_config_test.conf");
        std::fs::remove_file(&path).ok();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
