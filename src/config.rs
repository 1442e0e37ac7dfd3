use crate::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit workbook path, if set via MEGA_DATA_PATH.
    pub data_path: Option<PathBuf>,
    /// Coverage warning: minimum fraction of pairs that must be found.
    pub min_ratio: f64,
    /// Coverage warning: minimum median games across found pairs.
    pub min_median_games: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_path = env::var("MEGA_DATA_PATH").ok().map(PathBuf::from);

        let min_ratio = match env::var("MEGA_MIN_RATIO") {
            Ok(s) => s.parse::<f64>().map_err(|_| {
                AppError::ConfigError(format!("MEGA_MIN_RATIO is not a number: {}", s))
            })?,
            Err(_) => 0.70,
        };

        let min_median_games = match env::var("MEGA_MIN_MEDIAN_GAMES") {
            Ok(s) => s.parse::<f64>().map_err(|_| {
                AppError::ConfigError(format!("MEGA_MIN_MEDIAN_GAMES is not a number: {}", s))
            })?,
            Err(_) => 15.0,
        };

        Ok(Config {
            data_path,
            min_ratio,
            min_median_games,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: None,
            min_ratio: 0.70,
            min_median_games: 15.0,
        }
    }
}
