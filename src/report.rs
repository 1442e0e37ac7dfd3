use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::coverage::Coverage;
use crate::error::AppError;

/// Machine-readable version of everything the terminal output shows,
/// for piping into other tooling.
#[derive(Debug, Serialize)]
pub struct Recommendation {
    pub generated_at: DateTime<Utc>,
    pub azul: Vec<String>,
    pub vermelho: Vec<String>,
    pub pct_azul: f64,
    pub pct_vermelho: f64,
    pub gap_pp: f64,
    pub side: String,
    pub odd: f64,
    pub implied_prob_pct: Option<f64>,
    pub edge_pp: Option<f64>,
    pub enter: bool,
    pub reason: String,
    pub stake_units: f64,
    pub stake_value: f64,
    pub coverage: Coverage,
    pub sample_warning: Option<String>,
    pub dirty_cells: usize,
}

impl Recommendation {
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::JsonError(e.to_string()))
    }
}
