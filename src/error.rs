use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Sheet '{sheet}': missing column(s) {missing:?}. Columns found: {found:?}. Hint: the sheet needs (campeao+champion) or (champion+{hint}), plus games and winrate")]
    Schema {
        sheet: String,
        missing: Vec<&'static str>,
        found: Vec<String>,
        hint: &'static str,
    },

    #[error("Workbook has no '{0}' sheet. Sheets found: {1:?}")]
    SheetNotFound(&'static str, Vec<String>),

    #[error("Could not find a data workbook. Tried: {0:?}. Place dados_mega_merged.xlsx in the working directory or pass --data")]
    DataNotFound(Vec<String>),

    #[error("Stat store not loaded, load a workbook first")]
    DataNotLoaded,

    #[error("Failed to read workbook: {0}")]
    Workbook(String),

    #[error("Team {side} needs exactly 5 champions, got {got}")]
    InvalidTeamSize { side: &'static str, got: usize },

    #[error("Invalid odd '{0}'. Use something like 2,30 or 1.8")]
    InvalidOdd(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON error: {0}")]
    JsonError(String),
}
