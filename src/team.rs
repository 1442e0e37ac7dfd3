use crate::error::AppError;

pub const TEAM_SIZE: usize = 5;

/// A 5-champion draft, kept as the raw names the caller typed.
/// Normalization happens at lookup time, not here.
#[derive(Debug, Clone)]
pub struct Team {
    names: Vec<String>,
}

impl Team {
    /// Parses a comma-separated champion list ("Shen, Vi, Syndra, Smolder, Nautilus").
    /// Empty entries are dropped before the size check.
    pub fn parse(raw: &str, side: &'static str) -> Result<Self, AppError> {
        let names: Vec<String> = raw
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        if names.len() != TEAM_SIZE {
            return Err(AppError::InvalidTeamSize {
                side,
                got: names.len(),
            });
        }

        Ok(Team { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn joined(&self) -> String {
        self.names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_five_champs() {
        let team = Team::parse("Shen, Vi, Syndra, Smolder, Nautilus", "AZUL").unwrap();
        assert_eq!(team.names().len(), 5);
        assert_eq!(team.names()[0], "Shen");
        assert_eq!(team.names()[4], "Nautilus");
    }

    #[test]
    fn test_parse_trims_and_drops_empty() {
        let team = Team::parse("a ,b, c ,, d, e,", "AZUL").unwrap();
        assert_eq!(team.names(), &["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_wrong_size_rejected() {
        let err = Team::parse("a, b, c, d", "VERMELHO").unwrap_err();
        match err {
            AppError::InvalidTeamSize { side, got } => {
                assert_eq!(side, "VERMELHO");
                assert_eq!(got, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
