use crate::stats::store::StatStore;
use crate::team::Team;

use super::aggregate::{aggregate_vs, aggregate_with};

/// Normalized relative score per side, in percentage points summing to 100.
/// This is NOT a calibrated win probability; it only ranks the two drafts
/// against each other on the evidence in the store.
#[derive(Debug, Clone, Copy)]
pub struct MatchScore {
    pub pct_azul: f64,
    pub pct_vermelho: f64,
}

impl MatchScore {
    /// Signal strength: absolute gap between the sides, in points.
    pub fn gap_pp(&self) -> f64 {
        (self.pct_azul - self.pct_vermelho).abs()
    }
}

pub fn score_match(store: &StatStore, azul: &Team, vermelho: &Team) -> MatchScore {
    let vs_azul = aggregate_vs(store, azul, vermelho);
    let vs_vermelho = aggregate_vs(store, vermelho, azul);

    let with_azul = aggregate_with(store, azul);
    let with_vermelho = aggregate_with(store, vermelho);

    let score_azul = (vs_azul + with_azul) / 2.0;
    let score_vermelho = (vs_vermelho + with_vermelho) / 2.0;

    let total = score_azul + score_vermelho;
    if total <= 0.0 {
        return MatchScore {
            pct_azul: 50.0,
            pct_vermelho: 50.0,
        };
    }

    MatchScore {
        pct_azul: score_azul / total * 100.0,
        pct_vermelho: score_vermelho / total * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::store::{PairTable, StatStore};

    fn team(names: [&str; 5]) -> Team {
        Team::parse(&names.join(","), "AZUL").unwrap()
    }

    fn store(vs_rows: &[(&str, &str, f64, f64)], with_rows: &[(&str, &str, f64, f64)]) -> StatStore {
        let mut vs = PairTable::new();
        for (a, b, rate, games) in vs_rows {
            vs.add_row(a.to_string(), b.to_string(), *rate, *games);
        }
        let mut with = PairTable::new();
        for (a, b, rate, games) in with_rows {
            with.add_row(a.to_string(), b.to_string(), *rate, *games);
        }
        StatStore::from_tables(vs, with)
    }

    #[test]
    fn test_zero_evidence_is_fifty_fifty() {
        let s = store(&[], &[]);
        let score = score_match(&s, &team(["a", "b", "c", "d", "e"]), &team(["v", "w", "x", "y", "z"]));
        assert_eq!(score.pct_azul, 50.0);
        assert_eq!(score.pct_vermelho, 50.0);
        assert_eq!(score.gap_pp(), 0.0);
    }

    #[test]
    fn test_scores_sum_to_hundred() {
        let s = store(
            &[("a", "v", 0.62, 300.0), ("v", "a", 0.41, 300.0)],
            &[("a", "b", 0.57, 120.0), ("v", "w", 0.49, 80.0)],
        );
        let score = score_match(&s, &team(["a", "b", "c", "d", "e"]), &team(["v", "w", "x", "y", "z"]));
        assert!((score.pct_azul + score.pct_vermelho - 100.0).abs() < 1e-9);
        assert!(score.pct_azul > score.pct_vermelho);
    }

    #[test]
    fn test_vs_is_directional_not_complementary() {
        // only azul-vs-vermelho rows exist; the reverse direction has no
        // evidence and falls back to baseline instead of 1 - p
        let s = store(&[("a", "v", 0.70, 1000.0)], &[]);
        let azul = team(["a", "b", "c", "d", "e"]);
        let verm = team(["v", "w", "x", "y", "z"]);
        let score = score_match(&s, &azul, &verm);

        // azul side: (shrunk 0.7 + 0.5)/2, vermelho side: (0.5 + 0.5)/2
        assert!(score.pct_azul > 50.0);
        assert!(score.pct_azul < 70.0);
    }
}
