use serde::Serialize;

use crate::config::Config;
use crate::stats::store::StatStore;
use crate::team::Team;

/// How much of a matchup's theoretical pair space the store actually
/// covers. A recommendation on 3 of 25 matchup pairs is worth warning about.
#[derive(Debug, Clone, Serialize)]
pub struct TableCoverage {
    pub found: usize,
    pub max: usize,
    pub mean_games: f64,
    pub median_games: f64,
}

impl TableCoverage {
    fn from_samples(samples: Vec<f64>, max: usize) -> Self {
        let found = samples.len();
        let mean = if found == 0 {
            0.0
        } else {
            samples.iter().sum::<f64>() / found as f64
        };
        TableCoverage {
            found,
            max,
            mean_games: mean,
            median_games: median(samples),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Coverage {
    pub vs: TableCoverage,
    pub with_azul: TableCoverage,
    pub with_vermelho: TableCoverage,
}

/// Full diagnostic snapshot for one matchup, with the raw game counts kept
/// so the pooled warning can use a true median.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub coverage: Coverage,
    samples: Vec<f64>,
}

impl CoverageReport {
    /// Fraction of the 45 theoretical pairs (25 cross + 10 per draft)
    /// with any evidence.
    pub fn found_ratio(&self) -> f64 {
        let c = &self.coverage;
        let found = c.vs.found + c.with_azul.found + c.with_vermelho.found;
        let max = c.vs.max + c.with_azul.max + c.with_vermelho.max;
        found as f64 / max as f64
    }

    pub fn median_games(&self) -> f64 {
        median(self.samples.clone())
    }

    /// Thin-data warning per the configured thresholds. None means the
    /// evidence base looks healthy enough to act on.
    pub fn sample_warning(&self, config: &Config) -> Option<String> {
        let ratio = self.found_ratio();
        let median_games = self.median_games();

        let mut problems = Vec::new();
        if ratio < config.min_ratio {
            problems.push(format!(
                "only {:.0}% of champion pairs have data (minimum {:.0}%)",
                ratio * 100.0,
                config.min_ratio * 100.0
            ));
        }
        if median_games < config.min_median_games {
            problems.push(format!(
                "median sample is {:.0} games per pair (minimum {:.0})",
                median_games, config.min_median_games
            ));
        }

        if problems.is_empty() {
            None
        } else {
            Some(problems.join("; "))
        }
    }
}

/// Scans the same pair space the scorer aggregates over and records which
/// pairs the store knows about. Cross pairs count as covered when either
/// direction has evidence; their games are summed across directions.
pub fn coverage(store: &StatStore, azul: &Team, vermelho: &Team) -> CoverageReport {
    let mut vs_samples = Vec::new();
    for a in azul.names() {
        for b in vermelho.names() {
            let forward = store.vs_stat(a, b);
            let reverse = store.vs_stat(b, a);
            let games = forward.map(|s| s.games).unwrap_or(0.0)
                + reverse.map(|s| s.games).unwrap_or(0.0);
            if forward.is_some() || reverse.is_some() {
                vs_samples.push(games);
            }
        }
    }

    let with_azul_samples = with_samples(store, azul);
    let with_vermelho_samples = with_samples(store, vermelho);

    let mut samples = Vec::new();
    samples.extend(vs_samples.iter().copied());
    samples.extend(with_azul_samples.iter().copied());
    samples.extend(with_vermelho_samples.iter().copied());

    CoverageReport {
        coverage: Coverage {
            vs: TableCoverage::from_samples(vs_samples, 25),
            with_azul: TableCoverage::from_samples(with_azul_samples, 10),
            with_vermelho: TableCoverage::from_samples(with_vermelho_samples, 10),
        },
        samples,
    }
}

fn with_samples(store: &StatStore, team: &Team) -> Vec<f64> {
    let names = team.names();
    let mut samples = Vec::new();
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            if let Some(stat) = store.with_stat(&names[i], &names[j]) {
                samples.push(stat.games);
            }
        }
    }
    samples
}

fn median(mut samples: Vec<f64>) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = samples.len() / 2;
    if samples.len() % 2 == 1 {
        samples[mid]
    } else {
        (samples[mid - 1] + samples[mid]) / 2.0
    }
}
