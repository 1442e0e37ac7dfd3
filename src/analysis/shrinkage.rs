/// Global baseline win rate the shrinkage pulls toward.
pub const MU_GLOBAL: f64 = 0.50;
/// Prior strength in virtual games.
pub const K_PRIOR: f64 = 30.0;
/// Hard ceiling on a single pair's aggregation weight.
pub const WEIGHT_CAP: f64 = 50.0;

/// Shrunk win probability: `(wins + k*mu) / (games + k)`.
/// A 2-game 100% pair lands near the baseline instead of at 1.0;
/// large samples converge to the raw rate. Negative inputs clamp to zero.
pub fn shrink_prob(wins: f64, games: f64, mu: f64, k: f64) -> f64 {
    let wins = wins.max(0.0);
    let games = games.max(0.0);
    (wins + k * mu) / (games + k)
}

pub fn shrink(wins: f64, games: f64) -> f64 {
    shrink_prob(wins, games, MU_GLOBAL, K_PRIOR)
}

/// Aggregation weight: `min(sqrt(games), cap)`. Sub-linear so one giant
/// sample cannot drown the rest of the draft.
pub fn weight_from_games(games: f64) -> f64 {
    games.max(0.0).sqrt().min(WEIGHT_CAP)
}
