mod analysis;
mod config;
mod display;
mod error;
mod report;
mod stats;
mod team;

use std::path::PathBuf;

use analysis::coverage::coverage;
use analysis::decision::{decide, implied_prob_pct, odd_for_side, pick_side, Side};
use analysis::scorer::score_match;
use clap::Parser;
use config::Config;
use display::output::{
    display_coverage, display_decision, display_error, display_info, display_scores,
    display_success, display_warning,
};
use error::AppError;
use report::Recommendation;
use stats::parse::parse_odd;
use stats::store::StoreSlot;
use team::Team;

#[derive(Parser, Debug)]
#[command(name = "Mega Decisor")]
#[command(about = "Score two LoL drafts and decide whether the odds justify a fixed-unit entry", long_about = None)]
struct Args {
    /// Blue-side draft: 5 champions, comma separated
    azul: String,

    /// Red-side draft: 5 champions, comma separated
    vermelho: String,

    /// Bookmaker odd for the blue side (e.g. 2,30)
    odd_azul: String,

    /// Bookmaker odd for the red side (e.g. 1,55)
    odd_vermelho: String,

    /// Workbook with the Winrate_vs / Winrate_with sheets
    /// (default: dados_mega_merged.xlsx in the working directory)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Show the pair-coverage diagnostic table
    #[arg(long)]
    coverage: bool,

    /// Print the full recommendation as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Units to stake when the rules say enter
    #[arg(long, default_value = "1.0")]
    units: f64,

    /// Currency value of one unit
    #[arg(long, default_value = "100.0")]
    unit_value: f64,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;

    // Boundary validation before touching the store
    let azul = Team::parse(&args.azul, "AZUL")?;
    let vermelho = Team::parse(&args.vermelho, "VERMELHO")?;
    let odd_azul =
        parse_odd(&args.odd_azul).ok_or_else(|| AppError::InvalidOdd(args.odd_azul.clone()))?;
    let odd_vermelho = parse_odd(&args.odd_vermelho)
        .ok_or_else(|| AppError::InvalidOdd(args.odd_vermelho.clone()))?;

    let mut slot = StoreSlot::empty();
    let store = slot.ensure_default(args.data.as_deref(), &config)?;

    if !args.json {
        display_success(&format!(
            "Base loaded: {} vs pairs, {} with pairs",
            store.vs_pairs(),
            store.with_pairs()
        ));
        if store.dirty_cells() > 0 {
            display_warning(&format!(
                "{} unreadable cells degraded to zero during the load",
                store.dirty_cells()
            ));
        }
        display_info(&format!("AZUL:     {}", azul.joined()));
        display_info(&format!("VERMELHO: {}", vermelho.joined()));
    }

    let score = score_match(store, &azul, &vermelho);

    let side = pick_side(score.pct_azul, score.pct_vermelho);
    let odd = odd_for_side(side, odd_azul, odd_vermelho);
    let implied = implied_prob_pct(odd);
    let model_pct = match side {
        Side::Azul => score.pct_azul,
        Side::Vermelho => score.pct_vermelho,
    };
    let edge_pp = implied.map(|p| model_pct - p);

    let verdict = decide(odd, score.gap_pp());

    let cov = coverage(store, &azul, &vermelho);
    let warning = cov.sample_warning(&config);

    if args.json {
        let rec = Recommendation {
            generated_at: chrono::Utc::now(),
            azul: azul.names().to_vec(),
            vermelho: vermelho.names().to_vec(),
            pct_azul: score.pct_azul,
            pct_vermelho: score.pct_vermelho,
            gap_pp: score.gap_pp(),
            side: side.to_string(),
            odd,
            implied_prob_pct: implied,
            edge_pp,
            enter: verdict.enter,
            reason: verdict.reason.clone(),
            stake_units: if verdict.enter { args.units } else { 0.0 },
            stake_value: if verdict.enter {
                args.units * args.unit_value
            } else {
                0.0
            },
            coverage: cov.coverage.clone(),
            sample_warning: warning,
            dirty_cells: store.dirty_cells(),
        };
        println!("{}", rec.to_json()?);
        return Ok(());
    }

    display_scores(&score, odd_azul, odd_vermelho);

    if args.coverage {
        display_coverage(&cov);
    }
    if let Some(w) = &warning {
        display_warning(&format!("Thin data: {}", w));
    }

    display_decision(side, odd, implied, edge_pp, &verdict, args.units, args.unit_value);

    Ok(())
}
