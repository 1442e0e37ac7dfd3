use colored::*;
use tabled::{settings::Style, Table, Tabled};

use crate::analysis::coverage::{CoverageReport, TableCoverage};
use crate::analysis::decision::{Side, Verdict};
use crate::analysis::scorer::MatchScore;

#[derive(Tabled)]
struct ScoreRow {
    side: String,
    #[tabled(rename = "p_model")]
    p_model: String,
    odd: String,
    #[tabled(rename = "p_house (impl.)")]
    implied: String,
}

#[derive(Tabled)]
struct CoverageRow {
    table: String,
    #[tabled(rename = "pairs found")]
    found: String,
    #[tabled(rename = "avg games")]
    mean: String,
    #[tabled(rename = "median games")]
    median: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

fn fmt_implied(implied: Option<f64>) -> String {
    match implied {
        Some(p) => format!("{:.2}%", p),
        None => "-".to_string(),
    }
}

pub fn display_scores(score: &MatchScore, odd_azul: f64, odd_vermelho: f64) {
    println!("\n{}", "🎮 Model score (p_model)".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows = vec![
        ScoreRow {
            side: "AZUL".to_string(),
            p_model: format!("{:.2}%", score.pct_azul),
            odd: format!("{:.2}", odd_azul),
            implied: fmt_implied(crate::analysis::decision::implied_prob_pct(odd_azul)),
        },
        ScoreRow {
            side: "VERMELHO".to_string(),
            p_model: format!("{:.2}%", score.pct_vermelho),
            odd: format!("{:.2}", odd_vermelho),
            implied: fmt_implied(crate::analysis::decision::implied_prob_pct(odd_vermelho)),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!(
        "\n{} {:.2} pp",
        "Gap (signal strength):".bold(),
        score.gap_pp()
    );
    println!(
        "{}",
        "Note: p_model is a normalized relative score, not a calibrated win probability".dimmed()
    );
}

pub fn display_coverage(report: &CoverageReport) {
    println!("\n{}", "📊 Pair coverage".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let row = |name: &str, c: &TableCoverage| CoverageRow {
        table: name.to_string(),
        found: format!("{}/{}", c.found, c.max),
        mean: format!("{:.1}", c.mean_games),
        median: format!("{:.1}", c.median_games),
    };

    let rows = vec![
        row("vs (cross pairs)", &report.coverage.vs),
        row("with AZUL", &report.coverage.with_azul),
        row("with VERMELHO", &report.coverage.with_vermelho),
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!(
        "\n• Overall: {:.0}% of pairs covered, median {:.0} games per found pair\n",
        report.found_ratio() * 100.0,
        report.median_games()
    );
}

pub fn display_decision(
    side: Side,
    odd: f64,
    implied: Option<f64>,
    edge_pp: Option<f64>,
    verdict: &Verdict,
    units: f64,
    unit_value: f64,
) {
    println!("\n{}", "💰 Decision".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    println!("  Side:        {}", side.to_string().bold());
    println!("  Odd used:    {:.2}", odd);
    println!("  p_house:     {}", fmt_implied(implied));
    match edge_pp {
        Some(e) => println!("  Edge vs odd: {:+.2} pp", e),
        None => println!("  Edge vs odd: -"),
    }
    println!();

    if verdict.enter && units > 0.0 {
        let win_profit = (odd - 1.0) * units;
        let lose_profit = -units;

        println!("{} {}", "✅ ENTER —".green().bold(), verdict.reason);
        println!(
            "  Stake:     {:.2}u ({})",
            units,
            format_brl(units * unit_value)
        );
        println!(
            "  If it wins:  {:+.2}u ({})",
            win_profit,
            format_brl(win_profit * unit_value)
        );
        println!(
            "  If it loses: {:+.2}u ({})",
            lose_profit,
            format_brl(lose_profit * unit_value)
        );
    } else {
        println!("{} {}", "❌ SKIP —".yellow().bold(), verdict.reason);
        println!("  Stake:     0u");
    }
    println!();
}

/// "1234.5" -> "R$ 1.234,50" (pt-BR separators).
fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!(
        "R$ {}{},{:02}",
        if negative { "-" } else { "" },
        grouped,
        frac
    )
}
