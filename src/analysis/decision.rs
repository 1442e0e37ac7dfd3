use std::fmt;

pub const RULE_A_ODD_MIN: f64 = 2.00;
pub const RULE_A_PP_MIN: f64 = 2.0;

pub const RULE_B_ODD_MIN: f64 = 1.70;
pub const RULE_B_PP_MIN: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Azul,
    Vermelho,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Azul => write!(f, "AZUL"),
            Side::Vermelho => write!(f, "VERMELHO"),
        }
    }
}

/// The side the model favors; ties go to Azul.
pub fn pick_side(pct_azul: f64, pct_vermelho: f64) -> Side {
    if pct_azul >= pct_vermelho {
        Side::Azul
    } else {
        Side::Vermelho
    }
}

pub fn odd_for_side(side: Side, odd_azul: f64, odd_vermelho: f64) -> f64 {
    match side {
        Side::Azul => odd_azul,
        Side::Vermelho => odd_vermelho,
    }
}

/// Bookmaker break-even probability, in percent. None for odds at or
/// below 1.0 (no payout, nothing to evaluate).
pub fn implied_prob_pct(odd: f64) -> Option<f64> {
    if odd <= 1.0 {
        None
    } else {
        Some(100.0 / odd)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub enter: bool,
    pub reason: String,
}

impl Verdict {
    fn enter(reason: String) -> Self {
        Verdict { enter: true, reason }
    }

    fn skip(reason: String) -> Self {
        Verdict { enter: false, reason }
    }
}

/// Fixed entry rules, first match wins:
///   A) odd >= 2.00 and gap >= 2.0 pp
///   B) odd >= 1.70 and gap >= 3.0 pp
/// Skips carry the specific threshold that was missed, which is more
/// useful at the table than a bare "no".
pub fn decide(odd: f64, gap_pp: f64) -> Verdict {
    if odd <= 1.0 || !odd.is_finite() {
        return Verdict::skip("invalid odd (must be above 1.0)".to_string());
    }

    if odd >= RULE_A_ODD_MIN && gap_pp >= RULE_A_PP_MIN {
        return Verdict::enter(format!(
            "Rule A: odd >= {:.2} and gap >= {:.1} pp",
            RULE_A_ODD_MIN, RULE_A_PP_MIN
        ));
    }
    if odd >= RULE_B_ODD_MIN && gap_pp >= RULE_B_PP_MIN {
        return Verdict::enter(format!(
            "Rule B: odd >= {:.2} and gap >= {:.1} pp",
            RULE_B_ODD_MIN, RULE_B_PP_MIN
        ));
    }

    if odd < RULE_B_ODD_MIN {
        return Verdict::skip(format!("odd below {:.2}", RULE_B_ODD_MIN));
    }
    if odd < RULE_A_ODD_MIN && gap_pp < RULE_B_PP_MIN {
        return Verdict::skip(format!(
            "gap below {:.1} pp for odd under {:.2}",
            RULE_B_PP_MIN, RULE_A_ODD_MIN
        ));
    }
    if odd >= RULE_A_ODD_MIN && gap_pp < RULE_A_PP_MIN {
        return Verdict::skip(format!(
            "gap below {:.1} pp even with odd >= {:.2}",
            RULE_A_PP_MIN, RULE_A_ODD_MIN
        ));
    }

    Verdict::skip("does not meet the entry rules".to_string())
}
