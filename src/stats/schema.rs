use crate::error::AppError;

/// Header/sheet name normalization: case, surrounding space and
/// space-vs-hyphen-vs-underscore differences are all ignored.
pub fn norm_name(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace('-', "_")
}

/// Ordered alias candidates per logical column, most specific first.
const BASE_ALIASES: &[&str] = &[
    "campeao",
    "champion_a",
    "champion1",
    "champion_1",
    "champion",
    "champ",
    "champion_name",
    "champ_name",
    "character",
    "hero",
];

const VS_ALIASES: &[&str] = &[
    "vs",
    "against",
    "opponent",
    "enemy",
    "versus",
    "matchup",
    "champion_b",
    "champion2",
    "champion_2",
    "opponent_champion",
];

const WITH_ALIASES: &[&str] = &[
    "with",
    "ally",
    "pair",
    "together",
    "synergy_with",
    "with_champion",
    "champion_b",
    "champion2",
    "champion_2",
];

const GAMES_ALIASES: &[&str] = &["games", "matches", "n", "count", "samples", "sample_size"];

const WINRATE_ALIASES: &[&str] = &["winrate", "wr", "win_rate", "wins_rate"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Vs,
    With,
}

impl SheetKind {
    pub fn sheet_label(&self) -> &'static str {
        match self {
            SheetKind::Vs => "Winrate_vs",
            SheetKind::With => "Winrate_with",
        }
    }

    fn sheet_aliases(&self) -> &'static [&'static str] {
        match self {
            SheetKind::Vs => &["winrate_vs", "vs", "head_to_head", "h2h", "matchups"],
            SheetKind::With => &["winrate_with", "with", "pairing", "synergy", "duos"],
        }
    }

    fn other_aliases(&self) -> &'static [&'static str] {
        match self {
            SheetKind::Vs => VS_ALIASES,
            SheetKind::With => WITH_ALIASES,
        }
    }

    fn other_hint(&self) -> &'static str {
        match self {
            SheetKind::Vs => "vs",
            SheetKind::With => "with",
        }
    }
}

/// Resolved column positions for one sheet.
#[derive(Debug, Clone, Copy)]
pub struct SheetSchema {
    pub base: usize,
    pub other: usize,
    pub games: usize,
    pub winrate: usize,
}

fn pick(headers: &[String], candidates: &[&str]) -> Option<usize> {
    for cand in candidates {
        if let Some(idx) = headers.iter().position(|h| h == cand) {
            return Some(idx);
        }
    }
    None
}

/// Resolves the four logical columns against a header row.
/// `headers` are the raw cells; normalization happens here.
pub fn resolve_columns(kind: SheetKind, raw_headers: &[String]) -> Result<SheetSchema, AppError> {
    let headers: Vec<String> = raw_headers.iter().map(|h| norm_name(h)).collect();

    let mut base = pick(&headers, BASE_ALIASES);
    let mut other = pick(&headers, kind.other_aliases());

    // Legacy scheme: no explicit vs/with column, but campeao + champion
    // means campeao is the base and champion the other side.
    if other.is_none() {
        let campeao = headers.iter().position(|h| h == "campeao");
        let champion = headers.iter().position(|h| h == "champion");
        if let (Some(c), Some(ch)) = (campeao, champion) {
            base = Some(c);
            other = Some(ch);
        }
    }

    let games = pick(&headers, GAMES_ALIASES);
    let winrate = pick(&headers, WINRATE_ALIASES);

    let mut missing = Vec::new();
    if base.is_none() {
        missing.push("champion");
    }
    if other.is_none() {
        missing.push(kind.other_hint());
    }
    if games.is_none() {
        missing.push("games");
    }
    if winrate.is_none() {
        missing.push("winrate");
    }

    if !missing.is_empty() {
        return Err(AppError::Schema {
            sheet: kind.sheet_label().to_string(),
            missing,
            found: headers,
            hint: kind.other_hint(),
        });
    }

    Ok(SheetSchema {
        base: base.unwrap(),
        other: other.unwrap(),
        games: games.unwrap(),
        winrate: winrate.unwrap(),
    })
}

/// Finds the workbook sheet matching a logical table, alias- and
/// case-insensitively. Returns the sheet's actual name.
pub fn resolve_sheet<'a>(kind: SheetKind, sheet_names: &'a [String]) -> Option<&'a str> {
    for alias in kind.sheet_aliases() {
        if let Some(name) = sheet_names.iter().find(|n| norm_name(n) == *alias) {
            return Some(name);
        }
    }
    None
}
