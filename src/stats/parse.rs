use calamine::Data;

/// Canonical champion key: lowercased, whitespace/apostrophes/periods stripped,
/// so "K'Sante", "KSante" and "k sante" all map to the same entry.
/// Returns None for blank cells.
pub fn champion_key(raw: &str) -> Option<String> {
    let key: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\'' | '\u{2019}' | '.'))
        .collect();

    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

pub fn cell_champion(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => champion_key(s),
        Data::Empty => None,
        other => champion_key(&other.to_string()),
    }
}

/// A permissively parsed cell. `dirty` marks cells that were garbage and
/// degraded to zero, so loads can report how much of the sheet was unusable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedCell {
    pub value: f64,
    pub dirty: bool,
}

impl ParsedCell {
    fn clean(value: f64) -> Self {
        ParsedCell { value, dirty: false }
    }

    fn garbage() -> Self {
        ParsedCell { value: 0.0, dirty: true }
    }
}

/// Parses a win-rate cell. Accepts fractions (0.44), percent strings ("55%"),
/// whole-number percents (55 -> 0.55) and either `.` or `,` separators.
/// Garbage degrades to 0.0 instead of failing the load.
pub fn parse_rate(cell: &Data) -> ParsedCell {
    match cell {
        Data::Float(v) => ParsedCell::clean(as_fraction(*v)),
        Data::Int(v) => ParsedCell::clean(as_fraction(*v as f64)),
        Data::Empty => ParsedCell::clean(0.0),
        Data::String(s) => match parse_number_str(s) {
            Some(v) => ParsedCell::clean(as_fraction(v)),
            None if s.trim().is_empty() => ParsedCell::clean(0.0),
            None => ParsedCell::garbage(),
        },
        _ => ParsedCell::garbage(),
    }
}

/// Parses a game-count cell. Same separator tolerance as `parse_rate` but no
/// percent reinterpretation: 8886 games stays 8886.
pub fn parse_count(cell: &Data) -> ParsedCell {
    match cell {
        Data::Float(v) => ParsedCell::clean(*v),
        Data::Int(v) => ParsedCell::clean(*v as f64),
        Data::Empty => ParsedCell::clean(0.0),
        Data::String(s) => match parse_number_str(s) {
            Some(v) => ParsedCell::clean(v),
            None if s.trim().is_empty() => ParsedCell::clean(0.0),
            None => ParsedCell::garbage(),
        },
        _ => ParsedCell::garbage(),
    }
}

/// Values above 1.0 are whole-number percents (55 instead of 0.55).
fn as_fraction(v: f64) -> f64 {
    if v > 1.0 {
        v / 100.0
    } else {
        v
    }
}

/// Number from a spreadsheet string. Tries comma-as-thousands first
/// ("8,886.00"), then comma-as-decimal ("0,44"). Strips '%' and spaces.
fn parse_number_str(s: &str) -> Option<f64> {
    let s: String = s.chars().filter(|c| *c != ' ' && *c != '%').collect();
    if s.is_empty() {
        return None;
    }

    if let Ok(v) = s.replace(',', "").parse::<f64>() {
        return Some(v);
    }
    s.replace('.', "").replace(',', ".").parse::<f64>().ok()
}

/// Odd input from the CLI: "2,30" or "1.8".
pub fn parse_odd(s: &str) -> Option<f64> {
    let s = s.trim().replace(',', ".");
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_champion_key_merges_variants() {
        assert_eq!(champion_key("K'Sante"), champion_key("ksante"));
        assert_eq!(champion_key("Dr. Mundo"), Some("drmundo".to_string()));
        assert_eq!(champion_key("  Vi "), Some("vi".to_string()));
        assert_eq!(champion_key("   "), None);
    }

    #[test]
    fn test_champion_key_idempotent() {
        let once = champion_key("K'Sante").unwrap();
        assert_eq!(champion_key(&once), Some(once.clone()));
    }

    #[test]
    fn test_rate_fraction_and_percent() {
        assert_eq!(parse_rate(&Data::Float(0.44)).value, 0.44);
        assert_eq!(parse_rate(&Data::Int(55)).value, 0.55);
        assert_eq!(parse_rate(&Data::String("55%".into())).value, 0.55);
        assert_eq!(parse_rate(&Data::String("0,44".into())).value, 0.44);
        assert_eq!(parse_rate(&Data::String("0.44".into())).value, 0.44);
    }

    #[test]
    fn test_count_keeps_magnitude() {
        assert_eq!(parse_count(&Data::Float(8886.0)).value, 8886.0);
        assert_eq!(parse_count(&Data::String("8,886.00".into())).value, 8886.0);
        assert_eq!(
            parse_count(&Data::String("1.234.567,89".into())).value,
            1234567.89
        );
    }

    #[test]
    fn test_garbage_degrades_to_zero() {
        let p = parse_rate(&Data::String("n/a".into()));
        assert_eq!(p.value, 0.0);
        assert!(p.dirty);

        let p = parse_count(&Data::Bool(true));
        assert_eq!(p.value, 0.0);
        assert!(p.dirty);

        // blank is missing data, not garbage
        let p = parse_rate(&Data::Empty);
        assert_eq!(p.value, 0.0);
        assert!(!p.dirty);
    }

    #[test]
    fn test_parse_odd_accepts_comma() {
        assert_eq!(parse_odd("2,30"), Some(2.30));
        assert_eq!(parse_odd(" 1.8 "), Some(1.8));
        assert_eq!(parse_odd(""), None);
        assert_eq!(parse_odd("abc"), None);
    }
}
