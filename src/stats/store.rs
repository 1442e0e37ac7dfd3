use calamine::{open_workbook_auto, Data, Range, Reader, Xlsx};
use std::collections::HashMap;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::AppError;

use super::parse::{cell_champion, parse_count, parse_rate};
use super::schema::{resolve_columns, resolve_sheet, SheetKind};

pub const DEFAULT_XLSX: &str = "dados_mega_merged.xlsx";

/// Aggregated evidence for one champion pair. Wins are reconstructed as
/// rate x games per source row, then summed across rows (role breakdowns
/// and the like), so sample size is never lost.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PairStat {
    pub wins: f64,
    pub games: f64,
}

/// One lookup table keyed by an ordered (base, other) champion pair.
#[derive(Debug, Default)]
pub struct PairTable {
    map: HashMap<(String, String), PairStat>,
    dirty_cells: usize,
}

impl PairTable {
    pub fn new() -> Self {
        PairTable::default()
    }

    pub fn add_row(&mut self, base: String, other: String, rate: f64, games: f64) {
        let entry = self.map.entry((base, other)).or_default();
        entry.wins += rate * games;
        entry.games += games;
    }

    pub fn mark_dirty(&mut self, cells: usize) {
        self.dirty_cells += cells;
    }

    pub fn get(&self, base: &str, other: &str) -> Option<PairStat> {
        self.map
            .get(&(base.to_string(), other.to_string()))
            .copied()
    }

    /// Lookup trying both directions; the source may record only one.
    pub fn get_either(&self, a: &str, b: &str) -> Option<PairStat> {
        self.get(a, b).or_else(|| self.get(b, a))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn dirty_cells(&self) -> usize {
        self.dirty_cells
    }
}

/// Normalized snapshot of the two statistic tables. Immutable once built;
/// a reload constructs a fresh store and swaps it in via `StoreSlot`.
#[derive(Debug)]
pub struct StatStore {
    vs: PairTable,
    with: PairTable,
}

impl StatStore {
    pub fn from_tables(vs: PairTable, with: PairTable) -> Self {
        StatStore { vs, with }
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let mut workbook =
            open_workbook_auto(path).map_err(|e| AppError::Workbook(e.to_string()))?;
        Self::from_workbook(&mut workbook)
    }

    /// Ingests from an in-memory xlsx (e.g. an uploaded file's bytes).
    #[allow(dead_code)]
    pub fn from_reader<RS: Read + Seek>(reader: RS) -> Result<Self, AppError> {
        let mut workbook: Xlsx<RS> =
            Xlsx::new(reader).map_err(|e| AppError::Workbook(e.to_string()))?;
        Self::from_workbook(&mut workbook)
    }

    fn from_workbook<RS, R>(workbook: &mut R) -> Result<Self, AppError>
    where
        RS: Read + Seek,
        R: Reader<RS>,
        R::Error: std::fmt::Display,
    {
        let vs = Self::load_sheet(workbook, SheetKind::Vs)?;
        let with = Self::load_sheet(workbook, SheetKind::With)?;
        Ok(StatStore { vs, with })
    }

    fn load_sheet<RS, R>(workbook: &mut R, kind: SheetKind) -> Result<PairTable, AppError>
    where
        RS: Read + Seek,
        R: Reader<RS>,
        R::Error: std::fmt::Display,
    {
        let names = workbook.sheet_names().to_owned();
        let sheet_name = resolve_sheet(kind, &names)
            .ok_or_else(|| AppError::SheetNotFound(kind.sheet_label(), names.clone()))?
            .to_string();

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| AppError::Workbook(e.to_string()))?;

        Self::parse_sheet(kind, &range)
    }

    fn parse_sheet(kind: SheetKind, range: &Range<Data>) -> Result<PairTable, AppError> {
        let mut rows = range.rows();

        let headers: Vec<String> = match rows.next() {
            Some(row) => row.iter().map(|c| c.to_string()).collect(),
            None => Vec::new(),
        };
        let schema = resolve_columns(kind, &headers)?;

        let mut table = PairTable::new();
        for row in rows {
            let base = row.get(schema.base).and_then(cell_champion);
            let other = row.get(schema.other).and_then(cell_champion);
            let (base, other) = match (base, other) {
                (Some(b), Some(o)) => (b, o),
                _ => continue,
            };

            let rate = parse_rate(row.get(schema.winrate).unwrap_or(&Data::Empty));
            let games = parse_count(row.get(schema.games).unwrap_or(&Data::Empty));
            table.mark_dirty(rate.dirty as usize + games.dirty as usize);
            table.add_row(base, other, rate.value, games.value);
        }

        Ok(table)
    }

    /// Head-to-head evidence for `base` against `other` (ordered).
    /// Names are raw; normalization happens here.
    pub fn vs_stat(&self, base: &str, other: &str) -> Option<PairStat> {
        let base = super::parse::champion_key(base)?;
        let other = super::parse::champion_key(other)?;
        self.vs.get(&base, &other)
    }

    /// Pairing evidence for `a` together with `b`, either direction.
    pub fn with_stat(&self, a: &str, b: &str) -> Option<PairStat> {
        let a = super::parse::champion_key(a)?;
        let b = super::parse::champion_key(b)?;
        self.with.get_either(&a, &b)
    }

    pub fn vs_pairs(&self) -> usize {
        self.vs.len()
    }

    pub fn with_pairs(&self) -> usize {
        self.with.len()
    }

    /// Cells that were garbage and degraded to zero during the load.
    pub fn dirty_cells(&self) -> usize {
        self.vs.dirty_cells() + self.with.dirty_cells()
    }
}

/// Holds the currently active store. A (re)load builds the new `StatStore`
/// completely before it lands here, so readers never observe a half-loaded
/// snapshot; a failed load leaves the previous one in place.
#[derive(Debug, Default)]
pub struct StoreSlot {
    store: Option<StatStore>,
}

impl StoreSlot {
    pub fn empty() -> Self {
        StoreSlot { store: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_some()
    }

    pub fn get(&self) -> Result<&StatStore, AppError> {
        self.store.as_ref().ok_or(AppError::DataNotLoaded)
    }

    pub fn replace(&mut self, store: StatStore) {
        self.store = Some(store);
    }

    pub fn reload_from(&mut self, path: &Path) -> Result<&StatStore, AppError> {
        let store = StatStore::from_path(path)?;
        self.replace(store);
        self.get()
    }

    /// Loads from the conventional locations if nothing is loaded yet.
    /// A path the user chose (--data flag or MEGA_DATA_PATH) is
    /// authoritative: if it is missing the load fails naming it, with no
    /// fallback to other workbooks. Only when no source was chosen are the
    /// working directory and the home data directory tried.
    pub fn ensure_default(
        &mut self,
        explicit: Option<&Path>,
        config: &Config,
    ) -> Result<&StatStore, AppError> {
        if self.is_loaded() {
            return self.get();
        }

        if let Some(path) = explicit.or(config.data_path.as_deref()) {
            if !path.exists() {
                return Err(AppError::DataNotFound(vec![path.display().to_string()]));
            }
            return self.reload_from(path);
        }

        let candidates = Self::default_paths();
        let path = candidates.iter().find(|p| p.exists()).ok_or_else(|| {
            AppError::DataNotFound(
                candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
            )
        })?;

        self.reload_from(path)
    }

    fn default_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from(DEFAULT_XLSX),
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".mega_decisor")
                .join(DEFAULT_XLSX),
        ]
    }
}
