// File: crates/figure-cli/src/source.rs
// Summary: CSV measurement tables: header row, numeric columns selected by name or index.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A CSV file loaded once, columns pulled out on demand.
pub struct Table {
    path: PathBuf,
    headers: Vec<String>,
    records: Vec<csv::StringRecord>,
}

impl Table {
    pub fn load(path: &Path) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("opening {}", path.display()))?;

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();

        let records = rdr
            .records()
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("reading {}", path.display()))?;
        debug!("loaded {} rows from {} (headers: {:?})", records.len(), path.display(), headers);

        Ok(Self { path: path.to_path_buf(), headers, records })
    }

    /// Resolve a column by header name (case-insensitive) or zero-based index.
    pub fn column_index(&self, column: &str) -> Result<usize> {
        let want = column.trim().to_lowercase();
        if let Some(i) = self.headers.iter().position(|h| *h == want) {
            return Ok(i);
        }
        match want.parse::<usize>() {
            Ok(i) if i < self.headers.len() => Ok(i),
            _ => anyhow::bail!(
                "column '{}' not found in {} (headers: {:?})",
                column,
                self.path.display(),
                self.headers
            ),
        }
    }

    /// Every value of `column` as f64. A non-numeric cell is an error naming its line.
    pub fn column(&self, column: &str) -> Result<Vec<f64>> {
        let ix = self.column_index(column)?;
        self.records
            .iter()
            .enumerate()
            .map(|(row, rec)| {
                let cell = rec.get(ix).unwrap_or("");
                cell.parse::<f64>().with_context(|| {
                    // +2: one for the header, one for 1-based lines
                    format!("{}:{}: '{}' is not a number", self.path.display(), row + 2, cell)
                })
            })
            .collect()
    }

    /// Numeric values of `column`, skipping (and logging) cells that do not parse.
    pub fn samples(&self, column: &str) -> Result<Vec<f64>> {
        let ix = self.column_index(column)?;
        let mut out = Vec::with_capacity(self.records.len());
        let mut skipped = 0usize;
        for (row, rec) in self.records.iter().enumerate() {
            match rec.get(ix).map(str::parse::<f64>) {
                Some(Ok(v)) => out.push(v),
                _ => {
                    skipped += 1;
                    warn!("{}:{}: skipping non-numeric row", self.path.display(), row + 2);
                }
            }
        }
        if skipped > 0 {
            warn!("skipped {} of {} rows in {}", skipped, self.records.len(), self.path.display());
        }
        Ok(out)
    }
}

/// Loads each file at most once per run.
#[derive(Default)]
pub struct TableCache {
    tables: HashMap<PathBuf, Table>,
}

impl TableCache {
    pub fn column(&mut self, path: &Path, column: &str) -> Result<Vec<f64>> {
        if !self.tables.contains_key(path) {
            let table = Table::load(path)?;
            self.tables.insert(path.to_path_buf(), table);
        }
        match self.tables.get(path) {
            Some(table) => table.column(column),
            None => anyhow::bail!("table {} vanished from cache", path.display()),
        }
    }
}
