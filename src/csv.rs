use std::{
    collections::{hash_map::Entry, HashMap},
    hash::Hash,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

/// The delimiter used when none is configured
pub const DEFAULT_DELIMITER: u8 = b',';

#[derive(Debug)]
pub enum LoadError {
    /// The source could not be read from disk
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The header row of the source could not be decoded
    Csv { path: PathBuf, source: csv::Error },
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "could not read {}: {source}", path.display()),
            Self::Csv { path, source } => write!(f, "invalid csv in {}: {source}", path.display()),
        }
    }
}

/// Reads the CSV at `path` into records, using its first line as field names.
/// Rows that cannot be decoded are logged and skipped.
/// # Error
/// Errors if the file cannot be read or its header is not valid
pub fn read<D: DeserializeOwned>(path: &Path, delimiter: u8) -> Result<Vec<D>, LoadError> {
    let data = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = deserialize(&data, delimiter).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let records = rows
        .filter_map(|row| match row {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("{} - skipping row: {e}", path.display());
                None
            }
        })
        .collect::<Vec<_>>();
    log::info!("{} - {} records", path.display(), records.len());
    Ok(records)
}

/// Returns an iterator over the rows of `data` decoded as `D`.
/// Empty lines are ignored. Rows shorter than the header are padded with empty fields.
pub fn deserialize<'a, D: DeserializeOwned + 'a>(
    data: &'a [u8],
    delimiter: u8,
) -> Result<impl Iterator<Item = Result<D, csv::Error>> + 'a, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(data);
    let headers = rdr.headers()?.clone();
    Ok(rdr.into_records().map(move |record| {
        let mut record = record?;
        while record.len() < headers.len() {
            record.push_field("");
        }
        record.deserialize(Some(&headers))
    }))
}

/// Indexes `records` by `key`. When a key repeats, the first record is kept.
pub(crate) fn index<H: Hash + Eq, D>(
    records: impl IntoIterator<Item = D>,
    key: impl Fn(&D) -> H,
) -> HashMap<H, D> {
    let mut map = HashMap::new();
    for record in records {
        match map.entry(key(&record)) {
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
            Entry::Occupied(_) => log::debug!("duplicate key ignored"),
        }
    }
    map
}
