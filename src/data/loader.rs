use std::cell::OnceCell;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use super::model::{Dataset, Record, REQUIRED_COLUMNS};

/// Everything that can go wrong while reading the source table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV missing '{0}' column")]
    MissingColumn(String),
    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse the fuel-economy CSV at `path`.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file)
}

/// Parse fuel-economy CSV from any reader.
///
/// Layout: header row with at least the columns in [`REQUIRED_COLUMNS`].
/// Extra columns are skipped and empty numeric cells become `None`.
pub fn read_csv<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .into_iter()
        .find(|col| !headers.iter().any(|h| h == *col))
    {
        return Err(LoadError::MissingColumn(missing.to_string()));
    }

    let records = reader
        .deserialize::<Record>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset::new(records))
}

// ---------------------------------------------------------------------------
// Process-scoped cache
// ---------------------------------------------------------------------------

/// Loads the dataset from a fixed path at most once.
///
/// The first successful [`DatasetLoader::load`] reads the file; every later
/// call hands out the same `Arc` without touching storage. Failures are not
/// cached, so a later call reads the file again.
#[derive(Debug)]
pub struct DatasetLoader {
    path: PathBuf,
    cached: OnceCell<Arc<Dataset>>,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DatasetLoader {
            path: path.into(),
            cached: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Arc<Dataset>, LoadError> {
        if let Some(dataset) = self.cached.get() {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load_csv(&self.path)?);
        log::info!(
            "Loaded {} records from {}",
            dataset.len(),
            self.path.display()
        );
        Ok(Arc::clone(self.cached.get_or_init(|| dataset)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const SAMPLE: &str = "\
make,year,fuelCost08,class_summary,fuel_type_summary,barrels08,city08
Toyota,2015,1250,Small Cars,Gasoline,10.5,30
Ford,2012,,Pickup,Diesel,,18
";

    fn write_tmp(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{content}").unwrap();
        tmp
    }

    #[test]
    fn parses_rows_and_ignores_extra_columns() {
        let ds = read_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].make, "Toyota");
        assert_eq!(ds.records[0].fuel_cost, Some(1250.0));
        assert_eq!(ds.records[0].barrels, Some(10.5));
        assert_eq!(ds.records[1].fuel_cost, None);
        assert_eq!(ds.records[1].barrels, None);
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let ds = read_csv("make,year,fuelCost08,class_summary,fuel_type_summary,barrels08\n".as_bytes())
            .unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let err = read_csv("make,year,fuelCost08\nToyota,2015,1000\n".as_bytes()).unwrap_err();
        match err {
            LoadError::MissingColumn(col) => assert_eq!(col, "class_summary"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn malformed_year_is_a_csv_error() {
        let bad = "make,year,fuelCost08,class_summary,fuel_type_summary,barrels08\nToyota,soon,1,a,b,2\n";
        assert!(matches!(read_csv(bad.as_bytes()), Err(LoadError::Csv(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }

    #[test]
    fn loader_reads_storage_only_once() {
        let tmp = write_tmp(SAMPLE);
        let loader = DatasetLoader::new(tmp.path());

        let first = loader.load().unwrap();
        tmp.close().unwrap();
        let second = loader.load().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.csv");
        let loader = DatasetLoader::new(&path);

        assert!(loader.load().is_err());
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(loader.load().unwrap().len(), 2);
    }
}
