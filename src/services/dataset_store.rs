use std::fs::File;
use std::path::{Path, PathBuf};

use crate::domain::book::{BookRecord, Dataset, METADATA_COLUMNS, URL_ID_COLUMN};
use crate::errors::ScrapeError;

/// Reads and rewrites the whole book dataset as a CSV file. The store is the
/// only code that touches the backing file; runners go through it once per
/// window.
pub struct DatasetStore {
    path: PathBuf,
}

impl DatasetStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        DatasetStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse the backing file into an ordered dataset. The `urlID` column is
    /// required; metadata columns missing from the header are appended so
    /// extracted values have somewhere to land on save. Every record gets an
    /// empty string for any column its row does not carry.
    pub fn load(&self) -> Result<Dataset, ScrapeError> {
        let file = File::open(&self.path)?;
        let mut reader = csv::Reader::from_reader(file);

        let headers = reader.headers()?.clone();
        let mut columns: Vec<String> = headers.iter().map(str::to_string).collect();

        if !columns.iter().any(|c| c == URL_ID_COLUMN) {
            return Err(ScrapeError::MissingColumn(URL_ID_COLUMN));
        }
        for metadata_column in METADATA_COLUMNS {
            if !columns.iter().any(|c| c == metadata_column) {
                columns.push(metadata_column.to_string());
            }
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut record = BookRecord::default();
            for (column, value) in headers.iter().zip(row.iter()) {
                record.set_field(column, value.to_string());
            }
            records.push(record);
        }

        log::info!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(Dataset::new(columns, records))
    }

    /// Serialize the full dataset back to the backing file, preserving the
    /// column order. The new content is written to a sibling temp file and
    /// renamed over the target, so a crash mid-write leaves the previous
    /// file intact.
    pub fn save(&self, dataset: &Dataset) -> Result<(), ScrapeError> {
        let tmp_path = self.path.with_extension("tmp");

        let file = File::create(&tmp_path)?;
        let mut writer = csv::Writer::from_writer(file);

        writer.write_record(dataset.columns())?;
        for record in &dataset.records {
            writer.write_record(dataset.columns().iter().map(|c| record.field(c)))?;
        }
        writer.flush()?;
        drop(writer);

        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
