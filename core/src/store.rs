//! CSV persistence layer.
//!
//! RULE: Only store.rs touches the data file.
//! Everything else works with in-memory `OrderRecord` tables.
//!
//! Migration policy is schema-on-read: a file whose header is missing a
//! required column is deleted and regenerated. A merely *renamed* column
//! therefore discards the old rows — acceptable for synthetic data, but
//! a real system would carry an explicit schema version instead.

use std::fs;
use std::path::Path;

use crate::config::GenConfig;
use crate::error::{DataError, DataResult};
use crate::generator::Generator;
use crate::record::OrderRecord;
use crate::schema;

pub struct DataStore;

impl DataStore {
    /// Load the dataset at `cfg.output`, regenerating it when the file
    /// is absent or its header is incomplete. The happy path — file
    /// present and complete — never writes.
    pub fn load_or_generate(cfg: &GenConfig) -> DataResult<Vec<OrderRecord>> {
        let path = cfg.output.as_path();

        if path.exists() {
            if Self::header_is_complete(path)? {
                log::debug!("dataset {} present and complete, loading", path.display());
                return Self::read(path);
            }
            log::warn!(
                "dataset {} is missing required columns, regenerating",
                path.display()
            );
            fs::remove_file(path)?;
        } else {
            log::info!("dataset {} not found, generating", path.display());
        }

        let rows = Generator::new(cfg.seed).generate(cfg);
        Self::write(path, &rows)?;
        Ok(rows)
    }

    /// Parse every row of a persisted dataset.
    ///
    /// Strict: a malformed row (unparseable date, non-numeric price or
    /// quantity, a categorical outside its set, or a revenue that does
    /// not match price × quantity) fails the whole load. A table that
    /// cannot be made internally consistent is never served.
    pub fn read(path: &Path) -> DataResult<Vec<OrderRecord>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let record: OrderRecord = result?;
            if !record.revenue_is_consistent() {
                return Err(DataError::InconsistentRevenue {
                    order_id: record.order_id,
                    revenue: record.revenue,
                });
            }
            rows.push(record);
        }
        log::debug!("read {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    /// Write the table with the full required header. Called exactly
    /// once per generation; failures propagate to the caller.
    pub fn write(path: &Path, rows: &[OrderRecord]) -> DataResult<()> {
        // Header is written explicitly so even an empty table carries
        // the full column list.
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
        writer.write_record(schema::REQUIRED_COLUMNS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        log::info!("wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }

    /// Check the on-disk header for every required column.
    pub fn header_is_complete(path: &Path) -> DataResult<bool> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?;
        Ok(schema::REQUIRED_COLUMNS
            .iter()
            .all(|col| headers.iter().any(|h| h == *col)))
    }
}
