use rayon::prelude::*;

use periop_core::batch_span;
use periop_core::config::BatchConfig;
use periop_core::errors::SchemaError;
use periop_core::models::{BatchEntry, BatchSummary, Record};
use periop_core::tracing::events;

use super::columns;
use super::stream::BatchStream;
use crate::handle::ModelHandle;
use crate::pipeline;

/// Drives the record pipeline over many rows against one model.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    handle: ModelHandle,
    config: BatchConfig,
}

impl BatchRunner {
    pub fn new(handle: ModelHandle, config: BatchConfig) -> Self {
        Self { handle, config }
    }

    pub fn handle(&self) -> &ModelHandle {
        &self.handle
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Score a materialized batch.
    ///
    /// Returns one entry per record, same order, rows numbered from 1.
    /// Fails only when strict column checking is on and the union of
    /// record keys misses a schema feature.
    pub fn run(&self, records: &[Record]) -> Result<Vec<BatchEntry>, SchemaError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        if self.config.strict_columns {
            columns::check_records(self.handle.schema(), records)?;
        }

        let _span = batch_span!(self.handle.model_id(), records.len()).entered();

        let entries: Vec<BatchEntry> = if self.config.use_parallel(records.len()) {
            records
                .par_iter()
                .enumerate()
                .map(|(index, record)| score_row(&self.handle, index + 1, record))
                .collect()
        } else {
            records
                .iter()
                .enumerate()
                .map(|(index, record)| score_row(&self.handle, index + 1, record))
                .collect()
        };

        let summary = BatchSummary::from_entries(&entries);
        events::batch_completed(summary.total, summary.succeeded, summary.failed);
        Ok(entries)
    }

    /// Score records lazily with no up-front column check.
    pub fn stream<I>(&self, records: I) -> BatchStream<I::IntoIter>
    where
        I: IntoIterator<Item = Record>,
    {
        BatchStream::new(self.handle.clone(), records.into_iter())
    }

    /// Score records lazily after checking the declared header once.
    pub fn stream_with_header<I>(
        &self,
        header: &[String],
        records: I,
    ) -> Result<BatchStream<I::IntoIter>, SchemaError>
    where
        I: IntoIterator<Item = Record>,
    {
        if self.config.strict_columns {
            columns::check_columns(self.handle.schema(), header.iter().map(String::as_str))?;
        }
        Ok(self.stream(records))
    }
}

/// Run one row, folding any failure into a row-tagged entry.
pub(crate) fn score_row(handle: &ModelHandle, row: usize, record: &Record) -> BatchEntry {
    match pipeline::predict_record(handle, record, Some(row)) {
        Ok(result) => BatchEntry::Success { row, result },
        Err(err) => {
            let error = err.to_string();
            events::row_failed(row, &error);
            BatchEntry::Failure { row, error }
        }
    }
}
