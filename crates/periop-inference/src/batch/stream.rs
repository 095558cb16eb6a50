use periop_core::models::{BatchEntry, BatchSummary, Record};
use periop_core::tracing::events;

use super::runner::score_row;
use crate::handle::ModelHandle;

/// Lazily scores records as they are pulled, numbering rows from 1.
///
/// Memory stays flat regardless of input size; the running
/// [`BatchSummary`] is available at any point.
#[derive(Debug)]
pub struct BatchStream<I> {
    handle: ModelHandle,
    records: I,
    next_row: usize,
    summary: BatchSummary,
    finished: bool,
}

impl<I> BatchStream<I>
where
    I: Iterator<Item = Record>,
{
    pub fn new(handle: ModelHandle, records: I) -> Self {
        Self {
            handle,
            records,
            next_row: 0,
            summary: BatchSummary::default(),
            finished: false,
        }
    }

    /// Counts over the entries yielded so far.
    pub fn summary(&self) -> BatchSummary {
        self.summary
    }
}

impl<I> Iterator for BatchStream<I>
where
    I: Iterator<Item = Record>,
{
    type Item = BatchEntry;

    fn next(&mut self) -> Option<BatchEntry> {
        match self.records.next() {
            Some(record) => {
                self.next_row += 1;
                let entry = score_row(&self.handle, self.next_row, &record);
                self.summary.record(&entry);
                Some(entry)
            }
            None => {
                if !self.finished {
                    self.finished = true;
                    events::batch_completed(
                        self.summary.total,
                        self.summary.succeeded,
                        self.summary.failed,
                    );
                }
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

/// Pairs a declared header with rows of cell text, yielding records.
#[derive(Debug)]
pub struct TabularRows<R> {
    columns: Vec<String>,
    rows: R,
}

impl<R> TabularRows<R> {
    pub fn new(columns: Vec<String>, rows: R) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl<R, S> Iterator for TabularRows<R>
where
    R: Iterator<Item = Vec<S>>,
    S: AsRef<str>,
{
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        self.rows
            .next()
            .map(|cells| Record::from_row(&self.columns, &cells))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}
