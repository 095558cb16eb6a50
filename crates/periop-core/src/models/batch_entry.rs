use serde::{Serialize, Serializer};

use super::prediction_result::{PredictionResult, WireResult};

/// Outcome of one batch row. Rows are 1-indexed.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEntry {
    Success { row: usize, result: PredictionResult },
    Failure { row: usize, error: String },
}

impl BatchEntry {
    pub fn row(&self) -> usize {
        match self {
            Self::Success { row, .. } | Self::Failure { row, .. } => *row,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Self::Success { result, .. } => Some(result),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum WireEntry<'a> {
    Success {
        row: usize,
        #[serde(flatten)]
        result: WireResult,
    },
    Failure {
        row: usize,
        error: &'a str,
    },
}

impl Serialize for BatchEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Success { row, result } => WireEntry::Success {
                row: *row,
                result: WireResult::from(result),
            },
            Self::Failure { row, error } => WireEntry::Failure { row: *row, error },
        };
        wire.serialize(serializer)
    }
}

/// Counts over a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut summary, entry| {
            summary.record(entry);
            summary
        })
    }

    /// Count one more entry.
    pub fn record(&mut self, entry: &BatchEntry) {
        self.total += 1;
        if entry.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}
