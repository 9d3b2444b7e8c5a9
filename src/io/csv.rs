// src/io/csv.rs
//! CSV persistence for signals
//!
//! Signals round-trip as two-column `Time,EEG` tables. Timestamps are
//! derived from the sample index on write and ignored on read, so the
//! sampling rate used to load a file is whatever the caller says it is.

use crate::error::{EegError, Result};
use std::path::Path;
use tracing::debug;

/// Write `signal` to `path` as `Time,EEG` rows. Time is the sample
/// index divided by `sampling_rate_hz`, in seconds.
pub fn save_signal<P: AsRef<Path>>(path: P, signal: &[f64], sampling_rate_hz: f64) -> Result<()> {
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["Time", "EEG"])?;
    for (i, sample) in signal.iter().enumerate() {
        let time_secs = i as f64 / sampling_rate_hz;
        writer.write_record([time_secs.to_string(), sample.to_string()])?;
    }
    writer.flush()?;

    debug!(
        "Wrote {} samples to {}",
        signal.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Read the `EEG` column back from a file written by [`save_signal`].
///
/// The column is found by header name, so extra columns are fine. A
/// missing `EEG` header or an unparsable sample yields
/// [`EegError::MalformedRecord`].
pub fn load_signal<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let mut reader = csv::Reader::from_path(&path)?;
    let headers = reader.headers()?.clone();
    let column = headers.iter().position(|h| h == "EEG").ok_or_else(|| {
        EegError::MalformedRecord(format!(
            "No EEG column in {}",
            path.as_ref().display()
        ))
    })?;

    let mut samples = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let field = record.get(column).ok_or_else(|| {
            EegError::MalformedRecord(format!("Record {} is missing the EEG column", row + 1))
        })?;
        let sample: f64 = field.parse().map_err(|_| {
            EegError::MalformedRecord(format!(
                "Record {}: cannot parse {:?} as a sample",
                row + 1,
                field
            ))
        })?;
        samples.push(sample);
    }

    debug!(
        "Read {} samples from {}",
        samples.len(),
        path.as_ref().display()
    );
    Ok(samples)
}
