use std::io;
use std::thread;
use std::time::Duration;

use indicatif::ProgressBar;
use log::{error, info, warn};

use crate::geocode::error::GeocodeError;
use crate::geocode::{GeocodeResult, Geocoder};
use crate::pipeline::error::RunError;
use crate::records::reader::RecordReader;
use crate::records::writer::RecordWriter;
use crate::records::OutputRecord;

pub mod error;

/// What to do with a row whose geocode attempt failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailurePolicy {
    /// Log the failure and move on to the next row
    Skip,
    /// Abort the run on the first failure
    FailFast,
    /// Make up to this many additional attempts, then skip the row
    Retry(usize)
}

#[derive(Debug)]
pub struct RunOptions {
    pub row_cap: usize,
    pub rate_limit: Duration,
    pub failure_policy: FailurePolicy
}

#[derive(Debug, Default, PartialEq)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize
}

/// Drives the full pipeline: read rows, geocode each one, merge and write
/// enriched records, stopping at the row cap. Takes the writer by value so
/// the output handle is released on every exit path.
pub fn run<R, W, G>(
    reader: RecordReader<R>,
    mut writer: RecordWriter<W>,
    geocoder: &G,
    options: &RunOptions
) -> Result<RunSummary, RunError>
where
    R: io::Read,
    W: io::Write,
    G: Geocoder
{
    let mut summary = RunSummary::default();
    let progress_bar = ProgressBar::new(options.row_cap as u64);
    // The header is line 1, so data rows are numbered from 2.
    let mut row: u64 = 1;

    for record in reader {
        if summary.attempted == options.row_cap {
            info!("Row cap of {} reached, stopping", options.row_cap);
            break;
        }
        let record = record?;
        row += 1;
        summary.attempted += 1;

        let query = record.address_query();
        let located = resolve(geocoder, &query, options);
        info!("Row {}: \"{}\"", row, query);

        match located {
            Ok(located) => {
                writer.write(&OutputRecord::from_record(record, located))?;
                summary.succeeded += 1;
            },
            Err(err) => {
                summary.failed += 1;
                if let FailurePolicy::FailFast = options.failure_policy {
                    return Err(RunError::Geocode { row, query, source: err });
                }
                error!(
                    "Row {} (NAME: {}, \"{}\") failed to geocode, skipping: {}",
                    row, record.name, query, err
                );
            }
        }
        progress_bar.inc(1);
    }

    progress_bar.finish();
    writer.close()?;
    info!(
        "Done. {} rows attempted, {} succeeded, {} failed",
        summary.attempted, summary.succeeded, summary.failed
    );
    Ok(summary)
}

/// One row's provider interaction: the call, the quota pause after every
/// attempt, and the retry budget when the policy allows one.
fn resolve<G: Geocoder>(
    geocoder: &G,
    query: &str,
    options: &RunOptions
) -> Result<GeocodeResult, GeocodeError> {
    let mut attempts_left = match options.failure_policy {
        FailurePolicy::Retry(retries) => retries + 1,
        _ => 1
    };

    loop {
        let outcome = geocoder.geocode(query);
        // The provider quota counts failed calls too.
        thread::sleep(options.rate_limit);

        match outcome {
            Ok(located) => return Ok(located),
            Err(err) => {
                attempts_left -= 1;
                if attempts_left == 0 {
                    return Err(err);
                }
                // TODO: exponential backoff instead of reusing the
                // rate-limit pause between attempts
                warn!("Retrying \"{}\": {}", query, err);
            }
        }
    }
}
