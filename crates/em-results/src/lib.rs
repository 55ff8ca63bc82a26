//! em-results: per-tick log records and the CSV sink.

pub mod csv;
pub mod record;

pub use csv::{CsvLogWriter, HEADER, LINE_END, format_record};
pub use record::{LogRecord, RecordSink, TIMESTAMP_FORMAT};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error on log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Log sink is closed")]
    Closed,
}
