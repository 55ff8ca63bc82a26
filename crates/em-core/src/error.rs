use thiserror::Error;

pub type EmResult<T> = Result<T, EmError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value out of range: {what} (value={value}, max={max})")]
    OutOfRange {
        what: &'static str,
        value: u32,
        max: u32,
    },
}
