//! Единый тип ошибок публичного API.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// Нарушение инвариантов записи при её создании.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("{field} exceeds {limit}, got {value}")]
    AmountTooLarge {
        field: &'static str,
        value: Decimal,
        limit: Decimal,
    },

    #[error("{what} ends at {end} before it starts at {start}")]
    EndBeforeStart {
        what: &'static str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

#[derive(Debug, Error)]
pub enum TripError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, TripError>;
