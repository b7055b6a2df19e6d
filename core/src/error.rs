use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Inconsistent row {order_id}: revenue {revenue} does not equal price * quantity")]
    InconsistentRevenue { order_id: String, revenue: f64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DataResult<T> = Result<T, DataError>;
