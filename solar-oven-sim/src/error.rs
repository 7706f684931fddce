use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    /// Inputs that cannot be simulated or aggregated
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("plotting error: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;

impl SimulationError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SimulationError::InvalidInput(message.into())
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for SimulationError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        SimulationError::Plot(err.to_string())
    }
}
