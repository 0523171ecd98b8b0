use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Reward pool has no entries")]
    EmptyPool,

    #[error("Reward entry {id} has invalid weight {weight}")]
    InvalidWeight { id: i64, weight: f64 },

    #[error("Reward pool weights sum to a non-finite total")]
    TotalWeightOverflow,

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInput(_)
                | EngineError::EmptyPool
                | EngineError::InvalidWeight { .. }
                | EngineError::TotalWeightOverflow
        )
    }

    /// Stable machine-readable name of the variant.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidInput(_) => "invalid_input",
            EngineError::EmptyPool => "empty_pool",
            EngineError::InvalidWeight { .. } => "invalid_weight",
            EngineError::TotalWeightOverflow => "total_weight_overflow",
            EngineError::NotFound => "not_found",
            EngineError::ConstraintViolation(_) => "constraint_violation",
        }
    }
}
