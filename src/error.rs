use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolocronError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unique constraint failed on the fields: (`{field}`)")]
    ConstraintViolation { field: String },

    #[error("No record was found for an update.")]
    NotFoundForUpdate,

    #[error("No record was found for a delete.")]
    NotFoundForDelete,

    #[error("{0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HolocronError {
    /// The unique column a constraint violation was raised for, if any.
    pub fn violated_field(&self) -> Option<&str> {
        match self {
            HolocronError::ConstraintViolation { field } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HolocronError>;
