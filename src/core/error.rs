use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlignmentError {
    #[error("Invalid modification: a non-zero directional change is required")]
    InvalidModification,

    #[error("Invalid input for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Invalid ruleset: {0}")]
    InvalidRuleset(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl AlignmentError {
    pub fn invalid_input(field: &'static str, value: impl ToString) -> Self {
        AlignmentError::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AlignmentError>;
