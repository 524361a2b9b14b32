pub mod config;
pub mod error;
pub mod types;

pub use config::RulesetConfig;
pub use error::{AlignmentError, Result};
pub use types::NumericInput;
