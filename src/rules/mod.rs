//! Runtime alignment rules loaded from TOML

mod loader;
pub mod shift;

pub use loader::{default_ruleset_path, load_ruleset, load_ruleset_or_default};
pub use shift::AlignmentShift;
