// semver-lite - semantic version value type
// Core library functionality

pub mod models;
pub mod utils;

// Re-export commonly used types
pub use models::qualifier::Qualifier;
pub use models::version::Version;
pub use utils::error::{Result, VersionError};
