pub mod types;
pub mod settings;
pub mod error;
pub mod format;


// Re-export AppError for convenience
pub use error::{AppError, AppResult};
