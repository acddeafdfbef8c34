// Shared kernel used by every module

pub mod config; // Environment-backed configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (HTTP client)
pub mod utils; // Logging and stale-response helpers

// Re-exports for convenience
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
