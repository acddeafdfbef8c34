/// Shared infrastructure concerns
///
/// Infrastructure used by more than one bounded context (module).
pub mod http_client;

// Re-exports for convenience
pub use http_client::HttpClient;
