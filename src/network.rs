//! Network URL constants for the cryptodash SDK.

/// Default REST API base URL (local backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
