pub mod types;
pub mod utils;

/// Version string reported by `GET /version`.
pub const SERVICE_VERSION: &str = "0.0.2";
