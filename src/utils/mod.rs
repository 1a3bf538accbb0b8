/// Environment variable helpers used by the configuration loader
pub mod config;
/// Logging setup
pub mod logger;
/// Token masking for logs
pub mod mask;

pub use logger::setup_logger;
pub use mask::mask_token;
