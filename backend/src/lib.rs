pub mod config;
pub mod router;

pub use config::{ConfigError, ServerConfig};
pub use router::site_router;
