//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults (DbgConfig::default)
//!     → loader.rs (optional TOML file, --config / DBG_CONFIG)
//!     → Overrides (flags and DBG_* environment variables)
//!     → validation.rs (semantic checks)
//!     → DbgConfig (validated, immutable for the rest of the run)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so a config file is never required
//! - Defaults point at the local control endpoint and /etc/nginx/nginx.conf
//! - Validation separates syntactic (serde) from semantic checks and runs
//!   again after overrides are applied

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::DbgConfig;
pub use schema::EndpointConfig;
pub use schema::NginxConfig;
pub use schema::ObservabilityConfig;
pub use schema::Overrides;
