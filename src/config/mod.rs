//! Application configuration module
//!
//! Configuration is layered: an optional YAML file first, then environment
//! variables with the `MONITORING` prefix on top. Nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use monitoring_system::config::{AppConfig, Service};
//!
//! let config = AppConfig::load_validated(None, Service::OrderService)
//!     .expect("Failed to load configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod database;
mod error;
mod grpc;
mod server;

pub use database::{DatabaseBackend, DatabaseConfig};
pub use error::{ConfigError, ValidationError};
pub use grpc::GrpcConfig;
pub use server::{LogFormat, ServerConfig};

use serde::Deserialize;
use std::path::Path;

/// Binary a configuration is validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// REST and gRPC listeners
    MetricsCollector,
    /// REST listener only; the `grpc` section is ignored
    OrderService,
}

impl Service {
    pub fn serves_grpc(self) -> bool {
        matches!(self, Service::MetricsCollector)
    }
}

/// Root application configuration shared by both binaries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// REST listener and logging
    #[serde(default)]
    pub server: ServerConfig,

    /// gRPC listener, ignored by the order service
    #[serde(default)]
    pub grpc: GrpcConfig,

    /// Storage backend and PostgreSQL pool
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `path` if given; a missing file is skipped
    /// 3. Overlays environment variables with the `MONITORING` prefix
    ///
    /// # Environment Variable Format
    ///
    /// - `MONITORING__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MONITORING__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is malformed or values cannot be
    /// parsed into expected types.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("MONITORING")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load, then validate for `service`
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` for unreadable sources,
    /// `ConfigError::ValidationFailed` for values `service` cannot run with.
    pub fn load_validated(path: Option<&Path>, service: Service) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate(service)?;
        Ok(config)
    }

    /// Validate the sections `service` uses
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self, service: Service) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;

        if service.serves_grpc() {
            self.grpc.validate()?;
            let rest = self.server.socket_addr()?;
            if rest == self.grpc.socket_addr()? {
                return Err(ValidationError::ConflictingListeners(rest.to_string()));
            }
        }
        Ok(())
    }
}
