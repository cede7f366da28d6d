//! gRPC listener configuration

use serde::Deserialize;
use std::net::SocketAddr;

use super::error::ValidationError;
use super::server::{default_host, parse_socket_addr};

/// gRPC listener configuration (metrics-collector only)
#[derive(Debug, Clone, Deserialize)]
pub struct GrpcConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl GrpcConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        parse_socket_addr(&self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    9090
}
