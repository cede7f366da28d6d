//! Monitoring System - metrics collector and order services
//!
//! Domain services for recording metrics and orders behind repository
//! ports, with PostgreSQL and in-memory adapters and REST/gRPC transports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod startup;
pub mod telemetry;
