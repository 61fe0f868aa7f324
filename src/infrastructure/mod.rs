//! Infrastructure layer modules
//!
//! This module contains shared infrastructure components:
//! - `auth`: JWT authentication and validation
//! - `config`: Application configuration and settings
//! - `error`: Unified API error type
//! - `metrics`: Prometheus metrics helpers
//! - `redis`: Redis Pub/Sub sender

pub mod auth;
pub mod config;
pub mod error;
pub mod metrics;
pub mod redis;
