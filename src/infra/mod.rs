//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (object storage, config files).

pub mod app_config;
pub mod hash;
pub mod sink;
