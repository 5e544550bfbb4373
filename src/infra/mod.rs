//! Infrastructure layer (adapters/implementations).
//!
//! Configuration on disk and the external generative suggestion service.

pub mod app_config;
pub mod suggest;
