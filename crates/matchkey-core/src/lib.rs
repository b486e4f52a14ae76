//! Matchkey Core — error type and engine configuration shared by the workspace.

pub mod config;
pub mod error;

pub use config::{DeviceIdCasing, EngineConfig};
pub use error::{Error, Result};
