//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use echometer_core::error::{EchoError, Result};

pub use schema::{EchoConfig, EchoSection, MetricsSection, ServerSection};

pub fn load_from_file(path: &str) -> Result<EchoConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| EchoError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<EchoConfig> {
    let cfg: EchoConfig = serde_yaml::from_str(s)
        .map_err(|e| EchoError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
