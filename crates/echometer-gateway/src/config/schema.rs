use std::net::SocketAddr;

use serde::Deserialize;
use echometer_core::error::{EchoError, Result};
use echometer_core::EscapeMode;

const MAX_BODY_CEILING: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EchoConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub metrics: MetricsSection,

    #[serde(default)]
    pub echo: EchoSection,
}

impl EchoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(EchoError::UnsupportedVersion);
        }

        let listen = self.server.validate()?;
        self.metrics.validate(listen)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerSection {
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse::<SocketAddr>().map_err(|_| {
            EchoError::BadRequest(format!("server.listen must be a valid SocketAddr: {}", self.listen))
        })
    }

    fn validate(&self) -> Result<SocketAddr> {
        if !(1..=MAX_BODY_CEILING).contains(&self.max_body_bytes) {
            return Err(EchoError::BadRequest(format!(
                "server.max_body_bytes must be between 1 and {MAX_BODY_CEILING}"
            )));
        }
        self.listen_addr()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_metrics_path")]
    pub path: String,

    /// Separate listener for the exposition endpoint. Unset: served on `server.listen`.
    #[serde(default)]
    pub listen: Option<String>,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_metrics_path(),
            listen: None,
        }
    }
}

impl MetricsSection {
    pub fn listen_addr(&self) -> Result<Option<SocketAddr>> {
        self.listen
            .as_deref()
            .map(|s| {
                s.parse::<SocketAddr>().map_err(|_| {
                    EchoError::BadRequest(format!("metrics.listen must be a valid SocketAddr: {s}"))
                })
            })
            .transpose()
    }

    /// Whether the exposition route is mounted on the main listener.
    pub fn inline(&self) -> bool {
        self.enabled && self.listen.is_none()
    }

    fn validate(&self, server_listen: SocketAddr) -> Result<()> {
        if !self.path.starts_with('/') {
            return Err(EchoError::BadRequest("metrics.path must start with '/'".into()));
        }
        if let Some(addr) = self.listen_addr()? {
            if addr == server_listen {
                return Err(EchoError::BadRequest(
                    "metrics.listen must differ from server.listen".into(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EchoSection {
    /// Escape header values and body before embedding them in the page.
    #[serde(default)]
    pub escape_html: bool,
}

impl EchoSection {
    pub fn escape_mode(&self) -> EscapeMode {
        EscapeMode::from_flag(self.escape_html)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_max_body_bytes() -> usize {
    30_000_000
}
fn default_metrics_path() -> String {
    "/metrics".into()
}
fn default_true() -> bool {
    true
}
