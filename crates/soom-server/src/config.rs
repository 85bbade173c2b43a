use std::env;
use std::net::SocketAddr;

use jiff::SignedDuration;
use soom_gemini::config::GeminiConfig;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
/// Idle time after which a session and its patient data are discarded.
pub const DEFAULT_SESSION_TTL: SignedDuration = SignedDuration::from_secs(30 * 60);

/// Start-up configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub session_ttl: SignedDuration,
    pub gemini: GeminiConfig,
}

impl ServerConfig {
    /// `SOOM_ADDR`, `SOOM_SESSION_TTL_SECS` plus the `GEMINI_*` variables.
    pub fn from_env() -> eyre::Result<Self> {
        let raw_addr = env::var("SOOM_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid SOOM_ADDR {raw_addr}: {e}"))?;

        let session_ttl = match env::var("SOOM_SESSION_TTL_SECS") {
            Ok(raw) => {
                let secs: u32 = raw
                    .trim()
                    .parse()
                    .map_err(|e| eyre::eyre!("invalid SOOM_SESSION_TTL_SECS {raw}: {e}"))?;
                SignedDuration::from_secs(i64::from(secs))
            }
            Err(_) => DEFAULT_SESSION_TTL,
        };

        Ok(Self {
            addr,
            session_ttl,
            gemini: GeminiConfig::from_env()?,
        })
    }
}
