use std::net::IpAddr;
use std::time::Duration;

/// Google Apps Script web app that appends contact submissions to the sheet.
pub const DEFAULT_RELAY_URL: &str = "https://script.google.com/macros/s/AKfycbxuNwNRzTb8YibZN_WAy6KxeRFiwziKE8SS0ilowf2HUicIPVuyexR1t2N4d6K2yw7l-A/exec";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub relay_url: String,
    pub relay_timeout: Option<Duration>,
    pub modal_delay: Duration,
    pub modal_reset: Duration,
    pub max_body_size: usize,
    pub static_dir: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("NOVAVISTA_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid NOVAVISTA_HOST: {e}"))?;

        let port: u16 = env_or("NOVAVISTA_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid NOVAVISTA_PORT: {e}"))?;

        let relay_url = env_or("NOVAVISTA_RELAY_URL", DEFAULT_RELAY_URL);
        if !relay_url.starts_with("http") {
            return Err(format!("Invalid NOVAVISTA_RELAY_URL: {relay_url}"));
        }

        let relay_timeout = match std::env::var("NOVAVISTA_RELAY_TIMEOUT_SECS").ok() {
            Some(secs) if !secs.trim().is_empty() => Some(Duration::from_secs(
                secs.trim()
                    .parse()
                    .map_err(|e| format!("Invalid NOVAVISTA_RELAY_TIMEOUT_SECS: {e}"))?,
            )),
            _ => None,
        };

        let modal_delay = Duration::from_millis(
            env_or("NOVAVISTA_MODAL_DELAY_MS", "5000")
                .parse()
                .map_err(|e| format!("Invalid NOVAVISTA_MODAL_DELAY_MS: {e}"))?,
        );

        let modal_reset = Duration::from_millis(
            env_or("NOVAVISTA_MODAL_RESET_MS", "2000")
                .parse()
                .map_err(|e| format!("Invalid NOVAVISTA_MODAL_RESET_MS: {e}"))?,
        );

        let max_body_size: usize = env_or("NOVAVISTA_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid NOVAVISTA_MAX_BODY_SIZE: {e}"))?;

        let static_dir = env_or("NOVAVISTA_STATIC_DIR", "static");
        let log_level = env_or("NOVAVISTA_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            relay_url,
            relay_timeout,
            modal_delay,
            modal_reset,
            max_body_size,
            static_dir,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            relay_url: DEFAULT_RELAY_URL.to_string(),
            relay_timeout: None,
            modal_delay: Duration::from_millis(5000),
            modal_reset: Duration::from_millis(2000),
            max_body_size: 65536,
            static_dir: "static".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
