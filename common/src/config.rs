use std::time::Duration;

/// Default settle time allowed for an interface to reach its expected oper status.
pub const DEFAULT_OPER_STATUS_TIMEOUT: Duration = Duration::from_secs(120);

/// Default interval between two oper status reads while waiting.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Topology port exercised by the power update check.
pub const DEFAULT_PORT_ID: &str = "port1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Suppresses banners and headers (1) or per-case trees (2).
    pub quiet: u8,
    pub no_banner: bool,
    /// Topology port whose interface is toggled by the power update check.
    pub port_id: String,
    /// Upper bound on the wait for an oper status transition.
    ///
    /// Expiry fails the current case instead of blocking forever.
    pub oper_status_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_banner: false,
            port_id: DEFAULT_PORT_ID.to_string(),
            oper_status_timeout: DEFAULT_OPER_STATUS_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
