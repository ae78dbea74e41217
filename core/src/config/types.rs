use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub capture: CaptureConfig,

    #[serde(default)]
    pub panel: PanelConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Maximum number of characters retained; older output is dropped.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

fn default_max_chars() -> usize {
    150_000
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Tab title shown by the host.
    #[serde(default = "default_title")]
    pub title: String,

    /// Stable identifier the host uses for the tab.
    #[serde(default = "default_tab_id")]
    pub tab_id: String,

    /// Text shown while the buffer is still empty.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// Visible line count hint for the host's text field.
    #[serde(default = "default_lines")]
    pub lines: u32,
}

fn default_title() -> String {
    "Live Logs".to_string()
}

fn default_tab_id() -> String {
    "live_logs_tab".to_string()
}

fn default_placeholder() -> String {
    "(no logs yet — try running generation or other console actions)".to_string()
}

fn default_refresh_interval_ms() -> u64 {
    1000
}

fn default_lines() -> u32 {
    25
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tab_id: default_tab_id(),
            placeholder: default_placeholder(),
            refresh_interval_ms: default_refresh_interval_ms(),
            lines: default_lines(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// EnvFilter string, e.g. "info" or "loglive_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            level: default_logging_level(),
        }
    }
}
