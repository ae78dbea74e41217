use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("config error: {0}")]
    Config(String),
    #[error("host registration failed: {0}")]
    Register(#[from] anyhow::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The host's text field is gone; only the refresh task cares.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("log view closed")]
pub struct ViewClosed;
