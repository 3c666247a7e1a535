//! Bootstrap errors
//!
//! The todo collection itself never fails; these cover starting the app.

/// Errors raised while booting the app in the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// No global `window` (not running in a browser)
    NoWindow,
    /// The window has no document
    NoDocument,
    /// The page config exists but could not be parsed
    Config(String),
    /// A global logger was already installed
    Logger(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NoWindow => write!(f, "No global window available"),
            AppError::NoDocument => write!(f, "Window has no document"),
            AppError::Config(msg) => write!(f, "Invalid config: {}", msg),
            AppError::Logger(msg) => write!(f, "Logger error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
