//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Explorer Client
//!
//! Fetch failures are split by the endpoint that produced them so the
//! navigator can log each one in context. None of them is fatal: the
//! navigator logs and keeps its last good state.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// `GET /api/config` failed (transport, status or decode).
    #[error("Config fetch failed: {reason}")]
    ConfigFetch { reason: String },

    /// `GET /api/browse` failed for `path`.
    #[error("Browse failed for {path:?}: {reason}")]
    BrowseFetch { path: String, reason: String },

    /// `GET /api/search` failed for `query` within `scope`.
    #[error("Search for {query:?} in {scope:?} failed: {reason}")]
    SearchFetch {
        query: String,
        scope: String,
        reason: String,
    },

    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Raw mode, alternate screen or frame drawing failed.
    #[error("Terminal error while {action}: {source}")]
    Terminal {
        action: String,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn config_fetch<S: Into<String>>(reason: S) -> Self {
        Self::ConfigFetch {
            reason: reason.into(),
        }
    }

    pub fn browse_fetch<P: Into<String>, S: Into<String>>(path: P, reason: S) -> Self {
        Self::BrowseFetch {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn search_fetch<Q, P, S>(query: Q, scope: P, reason: S) -> Self
    where
        Q: Into<String>,
        P: Into<String>,
        S: Into<String>,
    {
        Self::SearchFetch {
            query: query.into(),
            scope: scope.into(),
            reason: reason.into(),
        }
    }

    pub fn terminal<S: Into<String>>(action: S, source: io::Error) -> Self {
        Self::Terminal {
            action: action.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn fetch_failures_render_their_context() {
        let err = AppError::search_fetch("report", "/docs", "HTTP 500");
        assert_eq!(
            err.to_string(),
            "Search for \"report\" in \"/docs\" failed: HTTP 500"
        );

        let err = AppError::browse_fetch("/missing", "HTTP 404 Not Found");
        assert!(err.to_string().contains("/missing"));
    }

    #[test]
    fn terminal_errors_keep_their_source() {
        let err = AppError::terminal(
            "enabling raw mode",
            io::Error::new(io::ErrorKind::Unsupported, "not a tty"),
        );
        assert_eq!(
            err.to_string(),
            "Terminal error while enabling raw mode: not a tty"
        );
        assert!(err.source().is_some());
    }
}
