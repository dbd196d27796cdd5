//! Error types returned by resolvers and by registry dispatch.

use std::fmt;
use std::io;

use thiserror::Error;

/// Backend that produced an HTTP error.
///
/// Only errors from the Kaggle API and the Colab backend take part in
/// authentication fallback; any other origin is treated as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpOrigin {
    KaggleApi,
    Colab,
    Other,
}

impl fmt::Display for HttpOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpOrigin::KaggleApi => write!(f, "Kaggle API"),
            HttpOrigin::Colab => write!(f, "Colab"),
            HttpOrigin::Other => write!(f, "HTTP"),
        }
    }
}

/// HTTP failure reported by a remote resolver.
///
/// `status` is `None` when the request failed before a response arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub origin: HttpOrigin,
    pub status: Option<u16>,
    pub message: String,
}

impl HttpError {
    pub fn new(origin: HttpOrigin, status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            origin,
            status,
            message: message.into(),
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} error (HTTP {}): {}", self.origin, code, self.message),
            None => write!(f, "{} error (no response): {}", self.origin, self.message),
        }
    }
}

impl std::error::Error for HttpError {}

/// Failure of a single resolver call or of a whole dispatch.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No usable credentials for the backend.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    #[error(transparent)]
    Http(#[from] HttpError),

    /// Every registered resolver declined the call and none failed authentication.
    #[error("Missing implementation that supports: {registry}({args}). Tried {tried:?}")]
    NoImplementation {
        registry: String,
        args: String,
        tried: Vec<String>,
    },

    /// A caller-supplied sub-path would leave the resource directory.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ResolveError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        ResolveError::Io {
            context: context.into(),
            source,
        }
    }
}
