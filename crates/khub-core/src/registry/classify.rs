//! Classify resolver errors into "fall back" vs "abort".

use crate::error::{HttpError, HttpOrigin, ResolveError};

const UNAUTHORIZED: u16 = 401;
const FORBIDDEN: u16 = 403;

/// How dispatch reacts to a resolver error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Credentials missing or rejected; try the next resolver.
    Auth,
    /// Anything else; stop and return the error.
    Fatal,
}

/// Classify an HTTP status from a given backend.
///
/// Only 401/403 from the Kaggle API or Colab count as authentication failures.
pub fn classify_http_status(origin: HttpOrigin, status: Option<u16>) -> FailureKind {
    match (origin, status) {
        (HttpOrigin::KaggleApi | HttpOrigin::Colab, Some(UNAUTHORIZED | FORBIDDEN)) => {
            FailureKind::Auth
        }
        _ => FailureKind::Fatal,
    }
}

pub fn classify(err: &ResolveError) -> FailureKind {
    match err {
        ResolveError::Unauthenticated(_) => FailureKind::Auth,
        ResolveError::Http(HttpError { origin, status, .. }) => {
            classify_http_status(*origin, *status)
        }
        ResolveError::NoImplementation { .. }
        | ResolveError::InvalidPath { .. }
        | ResolveError::Io { .. }
        | ResolveError::Other(_) => FailureKind::Fatal,
    }
}

pub fn is_auth_failure(err: &ResolveError) -> bool {
    classify(err) == FailureKind::Auth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_is_auth() {
        let e = ResolveError::Unauthenticated("no credentials".into());
        assert_eq!(classify(&e), FailureKind::Auth);
        assert!(is_auth_failure(&e));
    }

    #[test]
    fn kaggle_and_colab_401_403_are_auth() {
        for origin in [HttpOrigin::KaggleApi, HttpOrigin::Colab] {
            assert_eq!(classify_http_status(origin, Some(401)), FailureKind::Auth);
            assert_eq!(classify_http_status(origin, Some(403)), FailureKind::Auth);
        }
    }

    #[test]
    fn other_statuses_are_fatal() {
        assert_eq!(
            classify_http_status(HttpOrigin::KaggleApi, Some(404)),
            FailureKind::Fatal
        );
        assert_eq!(
            classify_http_status(HttpOrigin::Colab, Some(500)),
            FailureKind::Fatal
        );
        assert_eq!(
            classify_http_status(HttpOrigin::KaggleApi, None),
            FailureKind::Fatal
        );
    }

    #[test]
    fn auth_status_from_other_origin_is_fatal() {
        let e = ResolveError::Http(HttpError::new(HttpOrigin::Other, Some(401), "nope"));
        assert_eq!(classify(&e), FailureKind::Fatal);
        let e = ResolveError::Http(HttpError::new(HttpOrigin::Other, Some(403), "nope"));
        assert!(!is_auth_failure(&e));
    }

    #[test]
    fn io_and_anyhow_are_fatal() {
        let e = ResolveError::io(
            "stat",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(classify(&e), FailureKind::Fatal);
        let e = ResolveError::Other(anyhow::anyhow!("boom"));
        assert_eq!(classify(&e), FailureKind::Fatal);
    }
}
