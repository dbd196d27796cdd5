//! Fallback dispatch over the registered resolvers.

use std::fmt;

use super::classify::{classify, FailureKind};
use super::{Registry, Resolution};
use crate::error::ResolveError;

impl<A: fmt::Debug + ?Sized> Registry<A> {
    /// Resolve `args` with the most recently registered resolver that supports it.
    ///
    /// Resolvers are visited in reverse registration order. An authentication
    /// failure moves on to the next resolver; any other error is returned as is.
    /// When all resolvers are exhausted, the last authentication error is
    /// returned if there was one, otherwise [`ResolveError::NoImplementation`].
    pub fn dispatch(&self, args: &A) -> Result<Resolution, ResolveError> {
        let mut tried: Vec<String> = Vec::new();
        let mut last_auth_error: Option<ResolveError> = None;

        for resolver in self.impls.iter().rev() {
            let name = resolver.name();
            tracing::debug!(registry = %self.name, resolver = name, "trying resolver");

            let attempt = resolver.is_supported(args).and_then(|supported| {
                if supported {
                    resolver.resolve(args).map(Some)
                } else {
                    Ok(None)
                }
            });

            match attempt {
                Ok(Some(resolution)) => {
                    tracing::debug!(
                        registry = %self.name,
                        resolver = name,
                        location = %resolution.location,
                        "resolved"
                    );
                    return Ok(resolution);
                }
                Ok(None) => tried.push(name.to_string()),
                Err(err) => match classify(&err) {
                    FailureKind::Auth => {
                        tracing::warn!(
                            registry = %self.name,
                            "Authentication failed for resolver {}; trying next fallback.",
                            name
                        );
                        tried.push(name.to_string());
                        last_auth_error = Some(err);
                    }
                    FailureKind::Fatal => return Err(err),
                },
            }
        }

        if let Some(err) = last_auth_error {
            return Err(err);
        }

        Err(ResolveError::NoImplementation {
            registry: self.name.clone(),
            args: format!("{:?}", args),
            tried,
        })
    }
}
