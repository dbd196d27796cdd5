//! Fallback registry: ordered resolver implementations for one kind of request.
//!
//! Resolvers are tried newest-first. The first one that reports itself as
//! supported and resolves successfully wins; authentication failures fall
//! through to the next resolver, any other failure aborts the call.

mod classify;
mod dispatch;

pub use classify::{classify, classify_http_status, is_auth_failure, FailureKind};

use serde::Serialize;

use crate::error::ResolveError;

/// Where a resource was found and, when known, its size in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub location: String,
    pub size: Option<u64>,
}

impl Resolution {
    pub fn new(location: impl Into<String>, size: Option<u64>) -> Self {
        Self {
            location: location.into(),
            size,
        }
    }
}

/// One strategy for resolving requests of type `A`.
pub trait Resolver<A: ?Sized>: Send + Sync {
    /// Name shown in diagnostics. Defaults to the implementing type's name.
    fn name(&self) -> &str {
        short_type_name::<Self>()
    }

    fn is_supported(&self, args: &A) -> Result<bool, ResolveError>;

    fn resolve(&self, args: &A) -> Result<Resolution, ResolveError>;
}

/// Named, append-only list of resolvers.
pub struct Registry<A: ?Sized> {
    name: String,
    impls: Vec<Box<dyn Resolver<A>>>,
}

impl<A: ?Sized> Registry<A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            impls: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a resolver. Later registrations are tried first.
    pub fn add_implementation(&mut self, resolver: Box<dyn Resolver<A>>) {
        tracing::debug!(
            registry = %self.name,
            resolver = resolver.name(),
            "registered resolver"
        );
        self.impls.push(resolver);
    }

    pub fn len(&self) -> usize {
        self.impls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.impls.is_empty()
    }

    /// Resolver names in registration order.
    pub fn implementation_names(&self) -> Vec<&str> {
        self.impls.iter().map(|r| r.name()).collect()
    }
}

impl<A: ?Sized> std::fmt::Debug for Registry<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("impls", &self.implementation_names())
            .finish()
    }
}

/// Last path segment of a type name, without generic arguments.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
