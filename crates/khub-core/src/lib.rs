pub mod config;
pub mod logging;

pub mod error;
pub mod handle;
pub mod local;
pub mod registries;
pub mod registry;
pub mod request;

pub use error::{HttpError, HttpOrigin, ResolveError};
pub use registries::Registries;
pub use registry::{Registry, Resolution, Resolver};
pub use request::ResolveRequest;
