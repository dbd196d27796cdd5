//! Filesystem resolvers: the local download cache and a read-only mounted copy.
//!
//! Both look up the same directory layout (see [`ResourceHandle::base_dir`]).
//! The cache steps aside when a fresh download is forced; the mount cannot be
//! refreshed, so it ignores `force_download`.

mod path;

pub use path::{checked_relative, checked_resource_dir, disk_usage, latest_version};

use std::io;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::handle::ResourceHandle;
use crate::registry::{Resolution, Resolver};
use crate::request::ResolveRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocalKind {
    /// Writable download cache.
    Cache,
    /// Pre-populated read-only directory (e.g. an attached notebook input).
    Mount,
}

/// Resolves handles to directories under `root`.
#[derive(Debug, Clone)]
pub struct LocalResolver {
    kind: LocalKind,
    root: PathBuf,
}

impl LocalResolver {
    pub fn cache(root: impl Into<PathBuf>) -> Self {
        Self {
            kind: LocalKind::Cache,
            root: root.into(),
        }
    }

    pub fn mount(root: impl Into<PathBuf>) -> Self {
        Self {
            kind: LocalKind::Mount,
            root: root.into(),
        }
    }

    fn display_name(&self) -> &'static str {
        match self.kind {
            LocalKind::Cache => "CacheResolver",
            LocalKind::Mount => "MountResolver",
        }
    }

    /// Path of the requested resource (or file inside it), if present on disk.
    fn locate<H: ResourceHandle>(
        &self,
        req: &ResolveRequest<H>,
    ) -> Result<Option<PathBuf>, ResolveError> {
        let mut dir = self.root.join(checked_resource_dir(&req.handle.base_dir())?);

        if req.handle.is_versioned() {
            let version = match req.handle.version() {
                Some(v) => v,
                None => match latest_version(&dir)? {
                    Some(v) => {
                        tracing::debug!(handle = %req.handle, version = v, "using latest local version");
                        v
                    }
                    None => return Ok(None),
                },
            };
            dir.push(version.to_string());
        }

        if let Some(sub) = &req.path {
            dir.push(checked_relative(Path::new(sub))?);
        }

        if path::exists(&dir)? {
            Ok(Some(dir))
        } else {
            Ok(None)
        }
    }
}

impl<H: ResourceHandle> Resolver<ResolveRequest<H>> for LocalResolver {
    fn name(&self) -> &str {
        self.display_name()
    }

    fn is_supported(&self, req: &ResolveRequest<H>) -> Result<bool, ResolveError> {
        if self.kind == LocalKind::Cache && req.force_download {
            return Ok(false);
        }
        Ok(self.locate(req)?.is_some())
    }

    fn resolve(&self, req: &ResolveRequest<H>) -> Result<Resolution, ResolveError> {
        if self.kind == LocalKind::Mount && req.force_download {
            tracing::warn!(
                "Ignoring force_download for {} {}: {} is read-only",
                req.handle.kind(),
                req.handle,
                self.root.display()
            );
        }

        let target = self.locate(req)?.ok_or_else(|| {
            ResolveError::io(
                format!("{} {} under {}", req.handle.kind(), req.handle, self.root.display()),
                io::Error::from(io::ErrorKind::NotFound),
            )
        })?;
        let size = disk_usage(&target)
            .map_err(|e| ResolveError::io(format!("measure {}", target.display()), e))?;

        tracing::info!(
            resolver = self.display_name(),
            handle = %req.handle,
            "resolved to {} ({} bytes)",
            target.display(),
            size
        );
        Ok(Resolution::new(target.to_string_lossy(), Some(size)))
    }
}
