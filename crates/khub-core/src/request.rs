//! Arguments forwarded to every resolver in a registry.

use crate::handle::ResourceHandle;

/// A request to resolve one resource handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest<H> {
    pub handle: H,
    /// File or directory inside the resource; `None` means the whole resource.
    pub path: Option<String>,
    /// Skip anything already downloaded.
    pub force_download: bool,
}

impl<H: ResourceHandle> ResolveRequest<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handle,
            path: None,
            force_download: false,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn force_download(mut self, force: bool) -> Self {
        self.force_download = force;
        self
    }
}
