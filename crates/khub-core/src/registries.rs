//! One fallback registry per resource type, built once at startup.

use anyhow::Result;

use crate::config::KhubConfig;
use crate::handle::{CompetitionHandle, DatasetHandle, ModelHandle, NotebookHandle};
use crate::local::LocalResolver;
use crate::registry::Registry;
use crate::request::ResolveRequest;

pub type ModelRegistry = Registry<ResolveRequest<ModelHandle>>;
pub type DatasetRegistry = Registry<ResolveRequest<DatasetHandle>>;
pub type CompetitionRegistry = Registry<ResolveRequest<CompetitionHandle>>;
pub type NotebookOutputRegistry = Registry<ResolveRequest<NotebookHandle>>;

/// The resolver registries for every resource type.
///
/// Owned by the application entry point and passed by reference to whatever
/// needs to resolve handles.
#[derive(Debug)]
pub struct Registries {
    pub model: ModelRegistry,
    pub dataset: DatasetRegistry,
    pub competition: CompetitionRegistry,
    pub notebook_output: NotebookOutputRegistry,
}

impl Default for Registries {
    fn default() -> Self {
        Self::new()
    }
}

impl Registries {
    /// Empty registries.
    pub fn new() -> Self {
        Self {
            model: Registry::new("ModelResolver"),
            dataset: Registry::new("DatasetResolver"),
            competition: Registry::new("CompetitionResolver"),
            notebook_output: Registry::new("NotebookOutputResolver"),
        }
    }

    /// Registries with the local resolvers from `cfg`: the cache, then the
    /// mount directory when configured (so the mount is tried first).
    pub fn from_config(cfg: &KhubConfig) -> Result<Self> {
        let mut regs = Self::new();
        regs.register_local(LocalResolver::cache(cfg.cache_root()?));
        if let Some(mount) = &cfg.mount_dir {
            regs.register_local(LocalResolver::mount(mount));
        }
        Ok(regs)
    }

    /// Register the same local resolver with every registry.
    pub fn register_local(&mut self, resolver: LocalResolver) {
        self.model.add_implementation(Box::new(resolver.clone()));
        self.dataset.add_implementation(Box::new(resolver.clone()));
        self.competition.add_implementation(Box::new(resolver.clone()));
        self.notebook_output.add_implementation(Box::new(resolver));
    }

    /// `(registry name, resolver names in registration order)` for each registry.
    pub fn describe(&self) -> Vec<(&str, Vec<&str>)> {
        vec![
            (self.model.name(), self.model.implementation_names()),
            (self.dataset.name(), self.dataset.implementation_names()),
            (self.competition.name(), self.competition.implementation_names()),
            (
                self.notebook_output.name(),
                self.notebook_output.implementation_names(),
            ),
        ]
    }
}
