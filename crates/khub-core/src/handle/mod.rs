//! Resource handles: which model, dataset, competition or notebook output to resolve.
//!
//! Handles are parsed from their slash-separated string form and know the
//! directory layout a local resolver uses to find them.

mod parse;

pub use parse::HandleError;

use std::fmt;
use std::path::PathBuf;

/// Kind of resource a handle points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Model,
    Dataset,
    Competition,
    NotebookOutput,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Model => write!(f, "model"),
            ResourceKind::Dataset => write!(f, "dataset"),
            ResourceKind::Competition => write!(f, "competition"),
            ResourceKind::NotebookOutput => write!(f, "notebook output"),
        }
    }
}

/// Common view of a handle used by resolvers.
pub trait ResourceHandle: fmt::Debug + fmt::Display + Send + Sync {
    fn kind(&self) -> ResourceKind;

    /// Explicit version, if the handle pins one.
    fn version(&self) -> Option<u32>;

    /// Whether resources of this kind live under numbered version directories.
    fn is_versioned(&self) -> bool {
        true
    }

    /// Path relative to a resolver root. For versioned kinds this is the
    /// directory containing the numbered versions; otherwise the resource itself.
    fn base_dir(&self) -> PathBuf;
}

/// `owner/model/framework/variation[/version]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelHandle {
    pub owner: String,
    pub model: String,
    pub framework: String,
    pub variation: String,
    pub version: Option<u32>,
}

/// `owner/dataset[/versions/N]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetHandle {
    pub owner: String,
    pub dataset: String,
    pub version: Option<u32>,
}

/// `competition`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitionHandle {
    pub competition: String,
}

/// `owner/notebook[/versions/N]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookHandle {
    pub owner: String,
    pub notebook: String,
    pub version: Option<u32>,
}

impl ResourceHandle for ModelHandle {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Model
    }

    fn version(&self) -> Option<u32> {
        self.version
    }

    fn base_dir(&self) -> PathBuf {
        [
            "models",
            self.owner.as_str(),
            self.model.as_str(),
            self.framework.as_str(),
            self.variation.as_str(),
        ]
        .iter()
        .collect()
    }
}

impl ResourceHandle for DatasetHandle {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Dataset
    }

    fn version(&self) -> Option<u32> {
        self.version
    }

    fn base_dir(&self) -> PathBuf {
        ["datasets", self.owner.as_str(), self.dataset.as_str(), "versions"]
            .iter()
            .collect()
    }
}

impl ResourceHandle for CompetitionHandle {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Competition
    }

    fn version(&self) -> Option<u32> {
        None
    }

    fn is_versioned(&self) -> bool {
        false
    }

    fn base_dir(&self) -> PathBuf {
        ["competitions", self.competition.as_str()].iter().collect()
    }
}

impl ResourceHandle for NotebookHandle {
    fn kind(&self) -> ResourceKind {
        ResourceKind::NotebookOutput
    }

    fn version(&self) -> Option<u32> {
        self.version
    }

    fn base_dir(&self) -> PathBuf {
        [
            "notebooks",
            self.owner.as_str(),
            self.notebook.as_str(),
            "output",
            "versions",
        ]
        .iter()
        .collect()
    }
}

impl fmt::Display for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.owner, self.model, self.framework, self.variation
        )?;
        if let Some(v) = self.version {
            write!(f, "/{}", v)?;
        }
        Ok(())
    }
}

impl fmt::Display for DatasetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.dataset)?;
        if let Some(v) = self.version {
            write!(f, "/versions/{}", v)?;
        }
        Ok(())
    }
}

impl fmt::Display for CompetitionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.competition)
    }
}

impl fmt::Display for NotebookHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.notebook)?;
        if let Some(v) = self.version {
            write!(f, "/versions/{}", v)?;
        }
        Ok(())
    }
}
