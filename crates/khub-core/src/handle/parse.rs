//! Parse handle strings.

use std::str::FromStr;

use thiserror::Error;

use super::{CompetitionHandle, DatasetHandle, ModelHandle, NotebookHandle, ResourceKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleError {
    #[error("invalid {kind} handle {handle:?}: expected {expected}")]
    Malformed {
        kind: ResourceKind,
        handle: String,
        expected: &'static str,
    },
    #[error("invalid version {value:?} in handle {handle:?}: must be a non-negative integer")]
    InvalidVersion { handle: String, value: String },
}

const MODEL_FORMAT: &str = "owner/model/framework/variation[/version]";
const DATASET_FORMAT: &str = "owner/dataset[/versions/N]";
const COMPETITION_FORMAT: &str = "a single competition slug";
const NOTEBOOK_FORMAT: &str = "owner/notebook[/versions/N]";

/// Split on '/' and reject empty, `.` and `..` segments.
fn segments<'a>(
    s: &'a str,
    kind: ResourceKind,
    expected: &'static str,
) -> Result<Vec<&'a str>, HandleError> {
    let parts: Vec<&str> = s.trim().split('/').collect();
    if parts
        .iter()
        .any(|p| p.trim().is_empty() || *p == "." || *p == "..")
    {
        return Err(malformed(s, kind, expected));
    }
    Ok(parts)
}

fn malformed(s: &str, kind: ResourceKind, expected: &'static str) -> HandleError {
    HandleError::Malformed {
        kind,
        handle: s.to_string(),
        expected,
    }
}

fn parse_version(s: &str, value: &str) -> Result<u32, HandleError> {
    value.parse().map_err(|_| HandleError::InvalidVersion {
        handle: s.to_string(),
        value: value.to_string(),
    })
}

/// `owner/name` or `owner/name/versions/N`, shared by datasets and notebooks.
fn owner_name_version<'a>(
    s: &'a str,
    kind: ResourceKind,
    expected: &'static str,
) -> Result<(&'a str, &'a str, Option<u32>), HandleError> {
    match segments(s, kind, expected)?.as_slice() {
        [owner, name] => Ok((*owner, *name, None)),
        [owner, name, "versions", v] => Ok((*owner, *name, Some(parse_version(s, v)?))),
        _ => Err(malformed(s, kind, expected)),
    }
}

impl FromStr for ModelHandle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = segments(s, ResourceKind::Model, MODEL_FORMAT)?;
        let (base, version) = match parts.as_slice() {
            [base @ .., v] if parts.len() == 5 => (base, Some(parse_version(s, v)?)),
            base if parts.len() == 4 => (base, None),
            _ => return Err(malformed(s, ResourceKind::Model, MODEL_FORMAT)),
        };
        Ok(ModelHandle {
            owner: base[0].to_string(),
            model: base[1].to_string(),
            framework: base[2].to_string(),
            variation: base[3].to_string(),
            version,
        })
    }
}

impl FromStr for DatasetHandle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, dataset, version) =
            owner_name_version(s, ResourceKind::Dataset, DATASET_FORMAT)?;
        Ok(DatasetHandle {
            owner: owner.to_string(),
            dataset: dataset.to_string(),
            version,
        })
    }
}

impl FromStr for CompetitionHandle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match segments(s, ResourceKind::Competition, COMPETITION_FORMAT)?.as_slice() {
            [competition] => Ok(CompetitionHandle {
                competition: competition.to_string(),
            }),
            _ => Err(malformed(s, ResourceKind::Competition, COMPETITION_FORMAT)),
        }
    }
}

impl FromStr for NotebookHandle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, notebook, version) =
            owner_name_version(s, ResourceKind::NotebookOutput, NOTEBOOK_FORMAT)?;
        Ok(NotebookHandle {
            owner: owner.to_string(),
            notebook: notebook.to_string(),
            version,
        })
    }
}
