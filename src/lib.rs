#![allow(missing_docs)]

use std::path::PathBuf;

pub mod cli;
pub mod document;
pub mod interact;
pub mod kubeconfig;
pub mod merge;
pub mod selector;

pub use document::{Document, DocumentRole, Section};
pub use merge::{CollisionPolicy, MergeEvent, SectionMerger};
pub use selector::ActiveContextSelector;

#[derive(Debug, thiserror::Error)]
pub enum KubemergeError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("could not read {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse YAML in {path}: {source}")]
    MalformedInput {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("the {section} section in the {role} file is not a list")]
    MalformedSection { section: Section, role: DocumentRole },

    #[error("the kubeconfig at {0} is not a YAML mapping")]
    InvalidTargetShape(PathBuf),

    #[error("could not write YAML to {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not serialize kubeconfig: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("no context named '{0}' exists in the merged kubeconfig")]
    UnknownContext(String),

    #[error("interactive prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
