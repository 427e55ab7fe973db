use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::document::Document;
use crate::KubemergeError;

/// Read a kubeconfig document from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`KubemergeError::NotFound`])
/// - The file cannot be read ([`KubemergeError::ReadFailure`])
/// - The content is not valid YAML ([`KubemergeError::MalformedInput`])
/// - The document root is not a mapping ([`KubemergeError::InvalidTargetShape`])
pub fn load_kubeconfig<P: AsRef<Path>>(path: P) -> Result<Document, KubemergeError> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        return Err(KubemergeError::NotFound(path_ref.to_path_buf()));
    }

    let content = fs::read_to_string(path_ref).map_err(|source| {
        KubemergeError::ReadFailure { path: path_ref.to_path_buf(), source }
    })?;

    let value: Value = serde_yaml::from_str(&content).map_err(|source| {
        KubemergeError::MalformedInput { path: path_ref.to_path_buf(), source }
    })?;

    match value {
        Value::Mapping(document) => Ok(document),
        _ => Err(KubemergeError::InvalidTargetShape(path_ref.to_path_buf())),
    }
}
