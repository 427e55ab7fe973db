use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::document::Document;
use crate::KubemergeError;

/// Write a kubeconfig document to a YAML file, fully replacing it.
///
/// # Errors
///
/// Returns an error if:
/// - Parent directories cannot be created ([`KubemergeError::WriteFailure`])
/// - The document cannot be serialized ([`KubemergeError::Serialize`])
/// - The file cannot be written ([`KubemergeError::WriteFailure`])
pub fn write_kubeconfig<P: AsRef<Path>>(
    path: P,
    document: &Document,
) -> Result<(), KubemergeError> {
    let path_ref = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path_ref.parent() {
        fs::create_dir_all(parent).map_err(|source| KubemergeError::WriteFailure {
            path: path_ref.to_path_buf(),
            source,
        })?;
    }

    let yaml = serde_yaml::to_string(document)?;
    fs::write(path_ref, yaml).map_err(|source| KubemergeError::WriteFailure {
        path: path_ref.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Create a timestamped backup of a file next to it.
///
/// Returns `None` when the file does not exist yet.
///
/// # Errors
///
/// Returns [`KubemergeError::WriteFailure`] if the copy fails.
pub fn backup_file<P: AsRef<Path>>(path: P) -> Result<Option<PathBuf>, KubemergeError> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        return Ok(None);
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = path_ref.with_file_name(format!(
        "{}.backup.{}",
        path_ref.file_name().and_then(|n| n.to_str()).unwrap_or("config"),
        timestamp
    ));

    fs::copy(path_ref, &backup_path).map_err(|source| KubemergeError::WriteFailure {
        path: backup_path.clone(),
        source,
    })?;

    Ok(Some(backup_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kubeconfig::reader::load_kubeconfig;
    use tempfile::TempDir;

    fn doc(yaml: &str) -> Document {
        serde_yaml::from_str(yaml).expect("test YAML should parse")
    }

    #[test]
    fn test_write_kubeconfig_round_trips() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config");

        let document = doc("clusters:\n  - name: dev\ncurrent-context: dev\n");
        write_kubeconfig(&config_path, &document).expect("write_kubeconfig should succeed");

        let loaded = load_kubeconfig(&config_path).expect("load_kubeconfig should succeed");
        assert_eq!(loaded, document);
    }

    #[test]
    fn test_write_kubeconfig_creates_parent_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join(".kube").join("config");

        let document = doc("clusters: []");
        write_kubeconfig(&config_path, &document).expect("write_kubeconfig should succeed");

        assert!(config_path.exists());
    }

    #[test]
    fn test_write_kubeconfig_overwrites_whole_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config");

        fs::write(&config_path, "stale: content\nleftover: true\n")
            .expect("Failed to write file");

        let document = doc("clusters: []");
        write_kubeconfig(&config_path, &document).expect("write_kubeconfig should succeed");

        let content = fs::read_to_string(&config_path).expect("Failed to read config file");
        assert!(!content.contains("stale"));
        assert!(!content.contains("leftover"));
    }

    #[test]
    fn test_backup_file_existing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("config");

        fs::write(&file_path, "original content").expect("Failed to write original content");

        let backup_path = backup_file(&file_path)
            .expect("backup_file should succeed")
            .expect("Backup path should be present");

        assert!(backup_path.exists());
        assert!(backup_path.to_string_lossy().contains("config.backup."));

        let backup_content =
            fs::read_to_string(&backup_path).expect("Failed to read backup file");
        assert_eq!(backup_content, "original content");
    }

    #[test]
    fn test_backup_file_nonexistent() {
        let result = backup_file("/nonexistent/config")
            .expect("backup_file should succeed for non-existent file");
        assert!(result.is_none());
    }
}
