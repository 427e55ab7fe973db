#![allow(clippy::self_named_module_files)]

use std::path::PathBuf;

pub mod reader;
pub mod writer;

pub use reader::load_kubeconfig;
pub use writer::{backup_file, write_kubeconfig};

/// The default kubeconfig location: `~/.kube/config`.
///
/// `$KUBECONFIG` is handled at the CLI layer; only the home-relative
/// fallback lives here.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_path() -> anyhow::Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
        .home_dir()
        .to_path_buf();
    Ok(home.join(".kube").join("config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_kube_config() {
        let path = default_path().expect("default_path should succeed");
        assert!(path.ends_with(".kube/config"));
    }
}
