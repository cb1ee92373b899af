use crate::config::WorkspaceConfig;
use crate::error::{PrepareError, Result};
use crate::models::source_list::relative_dir;
use crate::models::SourceList;
use crate::services::{copy_modules, PrepareReport};
use crate::utils::copy_file_into;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Assemble a workspace: the package's own sources plus copies of its dependency modules
pub fn prepare_workspace(config: &WorkspaceConfig) -> Result<PrepareReport> {
    let out = &config.common.out;
    let sources = SourceList::parse(&config.srcs)?;

    if config.common.modules.iter().any(|m| !m.is_empty()) {
        config.common.require_target()?;
    }

    create_dir_all(out)?;
    info!("Copying {} source file(s) into {}", sources.len(), out.display());

    let copied_sources = sources
        .iter()
        .map(|src| copy_source(&config.pkg_dir, src, out))
        .collect::<Result<Vec<_>>>()?;

    let (copied_modules, skipped_modules) = copy_modules(&config.common)?;

    Ok(PrepareReport {
        copied_sources,
        copied_modules,
        skipped_modules,
        ..Default::default()
    })
}

/// Copy `<pkg_dir>/<src>` to the same relative location under `out`
fn copy_source(pkg_dir: &Path, src: &str, out: &Path) -> Result<PathBuf> {
    let dest_dir = match relative_dir(src) {
        Some(dir) => {
            let dest_dir = out.join(dir);
            create_dir_all(&dest_dir)?;
            dest_dir
        }
        None => out.to_path_buf(),
    };

    let copied = copy_file_into(pkg_dir.join(src), &dest_dir)?;
    debug!("Copied {} to {}", src, copied.display());
    Ok(copied)
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| PrepareError::Io {
        context: format!("Failed to create directory: {:?}", path),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommonConfig;
    use tempfile::TempDir;

    fn workspace(tmp: &Path, srcs: &str, modules: Vec<String>) -> WorkspaceConfig {
        WorkspaceConfig {
            common: CommonConfig::new(tmp.join("out"), Some("mymodule"), modules),
            pkg_dir: tmp.join("pkg"),
            srcs: srcs.to_string(),
        }
    }

    #[test]
    fn test_copies_sources_preserving_subdirs() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("pkg/b")).unwrap();
        fs::write(tmp.path().join("pkg/a.tf"), "a").unwrap();
        fs::write(tmp.path().join("pkg/b/c.tf"), "c").unwrap();

        let report = prepare_workspace(&workspace(tmp.path(), "[a.tf b/c.tf]", vec![])).unwrap();

        assert_eq!(fs::read_to_string(tmp.path().join("out/a.tf")).unwrap(), "a");
        assert_eq!(fs::read_to_string(tmp.path().join("out/b/c.tf")).unwrap(), "c");
        assert_eq!(report.copied_sources.len(), 2);
    }

    #[test]
    fn test_malformed_srcs_fails_before_touching_out() {
        let tmp = TempDir::new().unwrap();
        let err = prepare_workspace(&workspace(tmp.path(), "a.tf b.tf", vec![])).unwrap_err();

        assert!(matches!(err, PrepareError::MalformedSources { .. }));
        assert!(!tmp.path().join("out").exists());
    }

    #[test]
    fn test_source_outside_pkg_dir_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("pkg")).unwrap();
        fs::write(tmp.path().join("pkg/x.tf"), "x").unwrap();

        let err = prepare_workspace(&workspace(tmp.path(), "[../pkg/x.tf]", vec![])).unwrap_err();

        assert!(matches!(err, PrepareError::MalformedSources { .. }));
        assert!(!tmp.path().join("out").exists());
        assert!(!tmp.path().join("x.tf").exists());
    }

    #[test]
    fn test_missing_source_is_not_found() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("pkg")).unwrap();

        let err = prepare_workspace(&workspace(tmp.path(), "[missing.tf]", vec![])).unwrap_err();
        assert!(matches!(err, PrepareError::NotFound(p) if p.ends_with("missing.tf")));
    }

    #[test]
    fn test_existing_out_dir_is_reused() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("pkg")).unwrap();
        fs::write(tmp.path().join("pkg/a.tf"), "a").unwrap();
        fs::create_dir_all(tmp.path().join("out/unrelated")).unwrap();

        prepare_workspace(&workspace(tmp.path(), "[a.tf]", vec![])).unwrap();

        assert!(tmp.path().join("out/unrelated").is_dir());
        assert!(tmp.path().join("out/a.tf").is_file());
    }
}
