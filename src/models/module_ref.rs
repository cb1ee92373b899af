use crate::error::{PrepareError, Result};
use std::path::{Component, Path, PathBuf};

/// Trailing `/<target>` segment stripped from dependency module paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSuffix(String);

impl TargetSuffix {
    /// Build the suffix from a target name. Returns `None` for an empty name.
    pub fn from_target(target: &str) -> Option<Self> {
        let target = target.trim_matches('/');
        if target.is_empty() {
            return None;
        }
        Some(Self(format!("/{}", target)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A dependency module location as passed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRef(String);

impl ModuleRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Empty references come from the build system serializing an empty list
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn source(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Module path with one trailing occurrence of `suffix` removed
    pub fn strip_target<'a>(&'a self, suffix: &TargetSuffix) -> &'a str {
        self.0.strip_suffix(suffix.as_str()).unwrap_or(self.0.as_str())
    }

    /// Path of the module relative to the output directory
    pub fn destination_subpath(&self, suffix: &TargetSuffix) -> Result<PathBuf> {
        let stripped = self.strip_target(suffix);
        let mut subpath = PathBuf::new();

        for component in Path::new(stripped).components() {
            match component {
                Component::Normal(part) => subpath.push(part),
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
                Component::ParentDir => {
                    return Err(PrepareError::MalformedModuleRef {
                        value: self.0.clone(),
                        reason: "parent directory components are not allowed".to_string(),
                    })
                }
            }
        }

        Ok(subpath)
    }

    /// Absolute destination of the module under `out`
    pub fn destination(&self, out: &Path, suffix: &TargetSuffix) -> Result<PathBuf> {
        Ok(out.join(self.destination_subpath(suffix)?))
    }
}

impl From<&str> for ModuleRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Split raw `--modules` values into non-empty references and a count of skipped empties
pub fn partition_modules(raw: &[String]) -> (Vec<ModuleRef>, usize) {
    let (empty, modules): (Vec<ModuleRef>, Vec<ModuleRef>) = raw
        .iter()
        .map(|value| ModuleRef::new(value.as_str()))
        .partition(ModuleRef::is_empty);

    (modules, empty.len())
}
