use crate::error::{PrepareError, Result};
use std::path::{Component, Path, PathBuf};

/// Source files of a workspace, parsed from the `[a.tf b/c.tf]` encoding used by the build system
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceList {
    sources: Vec<String>,
}

impl SourceList {
    /// Parse a bracketed, single-space separated list. Paths cannot contain spaces.
    pub fn parse(value: &str) -> Result<Self> {
        let malformed = |reason: &str| PrepareError::MalformedSources {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let inner = value
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| malformed("expected a value enclosed in '[' and ']'"))?;

        if inner.trim().is_empty() {
            return Ok(Self::default());
        }

        let sources: Vec<String> = inner.split(' ').map(str::to_string).collect();
        if sources.iter().any(String::is_empty) {
            return Err(malformed("empty entry between separators"));
        }
        if sources.iter().any(|src| escapes_root(src)) {
            return Err(malformed("entries must be relative paths without '..'"));
        }

        Ok(Self { sources })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn escapes_root(src: &str) -> bool {
    Path::new(src).components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}

/// Relative directory containing `src`, or `None` when it sits at the package root
pub fn relative_dir(src: &str) -> Option<PathBuf> {
    Path::new(src)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bracketed_list() {
        let list = SourceList::parse("[a.tf b/c.tf]").unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a.tf", "b/c.tf"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(SourceList::parse("[]").unwrap().is_empty());
        assert!(SourceList::parse("[ ]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_brackets() {
        for value in ["a.tf b.tf", "[a.tf", "a.tf]", ""] {
            let err = SourceList::parse(value).unwrap_err();
            assert!(
                matches!(err, PrepareError::MalformedSources { .. }),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_double_space() {
        let err = SourceList::parse("[a.tf  b.tf]").unwrap_err();
        assert!(matches!(err, PrepareError::MalformedSources { .. }));
    }

    #[test]
    fn test_parse_rejects_escaping_entries() {
        for value in ["[../pkg/x.tf]", "[a.tf /etc/x.tf]", "[b/../../x.tf]"] {
            let err = SourceList::parse(value).unwrap_err();
            assert!(
                matches!(err, PrepareError::MalformedSources { .. }),
                "{value:?} should be rejected"
            );
        }
        assert_eq!(SourceList::parse("[./a.tf]").unwrap().len(), 1);
    }

    #[test]
    fn test_relative_dir() {
        assert_eq!(relative_dir("a.tf"), None);
        assert_eq!(relative_dir("b/c.tf"), Some(PathBuf::from("b")));
        assert_eq!(relative_dir("x/y/z.tf"), Some(PathBuf::from("x/y")));
    }
}
