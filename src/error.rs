use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing a module or workspace
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("destination already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("malformed --srcs value {value:?}: {reason}")]
    MalformedSources { value: String, reason: String },

    #[error("malformed module reference {value:?}: {reason}")]
    MalformedModuleRef { value: String, reason: String },

    #[error("build target is empty; pass a non-empty --target or TERRAFORM_TARGET")]
    MissingTarget,

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl PrepareError {
    /// Wrap an io::Error, promoting not-found and already-exists to their own variants
    pub fn io(path: impl Into<PathBuf>, context: impl Into<String>, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => PrepareError::NotFound(path.into()),
            io::ErrorKind::AlreadyExists => PrepareError::AlreadyExists(path.into()),
            _ => PrepareError::Io {
                context: context.into(),
                source,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, PrepareError>;
