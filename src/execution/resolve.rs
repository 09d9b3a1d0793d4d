//! Executable lookup on the search path.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::trace;

/// Resolves an executable name to an absolute path.
pub trait Resolver: Send + Sync {
    /// Look up `name`, returning `None` if it cannot be found.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Resolver backed by the `which` crate.
///
/// Uses `PATH` unless an explicit search path is configured. Nothing is
/// cached: every call performs a fresh lookup.
#[derive(Debug, Clone, Default)]
pub struct SearchPathResolver {
    search_path: Option<OsString>,
}

impl SearchPathResolver {
    /// Resolve against the process `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve against an explicit search path (same syntax as `PATH`).
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl Resolver for SearchPathResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let found = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
                which::which_in(name, Some(paths), cwd)
            }
            None => which::which(name),
        };

        match found {
            Ok(path) => {
                trace!("resolved {} to {}", name, path.display());
                Some(path)
            }
            Err(e) => {
                trace!("failed to resolve {}: {}", name, e);
                None
            }
        }
    }
}
