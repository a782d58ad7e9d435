use std::path::{Path, PathBuf};

use log::debug;

use super::InjectionExport;
use crate::backend::{BackendError, Injection, InjectionSource};

/// Extension of injection export files
pub const EXPORT_EXTENSION: &str = "json";

/// [`InjectionSource`] over a directory of export files.
///
/// The URI `scheme://host/a/b/inj` maps to `<root>/host/a/b/inj.json`.
#[derive(Debug, Clone)]
pub struct ExportDirectory {
    root: PathBuf,
}

impl ExportDirectory {
    /// Serve exports below `root`
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `uri`
    pub fn path_for_uri(&self, uri: &str) -> Result<PathBuf, BackendError> {
        let location = uri.split_once("://").map_or(uri, |(_, rest)| rest);
        let segments: Vec<&str> = location.split('/').filter(|s| !s.is_empty()).collect();

        let Some((injection_name, parents)) = segments.split_last() else {
            return Err(BackendError::InvalidExport(format!(
                "URI '{}' does not name an injection",
                uri
            )));
        };
        if segments.iter().any(|s| *s == "." || *s == ".." || s.contains('\\')) {
            return Err(BackendError::InvalidExport(format!(
                "URI '{}' escapes the export directory",
                uri
            )));
        }

        // Injection names may contain dots, so the extension is appended
        let mut path = self.root.clone();
        path.extend(parents);
        path.push(format!("{}.{}", injection_name, EXPORT_EXTENSION));
        Ok(path)
    }
}

impl InjectionSource for ExportDirectory {
    fn find_injection(&self, uri: &str) -> Result<Option<Injection>, BackendError> {
        let path = self.path_for_uri(uri)?;
        if !path.is_file() {
            debug!("No export at {} for {}", path.display(), uri);
            return Ok(None);
        }
        debug!("Loading {} from {}", uri, path.display());
        Ok(Some(InjectionExport::from_file(&path)?.into_injection()))
    }
}
