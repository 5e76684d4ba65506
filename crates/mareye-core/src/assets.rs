//! Image asset resolution
//!
//! The dashboard's only external collaborator: static images on the local
//! filesystem (logo, sample detection photos, gallery shots). Lookup never
//! hard-fails on the render path; a missing or unreadable asset resolves to
//! a placeholder the frontend renders instead.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from loading asset bytes
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// How a named asset resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    /// The asset exists on disk
    File(PathBuf),
    /// Missing or unreadable; render the placeholder block instead
    Placeholder,
}

/// Root-anchored lookup over the static image directory
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    root: PathBuf,
}

impl AssetLibrary {
    /// Create a library rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The library's root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a named asset, falling back to the placeholder
    pub fn resolve(&self, name: &str) -> AssetRef {
        let path = self.root.join(name);
        if path.is_file() {
            AssetRef::File(path)
        } else {
            tracing::warn!(asset = name, "asset missing, using placeholder");
            AssetRef::Placeholder
        }
    }

    /// Load an asset's bytes
    pub fn load(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(AssetError::NotFound(name.to_string()));
        }
        Ok(fs::read(path)?)
    }

    /// Sorted image listing of `subdir` for the static galleries
    ///
    /// A missing or unreadable directory yields an empty gallery.
    pub fn gallery(&self, subdir: &str) -> Vec<PathBuf> {
        let dir = self.root.join(subdir);
        let Ok(entries) = fs::read_dir(&dir) else {
            return Vec::new();
        };
        let mut images: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_image(path))
            .collect();
        images.sort();
        images
    }
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    matches!(ext.as_deref(), Some("jpg" | "jpeg" | "png"))
}
