// SPDX-License-Identifier: MPL-2.0
//! TOML gallery manifest loader.
//!
//! A manifest lists entries explicitly, which gives full control over order,
//! grouping, captions, and full-size variants:
//!
//! ```toml
//! [[image]]
//! source = "thumbs/dunes.jpg"
//! full = "full/dunes.jpg"
//! caption = "Dunes at dusk"
//! group = "landscape"
//! ```
//!
//! Relative paths are resolved against the manifest's directory.

use crate::error::{Error, Result};
use crate::gallery::{GalleryIndex, Thumbnail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "gallery.toml";

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "image")]
    images: Vec<ManifestImage>,
}

#[derive(Debug, Deserialize)]
struct ManifestImage {
    source: PathBuf,
    #[serde(default)]
    full: Option<PathBuf>,
    #[serde(default)]
    caption: Option<String>,
    #[serde(default)]
    group: Option<String>,
}

/// Loads a gallery index from a manifest file.
pub fn load(path: &Path) -> Result<GalleryIndex> {
    let content = fs::read_to_string(path)?;
    let manifest: Manifest = toml::from_str(&content)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    if manifest.images.is_empty() {
        return Err(Error::Gallery(format!(
            "manifest {} lists no images",
            path.display()
        )));
    }

    let entries = manifest
        .images
        .into_iter()
        .map(|image| {
            let mut thumb = Thumbnail::new(resolve(base, image.source));
            if let Some(full) = image.full {
                thumb = thumb.with_full_source(resolve(base, full));
            }
            if let Some(caption) = image.caption {
                thumb = thumb.with_caption(caption);
            }
            if let Some(group) = image.group {
                thumb = thumb.with_group(group);
            }
            thumb
        })
        .collect();

    Ok(GalleryIndex::new(entries))
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
