// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for building a gallery index without a manifest.
//!
//! Images directly inside the root directory land in the default group;
//! each immediate subdirectory becomes a group named after it. Files are
//! sorted alphabetically within their group, groups alphabetically after
//! the root entries. Captions default to the file stem.

use crate::error::Result;
use crate::gallery::{GalleryIndex, Thumbnail};
use crate::media;
use std::path::{Path, PathBuf};

/// Scans `root` and builds a gallery index from the images found.
///
/// Returns an error if the root directory cannot be read; unreadable
/// subdirectories are skipped.
pub fn scan(root: &Path) -> Result<GalleryIndex> {
    let mut root_images = Vec::new();
    let mut group_dirs = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && media::is_supported_image(&path) {
            root_images.push(path);
        } else if path.is_dir() {
            group_dirs.push(path);
        }
    }

    sort_by_file_name(&mut root_images);
    group_dirs.sort();

    let mut entries: Vec<Thumbnail> = root_images.into_iter().map(thumbnail_for).collect();

    for dir in group_dirs {
        let Some(group) = dir.file_name().and_then(|n| n.to_str()).map(String::from) else {
            continue;
        };
        let Ok(read_dir) = std::fs::read_dir(&dir) else {
            continue;
        };
        let mut images: Vec<PathBuf> = read_dir
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.is_file() && media::is_supported_image(p))
            .collect();
        sort_by_file_name(&mut images);
        entries.extend(
            images
                .into_iter()
                .map(|path| thumbnail_for(path).with_group(group.clone())),
        );
    }

    Ok(GalleryIndex::new(entries))
}

fn thumbnail_for(path: PathBuf) -> Thumbnail {
    let caption = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(String::from);
    let mut thumb = Thumbnail::new(path);
    if let Some(caption) = caption {
        thumb = thumb.with_caption(caption);
    }
    thumb
}

fn sort_by_file_name(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
}
