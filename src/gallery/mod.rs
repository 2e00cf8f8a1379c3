// SPDX-License-Identifier: MPL-2.0
//! Gallery index: the ordered, grouped collection of thumbnails the grid
//! shows and the modal viewer navigates.
//!
//! Entries keep their insertion order. Each entry belongs to exactly one
//! group; entries without an explicit group fall into [`DEFAULT_GROUP`].
//! Navigation inside the viewer is scoped to the group of the entry it was
//! opened from, in index order, wrapping at both ends.

pub mod manifest;
pub mod scanner;

use std::path::{Path, PathBuf};

/// Group assigned to entries that declare none.
pub const DEFAULT_GROUP: &str = "all";

/// A single gallery entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    /// Image shown in the grid.
    pub source: PathBuf,
    /// Higher-resolution variant for the modal viewer, when one exists.
    pub full_source: Option<PathBuf>,
    pub caption: Option<String>,
    group: Option<String>,
}

impl Thumbnail {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            full_source: None,
            caption: None,
            group: None,
        }
    }

    #[must_use]
    pub fn with_full_source(mut self, full_source: impl Into<PathBuf>) -> Self {
        self.full_source = Some(full_source.into());
        self
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Group this entry navigates within.
    pub fn group(&self) -> &str {
        self.group.as_deref().unwrap_or(DEFAULT_GROUP)
    }

    /// The image the viewer should load: the full-size variant when present,
    /// otherwise the grid thumbnail itself.
    pub fn best_source(&self) -> &Path {
        self.full_source.as_deref().unwrap_or(&self.source)
    }
}

/// Ordered collection of thumbnails with group-scoped lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryIndex {
    entries: Vec<Thumbnail>,
}

impl GalleryIndex {
    pub fn new(entries: Vec<Thumbnail>) -> Self {
        Self { entries }
    }

    /// All entries in insertion order, across groups.
    pub fn entries(&self) -> &[Thumbnail] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Group names in first-seen order.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !groups.contains(&entry.group()) {
                groups.push(entry.group());
            }
        }
        groups
    }

    /// Number of entries in `group`.
    pub fn group_len(&self, group: &str) -> usize {
        self.entries.iter().filter(|e| e.group() == group).count()
    }

    /// Entry at position `index` within `group`, counting only that group's
    /// entries in insertion order.
    pub fn entry(&self, group: &str, index: usize) -> Option<&Thumbnail> {
        self.entries
            .iter()
            .filter(|e| e.group() == group)
            .nth(index)
    }

    /// Maps a position in the full entry list to its (group, in-group index)
    /// coordinates. This is what the grid passes to the viewer on click.
    pub fn locate(&self, flat_index: usize) -> Option<(&str, usize)> {
        let entry = self.entries.get(flat_index)?;
        let group = entry.group();
        let index = self.entries[..flat_index]
            .iter()
            .filter(|e| e.group() == group)
            .count();
        Some((group, index))
    }
}
