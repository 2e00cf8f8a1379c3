// SPDX-License-Identifier: MPL-2.0
use crate::error;
use crate::lightbox;
use crate::media::ImageData;
use std::path::PathBuf;
use std::time::Instant;

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Language override, e.g. `--lang he`.
    pub lang: Option<String>,
    /// Gallery manifest file or directory to scan. Defaults to the current
    /// directory.
    pub gallery_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Lightbox(lightbox::Message),
    /// A grid cell was activated; `flat_index` is its position across all
    /// groups.
    OpenThumbnail { flat_index: usize },
    ThumbnailLoaded {
        path: PathBuf,
        result: error::Result<ImageData>,
    },
    /// Drives the modal fade-in.
    Tick(Instant),
}
