// SPDX-License-Identifier: MPL-2.0
//! Neighbor preload cache.
//!
//! Opening an image preloads both of its group neighbors; navigating
//! preloads the next neighbor in the direction of travel. Decoded images
//! are kept in a byte-bounded LRU so a revisit is instant.

use crate::config::{
    DEFAULT_PRELOAD_CACHE_BYTES, DEFAULT_PRELOAD_MAX_IMAGES, MAX_PRELOAD_CACHE_BYTES,
    MAX_PRELOAD_MAX_IMAGES, MIN_PRELOAD_CACHE_BYTES, MIN_PRELOAD_MAX_IMAGES,
};
use crate::error::Result;
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct PreloadConfig {
    pub max_bytes: usize,
    pub max_images: usize,
    pub enabled: bool,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_PRELOAD_CACHE_BYTES,
            max_images: DEFAULT_PRELOAD_MAX_IMAGES,
            enabled: true,
        }
    }
}

impl PreloadConfig {
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_PRELOAD_CACHE_BYTES, MAX_PRELOAD_CACHE_BYTES),
            max_images: max_images.clamp(MIN_PRELOAD_MAX_IMAGES, MAX_PRELOAD_MAX_IMAGES),
            enabled: true,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    image: Arc<ImageData>,
    size_bytes: usize,
}

/// Hit/miss counters, mostly interesting in logs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreloadStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Byte- and count-bounded LRU of decoded images.
pub struct PreloadCache {
    cache: LruCache<PathBuf, CacheEntry>,
    config: PreloadConfig,
    current_bytes: usize,
    stats: PreloadStats,
}

impl PreloadCache {
    #[must_use]
    pub fn new(config: PreloadConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images)
            .or(NonZeroUsize::new(DEFAULT_PRELOAD_MAX_IMAGES))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: PreloadStats::default(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PreloadConfig::default())
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Inserts a decoded image. Returns `false` when preloading is disabled
    /// or the image alone would dominate the cache.
    pub fn insert(&mut self, path: PathBuf, image: ImageData) -> bool {
        if !self.config.enabled {
            return false;
        }

        let size_bytes = image.byte_size();
        if size_bytes > self.config.max_bytes / 2 {
            return false;
        }

        while self.current_bytes + size_bytes > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        if let Some(existing) = self.cache.pop(&path) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        self.current_bytes += size_bytes;
        self.cache.put(
            path,
            CacheEntry {
                image: Arc::new(image),
                size_bytes,
            },
        );
        true
    }

    /// Fetches a cached image, refreshing its LRU position.
    pub fn get(&mut self, path: &Path) -> Option<ImageData> {
        if !self.config.enabled {
            return None;
        }
        match self.cache.get(path) {
            Some(entry) => {
                self.stats.hits += 1;
                Some((*entry.image).clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Checks membership without touching LRU order.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.config.enabled && self.cache.contains(path)
    }

    /// Filters `paths` down to the ones actually worth loading.
    #[must_use]
    pub fn missing(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        if !self.config.enabled {
            return Vec::new();
        }
        paths
            .iter()
            .filter(|p| !self.cache.contains(p.as_path()))
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn stats(&self) -> PreloadStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl std::fmt::Debug for PreloadCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreloadCache")
            .field("enabled", &self.config.enabled)
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("stats", &self.stats)
            .finish()
    }
}

/// Background loader used by preload tasks. Decoding runs on the blocking
/// pool so the UI thread stays responsive.
pub async fn load_in_background(path: PathBuf) -> (PathBuf, Result<ImageData>) {
    let path_clone = path.clone();
    let result = tokio::task::spawn_blocking(move || crate::media::load_image(&path_clone))
        .await
        .unwrap_or_else(|e| Err(crate::error::Error::Io(format!("preload task failed: {e}"))));
    (path, result)
}
