// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and the modal
//! viewer.
//!
//! `App` owns the gallery index, the lightbox component, localization, and
//! the handful of presentation facts that live above the viewer (fade
//! progress, restored grid focus). Policy that affects user-visible
//! behavior stays close to the update loop here.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, MODAL_FADE_MS};
use crate::gallery::{manifest, scanner, GalleryIndex};
use crate::i18n::I18n;
use crate::lightbox;
use crate::media::ImageData;
use iced::widget::image;
use iced::{window, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

pub struct App {
    pub i18n: I18n,
    gallery: GalleryIndex,
    lightbox: lightbox::State,
    /// Decoded grid images keyed by thumbnail source path.
    thumbnails: HashMap<PathBuf, image::Handle>,
    /// Grid cell to highlight after the modal returned focus to it.
    focused_cell: Option<usize>,
    /// Start of the modal fade-in; `None` once the fade has finished or
    /// when reduced motion is on.
    opened_at: Option<Instant>,
    reduced_motion: bool,
    /// Problem encountered while building the gallery, shown in the grid.
    startup_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery_len", &self.gallery.len())
            .field("modal_open", &self.lightbox.is_open())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            gallery: GalleryIndex::default(),
            lightbox: lightbox::State::new(&config),
            thumbnails: HashMap::new(),
            focused_cell: None,
            opened_at: None,
            reduced_motion: false,
            startup_error: None,
        }
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match config::load() {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load configuration: {err}");
                Config::default()
            }
        };
        let i18n = I18n::new(flags.lang.clone(), &config);
        let reduced_motion = config.reduced_motion.unwrap_or(false);

        let gallery_path = flags
            .gallery_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let (gallery, startup_error) = match build_gallery(&gallery_path) {
            Ok(gallery) => (gallery, None),
            Err(err) => (GalleryIndex::default(), Some(err.to_string())),
        };

        let app = App {
            i18n,
            lightbox: lightbox::State::new(&config),
            reduced_motion,
            startup_error,
            gallery,
            ..Self::default()
        };

        let load_thumbnails = app.load_thumbnails_task();
        (app, load_thumbnails)
    }

    fn load_thumbnails_task(&self) -> Task<Message> {
        let tasks: Vec<Task<Message>> = self
            .gallery
            .entries()
            .iter()
            .map(|entry| {
                Task::perform(
                    lightbox::preload::load_in_background(entry.source.clone()),
                    |(path, result)| Message::ThumbnailLoaded { path, result },
                )
            })
            .collect();
        Task::batch(tasks)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Fade-in progress of the modal, 0..=1.
    fn fade(&self) -> f32 {
        match self.opened_at {
            None => 1.0,
            Some(started) => {
                let elapsed = started.elapsed().as_millis() as f32;
                (elapsed / MODAL_FADE_MS as f32).clamp(0.0, 1.0)
            }
        }
    }

    fn store_thumbnail(&mut self, path: PathBuf, image: ImageData) {
        self.thumbnails.insert(path, image.handle);
    }
}

/// Builds the gallery index from a manifest file, a directory containing
/// one, or a plain directory scan.
fn build_gallery(path: &Path) -> crate::error::Result<GalleryIndex> {
    if path.is_file() {
        return manifest::load(path);
    }
    let manifest_path = path.join(manifest::MANIFEST_FILE);
    if manifest_path.is_file() {
        manifest::load(&manifest_path)
    } else {
        scanner::scan(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Thumbnail;
    use crate::lightbox::session::LifecycleEvent;

    fn app_with_gallery() -> App {
        App {
            gallery: GalleryIndex::new(vec![
                Thumbnail::new("/g/a.jpg").with_group("g"),
                Thumbnail::new("/g/b.jpg").with_group("g"),
            ]),
            ..App::default()
        }
    }

    #[test]
    fn open_thumbnail_opens_the_viewer() {
        let mut app = app_with_gallery();
        let _ = app.update(Message::OpenThumbnail { flat_index: 1 });

        assert!(app.lightbox.is_open());
        let open = app.lightbox.session().current().expect("viewer open");
        assert_eq!(open.group, "g");
        assert_eq!(open.index, 1);
        assert_eq!(open.origin, Some(1));
    }

    #[test]
    fn open_thumbnail_out_of_range_is_ignored() {
        let mut app = app_with_gallery();
        let _ = app.update(Message::OpenThumbnail { flat_index: 5 });
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn closing_restores_grid_focus() {
        let mut app = app_with_gallery();
        let _ = app.update(Message::OpenThumbnail { flat_index: 0 });
        assert_eq!(app.focused_cell, None);

        let _ = app.update(Message::Lightbox(lightbox::Message::Close));
        assert!(!app.lightbox.is_open());
        assert_eq!(app.focused_cell, Some(0));
    }

    #[test]
    fn opening_clears_previous_focus_highlight() {
        let mut app = app_with_gallery();
        app.focused_cell = Some(1);
        let _ = app.update(Message::OpenThumbnail { flat_index: 0 });
        assert_eq!(app.focused_cell, None);
    }

    #[test]
    fn fade_is_instant_under_reduced_motion() {
        let mut app = app_with_gallery();
        app.reduced_motion = true;
        let _ = app.update(Message::OpenThumbnail { flat_index: 0 });
        assert_eq!(app.opened_at, None);
        assert_eq!(app.fade(), 1.0);
    }

    #[test]
    fn fade_starts_when_modal_opens() {
        let mut app = app_with_gallery();
        let _ = app.update(Message::OpenThumbnail { flat_index: 0 });
        assert!(app.opened_at.is_some());
        assert!(app.fade() < 1.0);
    }

    #[test]
    fn lifecycle_close_event_stops_fade() {
        let mut app = app_with_gallery();
        let _ = app.update(Message::OpenThumbnail { flat_index: 0 });
        app.apply_lifecycle(LifecycleEvent::Closed {
            restore_focus_to: Some(0),
        });
        assert_eq!(app.opened_at, None);
    }

    #[test]
    fn thumbnail_loaded_populates_grid_handles() {
        let mut app = app_with_gallery();
        let image = ImageData::from_rgba(2, 2, vec![0u8; 16]);
        let _ = app.update(Message::ThumbnailLoaded {
            path: PathBuf::from("/g/a.jpg"),
            result: Ok(image),
        });
        assert!(app.thumbnails.contains_key(Path::new("/g/a.jpg")));
    }

    #[test]
    fn failed_thumbnail_load_is_skipped() {
        let mut app = app_with_gallery();
        let _ = app.update(Message::ThumbnailLoaded {
            path: PathBuf::from("/g/a.jpg"),
            result: Err(crate::error::Error::Io("missing".into())),
        });
        assert!(app.thumbnails.is_empty());
    }

    #[test]
    fn build_gallery_scans_directory_without_manifest() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(temp_dir.path().join("a.jpg"), b"fake").expect("write");

        let gallery = build_gallery(temp_dir.path()).expect("scan should succeed");
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn build_gallery_prefers_manifest_in_directory() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(temp_dir.path().join("stray.jpg"), b"fake").expect("write");
        std::fs::write(
            temp_dir.path().join(manifest::MANIFEST_FILE),
            "[[image]]\nsource = \"chosen.jpg\"\n",
        )
        .expect("write manifest");

        let gallery = build_gallery(temp_dir.path()).expect("manifest should load");
        assert_eq!(gallery.len(), 1);
        assert_eq!(
            gallery.entries()[0].source,
            temp_dir.path().join("chosen.jpg")
        );
    }
}
