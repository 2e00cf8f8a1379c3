// SPDX-License-Identifier: MPL-2.0
//! The gallery grid: grouped thumbnails that open the modal viewer.
//!
//! Entries render in gallery order, sectioned by group with a small header.
//! While the modal is open the grid is rendered without its scrollable so
//! the page behind the viewer cannot move.

use crate::app::Message;
use crate::gallery::{GalleryIndex, DEFAULT_GROUP};
use crate::i18n::I18n;
use crate::ui::styles;
use iced::widget::{button, column, container, image, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};
use std::collections::HashMap;
use std::path::PathBuf;

const COLUMNS: usize = 4;
const CELL_HEIGHT: f32 = 180.0;
const GRID_SPACING: f32 = 12.0;

pub struct GridContext<'a> {
    pub gallery: &'a GalleryIndex,
    /// Decoded grid images, keyed by thumbnail source path.
    pub thumbnails: &'a HashMap<PathBuf, image::Handle>,
    pub i18n: &'a I18n,
    /// Cell that should show the focus highlight, e.g. after the modal
    /// closed and returned focus to its origin.
    pub focused_cell: Option<usize>,
    /// True while the modal is open.
    pub scroll_locked: bool,
}

pub fn view<'a>(ctx: GridContext<'a>) -> Element<'a, Message> {
    if ctx.gallery.is_empty() {
        return container(text(ctx.i18n.tr("gallery-empty")).size(18))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let mut content = Column::new().spacing(GRID_SPACING * 2.0).padding(24);
    for group in ctx.gallery.groups() {
        content = content.push(group_section(&ctx, group));
    }

    if ctx.scroll_locked {
        container(content).width(Length::Fill).into()
    } else {
        scrollable(content).width(Length::Fill).into()
    }
}

fn group_section<'a>(ctx: &GridContext<'a>, group: &'a str) -> Element<'a, Message> {
    let title = if group == DEFAULT_GROUP {
        ctx.i18n.tr("gallery-group-all")
    } else {
        group.to_string()
    };

    let members: Vec<usize> = ctx
        .gallery
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.group() == group)
        .map(|(flat_index, _)| flat_index)
        .collect();

    let mut rows = Column::new().spacing(GRID_SPACING);
    for chunk in members.chunks(COLUMNS) {
        let mut grid_row = Row::new().spacing(GRID_SPACING);
        for &flat_index in chunk {
            let entry = &ctx.gallery.entries()[flat_index];
            grid_row = grid_row.push(cell(ctx, flat_index, entry));
        }
        rows = rows.push(grid_row);
    }

    column![text(title).size(22), rows]
        .spacing(GRID_SPACING)
        .into()
}

fn cell<'a>(
    ctx: &GridContext<'a>,
    flat_index: usize,
    entry: &'a crate::gallery::Thumbnail,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match ctx.thumbnails.get(&entry.source) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(CELL_HEIGHT))
            .into(),
        None => container(text(ctx.i18n.tr("viewer-loading")).size(14))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(CELL_HEIGHT))
            .into(),
    };

    let mut content = Column::new().push(body).align_x(Alignment::Center);
    if let Some(caption) = entry.caption.as_deref() {
        content = content.push(text(caption).size(14));
    }

    let style = if ctx.focused_cell == Some(flat_index) {
        styles::thumbnail_focused
    } else {
        styles::thumbnail
    };

    button(content)
        .style(style)
        .padding(6)
        .width(Length::FillPortion(1))
        .on_press(Message::OpenThumbnail { flat_index })
        .into()
}
