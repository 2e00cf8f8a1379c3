// SPDX-License-Identifier: MPL-2.0
use super::{App, Message};
use crate::ui::grid::{self, GridContext};
use crate::ui::overlay::{self, OverlayContext};
use iced::widget::{column, container, stack, text};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let grid = grid::view(GridContext {
            gallery: &self.gallery,
            thumbnails: &self.thumbnails,
            i18n: &self.i18n,
            focused_cell: self.focused_cell,
            scroll_locked: self.lightbox.session().locks_scroll(),
        });

        let page: Element<'_, Message> = match &self.startup_error {
            Some(error) => column![
                container(text(error.clone()).size(14))
                    .width(Length::Fill)
                    .padding(12),
                grid,
            ]
            .into(),
            None => grid,
        };

        if self.lightbox.is_open() {
            let modal = overlay::view(OverlayContext {
                state: &self.lightbox,
                i18n: &self.i18n,
                fade: self.fade(),
            })
            .map(Message::Lightbox);
            stack![page, modal].into()
        } else {
            page
        }
    }
}
