use std::collections::HashMap;

use iced::alignment::Vertical;
use iced::widget::{button, column, container, image, mouse_area, scrollable, text, Column, Row, Stack};
use iced::{ContentFit, Element, Fill};

use crate::app::Message;
use crate::messages;
use crate::source::SearchResult;
use crate::ui::theme;

const CELL_WIDTH: f32 = 220.0;
const CELL_HEIGHT: f32 = 200.0;
const SPACING: f32 = 16.0;
/// Outer padding of the window content, both sides
const LAYOUT_OVERHEAD: f32 = 40.0;

/// How many cells fit side by side in the given window width.
pub fn columns(window_width: f32) -> usize {
    let available = (window_width - LAYOUT_OVERHEAD).max(0.0);
    let count = ((available + SPACING) / (CELL_WIDTH + SPACING)) as usize;
    count.max(1)
}

/// Build the thumbnail grid. Cells appear in result order, left to right.
pub fn view<'a>(
    results: &'a [SearchResult],
    thumbnails: &HashMap<String, image::Handle>,
    hovered: Option<&str>,
    window_width: f32,
) -> Element<'a, Message> {
    if results.is_empty() {
        return column![].into();
    }

    let per_row = columns(window_width);
    let mut grid = Column::new().spacing(SPACING);
    for chunk in results.chunks(per_row) {
        let cells = chunk
            .iter()
            .map(|item| cell(item, thumbnails.get(&item.id), hovered == Some(item.id.as_str())));
        grid = grid.push(Row::from_iter(cells).spacing(SPACING));
    }

    scrollable(container(grid).center_x(Fill)).height(Fill).into()
}

fn cell<'a>(
    item: &'a SearchResult,
    thumbnail: Option<&image::Handle>,
    hovered: bool,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Fill)
            .height(Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("…").size(24).color(theme::TEXT_SECONDARY))
            .center(Fill)
            .into(),
    };

    let mut layers = Stack::new().push(picture).width(CELL_WIDTH).height(CELL_HEIGHT);
    if hovered {
        layers = layers.push(overlay(item));
    }

    let card = container(layers).style(theme::cell).clip(true);

    mouse_area(card)
        .on_enter(Message::Hovered(item.id.clone()))
        .on_exit(Message::Unhovered(item.id.clone()))
        .into()
}

/// Title and external link, pinned to the bottom of the cell
fn overlay(item: &SearchResult) -> Element<'_, Message> {
    let link = button(text(messages::VIEW_LINK).size(13))
        .on_press(Message::OpenLink(item.page_url.clone()))
        .padding([4, 10])
        .style(theme::view_link);

    container(column![text(&item.title).size(14), link].spacing(6))
        .padding(10)
        .width(Fill)
        .height(Fill)
        .align_y(Vertical::Bottom)
        .style(theme::overlay)
        .into()
}
