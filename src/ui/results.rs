/// Search trigger, outcome notice and the grid of similar images
use iced::widget::{button, canvas, column, container, image, text, Column};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use super::gallery::{Gallery, Tile};
use super::score_bar::ScoreBar;
use crate::state::data::{Notice, SearchResult};
use crate::state::workflow::{Event, Workflow};
use crate::Message;

/// Side length of a result tile
const TILE_SIZE: f32 = 160.0;

/// Number of placeholder tiles shown while a search is running
const SKELETON_TILES: usize = 8;

pub fn search_button_label(loading: bool) -> &'static str {
    if loading {
        "Searching…"
    } else {
        "Search"
    }
}

/// Search button, disabled while loading or with nothing selected
pub fn search_button(workflow: &Workflow) -> Element<'_, Message> {
    button(text(search_button_label(workflow.is_loading())).size(18))
        .on_press_maybe(
            workflow
                .can_search()
                .then_some(Message::Workflow(Event::SearchRequested)),
        )
        .padding([10, 32])
        .into()
}

/// Informational or error line for a search that produced no results
pub fn notice<'a>(notice: Notice) -> Element<'a, Message> {
    let line = text(notice.message()).size(16);
    if notice.is_error() {
        line.style(text::danger).into()
    } else {
        line.style(text::secondary).into()
    }
}

pub fn view<'a>(workflow: &'a Workflow, gallery: &'a Gallery) -> Element<'a, Message> {
    let mut content: Column<'a, Message> = column![].spacing(16).align_x(Alignment::Center);

    if let Some(outcome) = workflow.notice() {
        content = content.push(notice(outcome));
    }

    let results = workflow.results();
    if workflow.is_loading() {
        content = content.push(text("Searching for similar images…").size(16));
        let skeletons = (0..SKELETON_TILES).map(|_| placeholder("")).collect();
        content = content.push(grid(skeletons));
    } else if !results.is_empty() {
        content = content.push(text(format!("Similar images ({})", results.len())).size(24));
        let tiles = results
            .iter()
            .enumerate()
            .map(|(index, result)| result_tile(result, gallery.tile(index)))
            .collect();
        content = content.push(grid(tiles));
    }

    content.into()
}

fn grid(tiles: Vec<Element<'_, Message>>) -> Element<'_, Message> {
    Wrap::with_elements(tiles)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

fn result_tile<'a>(result: &'a SearchResult, tile: Option<&'a Tile>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match tile {
        Some(Tile::Loaded(handle)) => image(handle.clone())
            .width(Length::Fixed(TILE_SIZE))
            .height(Length::Fixed(TILE_SIZE))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Tile::Missing) => placeholder("Image not found"),
        Some(Tile::Loading) | None => placeholder(""),
    };

    column![
        picture,
        canvas(ScoreBar { score: result.score })
            .width(Length::Fixed(TILE_SIZE))
            .height(Length::Fixed(6.0)),
        text(result.similarity_label()).size(13),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .into()
}

fn placeholder<'a>(label: &'static str) -> Element<'a, Message> {
    container(text(label).size(12))
        .center(Length::Fixed(TILE_SIZE))
        .style(container::bordered_box)
        .into()
}
