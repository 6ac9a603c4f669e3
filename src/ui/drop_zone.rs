/// Drop target, file picker trigger and preview of the selected image
use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

use crate::state::workflow::{Event, Workflow};
use crate::Message;

/// Width of the preview card
const PREVIEW_WIDTH: f32 = 320.0;

/// Prompt shown while nothing is selected
pub fn prompt(drag_active: bool) -> &'static str {
    if drag_active {
        "Drop the image here"
    } else {
        "Choose or drag an image here"
    }
}

pub fn view(workflow: &Workflow) -> Element<'_, Message> {
    let drag_active = workflow.is_drag_active();

    let body: Element<'_, Message> = match (workflow.selected_file(), workflow.preview_image()) {
        (Some(file), Some(preview)) => {
            let details = match preview.dimensions {
                Some((width, height)) => format!("{} · {}x{}", file.name, width, height),
                None => file.name.clone(),
            };
            column![
                text("Selected image").size(18),
                image(preview.handle.clone()).width(Length::Fixed(PREVIEW_WIDTH)),
                row![
                    text(details).size(14),
                    button(text("Remove"))
                        .on_press(Message::Workflow(Event::Reset))
                        .style(button::danger)
                        .padding([4, 10]),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            ]
            .spacing(12)
            .align_x(Alignment::Center)
            .into()
        }
        (Some(file), None) => column![
            text(format!("Preparing preview of {}…", file.name)).size(16),
            button(text("Remove"))
                .on_press(Message::Workflow(Event::Reset))
                .padding([4, 10]),
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .into(),
        (None, _) => column![
            text(prompt(drag_active)).size(24),
            text("Supported formats: JPG, PNG, GIF, WebP, BMP").size(14),
            button(text("Browse…"))
                .on_press(Message::BrowseRequested)
                .padding(10),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .into(),
    };

    container(body)
        .width(Length::Fill)
        .padding(32)
        .center_x(Length::Fill)
        .style(move |theme: &Theme| surface_style(theme, drag_active))
        .into()
}

/// Border and fill that light up while a drag hovers the window
fn surface_style(theme: &Theme, drag_active: bool) -> container::Style {
    let palette = theme.extended_palette();
    let (border_color, background) = if drag_active {
        (
            palette.primary.strong.color,
            Color {
                a: 0.15,
                ..palette.primary.weak.color
            },
        )
    } else {
        (palette.background.strong.color, palette.background.weak.color)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}
