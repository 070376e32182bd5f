//! Showcase carousel view.
//!
//! Renders the card lane from [`CarouselState`] geometry: every card gets
//! an offset from the lane center, a scale and an opacity for the current
//! frame. Cards are layered back to front so the centered card stays on
//! top while sliding.

use std::time::Instant;

use iced::widget::{button, column, container, horizontal_space, image, row, text, Stack};
use iced::{Alignment, Element, Length, Padding};

use crate::state::carousel::{CarouselMessage, CarouselState, CARD_WIDTH};

use super::theme;

pub const LANE_HEIGHT: f32 = 440.0;
pub const CARD_HEIGHT: f32 = 360.0;

/// Poster area height inside a full-scale card
const POSTER_HEIGHT: f32 = 250.0;

/// The showcase section body, or a placeholder when playback is
/// unavailable or no clips were cataloged.
pub fn section<'a>(
    carousel: Option<&'a CarouselState>,
    posters: &'a [Option<image::Handle>],
    lane_width: f32,
    now: Instant,
) -> Element<'a, CarouselMessage> {
    let Some(carousel) = carousel.filter(|carousel| !carousel.is_empty()) else {
        return placeholder();
    };

    // Draw order: far cards first, the centered card last.
    let mut order: Vec<usize> = (0..carousel.len()).collect();
    order.sort_by_key(|&index| {
        let distance = (index as i32 - carousel.current() as i32).abs();
        std::cmp::Reverse(distance)
    });

    let mut layers: Vec<Element<'a, CarouselMessage>> = Vec::with_capacity(order.len());
    for index in order {
        let offset = carousel.card_offset(index, now);
        let visual = carousel.card_visual(index, now);

        let width = CARD_WIDTH * visual.scale;
        let height = CARD_HEIGHT * visual.scale;
        let left = lane_width / 2.0 + offset - width / 2.0;
        let top = (LANE_HEIGHT - height) / 2.0;

        // Cards that would poke out of the lane are culled rather than
        // clamped into wrong positions.
        if left < 0.0 || left + width > lane_width {
            continue;
        }

        let card = card(carousel, index, posters, width, height, visual.opacity);
        layers.push(
            container(card)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(Padding {
                    top,
                    left,
                    right: 0.0,
                    bottom: 0.0,
                })
                .into(),
        );
    }

    // Arrows ride on top of the lane, vertically centered at its edges.
    let arrows = row![
        button(text("‹").size(26))
            .style(theme::arrow_button)
            .padding(theme::pad(6.0, 16.0))
            .on_press(CarouselMessage::PreviousPressed),
        horizontal_space(),
        button(text("›").size(26))
            .style(theme::arrow_button)
            .padding(theme::pad(6.0, 16.0))
            .on_press(CarouselMessage::NextPressed),
    ]
    .width(Length::Fill)
    .height(Length::Fixed(LANE_HEIGHT))
    .align_y(Alignment::Center);

    layers.push(arrows.into());

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fixed(LANE_HEIGHT))
        .into()
}

fn card<'a>(
    carousel: &'a CarouselState,
    index: usize,
    posters: &'a [Option<image::Handle>],
    width: f32,
    height: f32,
    opacity: f32,
) -> Element<'a, CarouselMessage> {
    let card_state = &carousel.cards()[index];
    let scale = width / CARD_WIDTH;

    let poster: Element<'a, CarouselMessage> =
        match posters.get(index).and_then(|poster| poster.clone()) {
            Some(handle) => image(handle)
                .width(Length::Fill)
                .height(Length::Fixed(POSTER_HEIGHT * scale))
                .opacity(opacity)
                .into(),
            None => container(text("♪").size(40).color(theme::with_alpha(
                theme::GOLD,
                opacity,
            )))
            .width(Length::Fill)
            .height(Length::Fixed(POSTER_HEIGHT * scale))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(theme::photo_placeholder)
            .into(),
        };

    let play_glyph = if card_state.playback().is_playing() {
        "❚❚"
    } else {
        "▶"
    };
    let mute_glyph = if card_state.is_muted() { "🔇" } else { "🔊" };

    let controls = row![
        button(text(play_glyph).size(14))
            .style(theme::card_control_button)
            .padding(theme::pad(5.0, 10.0))
            .on_press(CarouselMessage::TogglePlay(index)),
        button(text(mute_glyph).size(14))
            .style(theme::card_control_button)
            .padding(theme::pad(5.0, 10.0))
            .on_press(CarouselMessage::ToggleMute(index)),
    ]
    .spacing(8);

    let title = text(card_state.entry.title.as_str())
        .size(16.0 * scale)
        .color(theme::with_alpha(theme::TEXT_PRIMARY, opacity));

    container(
        column![poster, controls, title]
            .spacing(10.0 * scale)
            .align_x(Alignment::Center),
    )
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .padding(12.0 * scale)
    .style(theme::surface_card)
    .into()
}

fn placeholder<'a>() -> Element<'a, CarouselMessage> {
    container(
        column![
            text("Showcase unavailable").size(20).color(theme::TEXT_SECONDARY),
            text("No playback device or clips were found.")
                .size(14)
                .color(theme::TEXT_MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(LANE_HEIGHT))
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(theme::surface_card)
    .into()
}
