//! Static page sections and the shared section frame.
//!
//! Every section lives in a fixed-height container so the scroll math in
//! [`crate::state::reveal`] and the navbar's jump targets line up with the
//! real layout. The reveal shift is applied through the frame's padding,
//! which keeps section heights stable while content slides in.

use std::time::Instant;

use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length, Padding};
use iced_aw::Wrap;

use crate::state::reveal::{
    format_count, RevealState, Section, SectionSpan, REVEAL_DISTANCE,
};
use crate::state::data::StatSpec;
use crate::Message;

use super::theme;

pub const NAV_HEIGHT: f32 = 64.0;

/// Side and top/bottom padding of a framed section
pub const CONTENT_PADDING: f32 = 48.0;

const BENEFIT_CARD_WIDTH: f32 = 300.0;

/// Benefit cards shown in the wrapping grid
const BENEFITS: [(&str, &str); 4] = [
    (
        "Hand-harvested",
        "Every stigma is picked at dawn, by hand, in the few hours the \
         crocus flower stays open.",
    ),
    (
        "Certified organic",
        "Grown without pesticides on family plots and certified to \
         European organic standards.",
    ),
    (
        "Intense aroma",
        "Slow, low-temperature drying keeps safranal and crocin at their \
         peak for color and flavour.",
    ),
    (
        "Farm to table",
        "Sealed and shipped directly from the farm within days of \
         harvest. No middlemen, no blending.",
    ),
];

/// Design height of each section; the source of truth for scroll math
pub fn section_height(section: Section) -> f32 {
    match section {
        Section::Hero => 560.0,
        Section::About => 440.0,
        Section::Stats => 260.0,
        Section::Benefits => 480.0,
        Section::Gallery => 760.0,
        Section::Showcase => 660.0,
        Section::Purchase => 820.0,
        Section::Contact => 320.0,
    }
}

/// Vertical spans of all sections, in layout order
pub fn section_spans() -> Vec<SectionSpan> {
    let mut top = 0.0;
    Section::ALL
        .iter()
        .map(|&section| {
            let height = section_height(section);
            let span = SectionSpan {
                section,
                top,
                height,
            };
            top += height;
            span
        })
        .collect()
}

pub fn section_top(section: Section) -> f32 {
    section_spans()
        .iter()
        .find(|span| span.section == section)
        .map(|span| span.top)
        .unwrap_or(0.0)
}

/// Wrap a section body with its header inside the fixed-height frame,
/// applying the reveal slide through top/bottom padding.
pub fn framed<'a>(
    section: Section,
    title: &'a str,
    subtitle: &'a str,
    reveal: &RevealState,
    now: Instant,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let progress = reveal.reveal_progress(section, now);
    let shift = REVEAL_DISTANCE * (1.0 - progress);
    let ink = 0.25 + 0.75 * progress;

    let header = column![
        text(title)
            .size(30)
            .color(theme::with_alpha(theme::TEXT_PRIMARY, ink)),
        text(subtitle)
            .size(15)
            .color(theme::with_alpha(theme::TEXT_SECONDARY, ink)),
    ]
    .spacing(6);

    container(column![header, content].spacing(24))
        .width(Length::Fill)
        .height(Length::Fixed(section_height(section)))
        .padding(Padding {
            top: CONTENT_PADDING + shift,
            bottom: (CONTENT_PADDING - shift).max(0.0),
            left: CONTENT_PADDING,
            right: CONTENT_PADDING,
        })
        .into()
}

/// Fixed bar above the page scrollable
pub fn nav_bar(scrolled: bool) -> Element<'static, Message> {
    let links = Section::NAV.iter().map(|&section| {
        button(text(section.label()).size(14))
            .style(theme::nav_link)
            .padding(theme::pad(8.0, 10.0))
            .on_press(Message::NavClicked(section))
            .into()
    });

    let bar = row![
        text("VV Gold Saffron").size(20).color(theme::GOLD),
        horizontal_space(),
        row(links).spacing(4).align_y(Alignment::Center),
        button(text("Order now").size(14))
            .style(theme::primary_button)
            .padding(theme::pad(8.0, 18.0))
            .on_press(Message::NavClicked(Section::Purchase)),
    ]
    .spacing(24)
    .align_y(Alignment::Center);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(NAV_HEIGHT))
        .padding(theme::pad(0.0, CONTENT_PADDING))
        .style(theme::nav_bar(scrolled))
        .into()
}

/// Hero banner with the half-speed parallax slide
pub fn hero(reveal: &RevealState) -> Element<'static, Message> {
    let (shift, opacity) = reveal.hero_parallax();

    let content = column![
        text("Pure Bio Saffron").size(52).color(theme::with_alpha(
            theme::TEXT_PRIMARY,
            opacity
        )),
        text("Hand-picked crocus stigmas from a single family farm")
            .size(18)
            .color(theme::with_alpha(theme::TEXT_SECONDARY, opacity)),
        row![
            button(text("Order now").size(16))
                .style(theme::primary_button)
                .padding(theme::pad(12.0, 30.0))
                .on_press(Message::NavClicked(Section::Purchase)),
            button(text("Our story").size(16))
                .style(theme::ghost_button)
                .padding(theme::pad(12.0, 30.0))
                .on_press(Message::NavClicked(Section::About)),
        ]
        .spacing(16),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(section_height(Section::Hero)))
        .center_x(Length::Fill)
        .padding(Padding {
            top: 140.0 + shift,
            bottom: 0.0,
            left: CONTENT_PADDING,
            right: CONTENT_PADDING,
        })
        .into()
}

pub fn about(reveal: &RevealState, now: Instant) -> Element<'static, Message> {
    let body = column![
        text(
            "Our crocus fields sit at 800 meters, where cold nights and \
             mineral soil concentrate the aroma in every stigma. The whole \
             harvest happens across three weeks each autumn, and every \
             flower passes through the same four hands."
        )
        .size(16)
        .color(theme::TEXT_SECONDARY),
        text(
            "We dry the same day we pick. That is the entire secret: \
             saffron loses its character by the hour, so ours never waits."
        )
        .size(16)
        .color(theme::TEXT_SECONDARY),
    ]
    .spacing(16)
    .max_width(760);

    framed(
        Section::About,
        "Our saffron",
        "One farm, one harvest, no compromises",
        reveal,
        now,
        body.into(),
    )
}

/// Animated counters; values come from the reveal state's clock
pub fn stats(
    reveal: &RevealState,
    stats: &[StatSpec],
    now: Instant,
) -> Element<'static, Message> {
    let counters = row(stats.iter().map(|stat| {
        column![
            text(format_count(reveal.counter_value(stat.target, now)))
                .size(40)
                .color(theme::GOLD),
            text(stat.label.clone()).size(14).color(theme::TEXT_MUTED),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
    }))
    .width(Length::Fill)
    .align_y(Alignment::Center);

    container(counters)
        .width(Length::Fill)
        .height(Length::Fixed(section_height(Section::Stats)))
        .center_y(Length::Fill)
        .padding(theme::pad(0.0, CONTENT_PADDING))
        .style(theme::footer)
        .into()
}

pub fn benefits(reveal: &RevealState, now: Instant) -> Element<'static, Message> {
    let cards: Vec<Element<'static, Message>> = BENEFITS
        .iter()
        .map(|(title, blurb)| {
            container(
                column![
                    text(*title).size(18).color(theme::GOLD_SOFT),
                    text(*blurb).size(14).color(theme::TEXT_SECONDARY),
                ]
                .spacing(8),
            )
            .width(Length::Fixed(BENEFIT_CARD_WIDTH))
            .padding(20)
            .style(theme::surface_card)
            .into()
        })
        .collect();

    let grid = Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0);

    framed(
        Section::Benefits,
        "Why this saffron",
        "What a single dedicated farm changes",
        reveal,
        now,
        grid.into(),
    )
}

pub fn contact() -> Element<'static, Message> {
    let body = column![
        text("VV Gold Saffron").size(20).color(theme::GOLD),
        text("Valea Viilor 27, Sibiu, Romania")
            .size(14)
            .color(theme::TEXT_SECONDARY),
        text("hello@vvgoldsaffron.example")
            .size(14)
            .color(theme::TEXT_SECONDARY),
        text("+40 712 345 678").size(14).color(theme::TEXT_SECONDARY),
        text("Family grown. Hand picked. Nothing added.")
            .size(12)
            .color(theme::TEXT_MUTED),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(body)
        .width(Length::Fill)
        .height(Length::Fixed(section_height(Section::Contact)))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::footer)
        .into()
}
