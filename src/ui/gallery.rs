//! Gallery section and lightbox views.
//!
//! Pure view construction over [`GalleryState`]; every interaction comes
//! back as a [`GalleryMessage`].

use std::time::Instant;

use iced::widget::{
    button, center, column, container, horizontal_space, image, mouse_area, opaque, row,
    scrollable, text,
};
use iced::{Alignment, Element, Length};

use crate::state::data::PhotoAssets;
use crate::state::gallery::{GalleryMessage, GalleryState, THUMB_GAP, THUMB_WIDTH};

use super::theme;

/// Scrollable id of the thumbnail strip, targeted by recentering
pub const STRIP_ID: &str = "photo-strip";

pub const MAIN_PHOTO_HEIGHT: f32 = 400.0;
pub const THUMB_HEIGHT: f32 = 64.0;

/// Horizontal room taken by one strip arrow, its padding and gap
const ARROW_COLUMN: f32 = 56.0;

/// Width available to the thumbnail strip at a given window width.
/// Mirrors the layout: content padding on both sides plus two arrows.
pub fn strip_viewport_for(window_width: f32) -> f32 {
    (window_width - 2.0 * super::sections::CONTENT_PADDING - 2.0 * ARROW_COLUMN)
        .max(THUMB_WIDTH + THUMB_GAP)
}

/// The gallery section body: main photo, caption and thumbnail strip.
pub fn section<'a>(
    gallery: &'a GalleryState,
    photos: &'a [PhotoAssets],
    now: Instant,
) -> Element<'a, GalleryMessage> {
    if gallery.is_empty() {
        return container(text("No photos available").color(theme::TEXT_MUTED))
            .width(Length::Fill)
            .height(Length::Fixed(MAIN_PHOTO_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(theme::photo_placeholder)
            .into();
    }

    let alpha = gallery.photo_alpha(now);
    let displayed = gallery.displayed();

    let photo: Element<'a, GalleryMessage> =
        match photos.get(displayed).and_then(|assets| assets.full.clone()) {
            Some(handle) => image(handle)
                .width(Length::Fill)
                .height(Length::Fixed(MAIN_PHOTO_HEIGHT))
                .opacity(alpha)
                .into(),
            None => container(text("Photo unavailable").color(theme::TEXT_MUTED))
                .width(Length::Fill)
                .height(Length::Fixed(MAIN_PHOTO_HEIGHT))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(theme::photo_placeholder)
                .into(),
        };

    // Press/release on the photo drive the swipe tracker.
    let photo_area = mouse_area(photo)
        .on_press(GalleryMessage::PhotoPressed)
        .on_release(GalleryMessage::PhotoReleased)
        .on_exit(GalleryMessage::PhotoExited);

    let expand = button(text("⛶").size(18))
        .style(theme::arrow_button)
        .padding(theme::pad(6.0, 10.0))
        .on_press(GalleryMessage::OpenLightbox);

    let caption = gallery
        .displayed_image()
        .map(|entry| entry.alt.as_str())
        .unwrap_or_default();

    let caption_row = row![
        text(caption).size(14).color(theme::TEXT_SECONDARY),
        horizontal_space(),
        expand,
    ]
    .align_y(Alignment::Center);

    let thumbs = row(gallery.images().iter().enumerate().map(|(index, entry)| {
        let content: Element<'a, GalleryMessage> =
            match photos.get(index).and_then(|assets| assets.thumb.clone()) {
                Some(handle) => image(handle)
                    .width(Length::Fixed(THUMB_WIDTH))
                    .height(Length::Fixed(THUMB_HEIGHT))
                    .into(),
                None => container(text(entry.alt.chars().next().unwrap_or('·').to_string()))
                    .width(Length::Fixed(THUMB_WIDTH))
                    .height(Length::Fixed(THUMB_HEIGHT))
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .style(theme::photo_placeholder)
                    .into(),
            };
        button(content)
            .padding(0)
            .style(theme::thumbnail_button(gallery.is_active_thumbnail(index)))
            .on_press(GalleryMessage::ThumbnailPressed(index))
            .into()
    }))
    .spacing(THUMB_GAP);

    let strip = scrollable(thumbs)
        .id(scrollable::Id::new(STRIP_ID))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(2).scroller_width(2),
        ))
        .width(Length::Fill);

    let strip_row = row![
        button(text("‹").size(22))
            .style(theme::arrow_button)
            .padding(theme::pad(4.0, 14.0))
            .on_press(GalleryMessage::PreviousPressed),
        strip,
        button(text("›").size(22))
            .style(theme::arrow_button)
            .padding(theme::pad(4.0, 14.0))
            .on_press(GalleryMessage::NextPressed),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    column![photo_area, caption_row, strip_row]
        .spacing(16)
        .into()
}

/// The modal lightbox covering the whole page while open.
pub fn lightbox<'a>(
    gallery: &'a GalleryState,
    photos: &'a [PhotoAssets],
) -> Element<'a, GalleryMessage> {
    let current = gallery.current();

    let photo: Element<'a, GalleryMessage> =
        match photos.get(current).and_then(|assets| assets.full.clone()) {
            Some(handle) => image(handle)
                .width(Length::Fixed(960.0))
                .height(Length::Fixed(600.0))
                .into(),
            None => container(text("Photo unavailable").color(theme::TEXT_MUTED))
                .width(Length::Fixed(960.0))
                .height(Length::Fixed(600.0))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(theme::photo_placeholder)
                .into(),
        };

    let caption = gallery
        .current_image()
        .map(|entry| entry.alt.as_str())
        .unwrap_or_default();

    let header = row![
        text(caption).size(14).color(theme::TEXT_SECONDARY),
        horizontal_space(),
        button(text("✕").size(18))
            .style(theme::arrow_button)
            .padding(theme::pad(6.0, 12.0))
            .on_press(GalleryMessage::CloseLightbox),
    ]
    .align_y(Alignment::Center);

    let controls = row![
        button(text("‹").size(24))
            .style(theme::arrow_button)
            .padding(theme::pad(6.0, 16.0))
            .on_press(GalleryMessage::LightboxPrevious),
        text(format!("{} / {}", current + 1, gallery.len()))
            .size(14)
            .color(theme::TEXT_SECONDARY),
        button(text("›").size(24))
            .style(theme::arrow_button)
            .padding(theme::pad(6.0, 16.0))
            .on_press(GalleryMessage::LightboxNext),
    ]
    .spacing(24)
    .align_y(Alignment::Center);

    let panel = column![header, photo, controls]
        .spacing(16)
        .align_x(Alignment::Center)
        .width(Length::Shrink);

    // Clicks on the backdrop close; the panel itself swallows its clicks.
    opaque(
        mouse_area(
            center(opaque(container(panel).padding(24)))
                .style(theme::lightbox_backdrop),
        )
        .on_press(GalleryMessage::CloseLightbox),
    )
}
