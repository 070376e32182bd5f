/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog layer and the UI layer.
use std::path::PathBuf;

use iced::widget::image;
use serde::Deserialize;

/// A single photo in the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntry {
    /// Resolved path to the image file
    pub path: PathBuf,
    /// Descriptive text shown as the photo caption
    pub alt: String,
    /// Whether the file was found on disk at load time
    pub present: bool,
}

/// A single clip card in the showcase carousel
#[derive(Debug, Clone, PartialEq)]
pub struct ClipEntry {
    /// Resolved path to the clip soundtrack file
    pub path: PathBuf,
    /// Card title
    pub title: String,
    /// Optional poster image shown on the card
    pub poster: Option<PathBuf>,
    /// Whether the clip file was found on disk at load time
    pub present: bool,
}

/// A purchasable product variant (weight plus price)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ProductVariant {
    pub weight_grams: u32,
    pub price_eur: f32,
}

impl std::fmt::Display for ProductVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} g — {}",
            self.weight_grams,
            crate::state::order::format_eur(self.price_eur)
        )
    }
}

/// A statistic shown in the animated counters section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatSpec {
    pub label: String,
    pub target: u64,
}

/// Loaded display assets for one gallery entry
///
/// `full` backs the main photo and the lightbox, `thumb` the strip.
/// Either can be absent while loading or when the source file is missing.
#[derive(Debug, Clone, Default)]
pub struct PhotoAssets {
    pub full: Option<image::Handle>,
    pub thumb: Option<image::Handle>,
}
