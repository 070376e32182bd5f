/// State management module
///
/// This module handles all application state, including:
/// - Catalog loading and asset discovery (catalog.rs)
/// - Shared data structures (data.rs)
/// - Gallery index, fades and lightbox (gallery.rs)
/// - Showcase carousel and exclusive playback (carousel.rs)
/// - Purchase simulation and order log (order.rs)
/// - Scroll-driven reveals, counters and parallax (reveal.rs)
pub mod carousel;
pub mod catalog;
pub mod data;
pub mod gallery;
pub mod order;
pub mod reveal;
