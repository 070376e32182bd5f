//! Photo gallery state.
//!
//! Owns the circular photo index, the fade transition between photos, the
//! thumbnail strip offset and the lightbox overlay. Views read this state;
//! nothing here touches widgets.
//!
//! Photo changes run through a small state machine,
//! idle -> fading out -> swapping -> fading in -> idle, sampled against the
//! clock on redraw frames. `current` moves immediately on navigation while
//! `displayed` only advances at the swap point, so a navigation arriving
//! mid-transition simply retargets the swap. A superseded transition cannot
//! apply a stale index.

use std::time::{Duration, Instant};

use crate::anim::{self, Tween};

use super::data::ImageEntry;

/// Fade-out and fade-in duration of the main photo transition
pub const FADE_DURATION: Duration = Duration::from_millis(150);

/// Horizontal displacement that turns a drag into a swipe
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Trailing delay before a window resize recomputes the strip offset
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Thumbnail width in the strip
pub const THUMB_WIDTH: f32 = 96.0;

/// Gap between thumbnails
pub const THUMB_GAP: f32 = 12.0;

/// Width of one thumbnail slot including its gap
pub const SLOT_WIDTH: f32 = THUMB_WIDTH + THUMB_GAP;

/// Phase of the main-photo fade
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Idle,
    FadingOut { tween: Tween },
    Swapping,
    FadingIn { tween: Tween },
}

/// Gallery events emitted by the gallery and lightbox views
#[derive(Debug, Clone)]
pub enum GalleryMessage {
    ThumbnailPressed(usize),
    NextPressed,
    PreviousPressed,
    PhotoPressed,
    PhotoReleased,
    PhotoExited,
    OpenLightbox,
    CloseLightbox,
    LightboxNext,
    LightboxPrevious,
    /// Trailing resize timer fired for the given generation
    ResizeSettled(u64),
}

#[derive(Debug)]
pub struct GalleryState {
    images: Vec<ImageEntry>,
    /// Logical index: thumbnails, strip and lightbox follow this
    current: usize,
    /// Index of the photo currently on screen; trails `current` during fades
    displayed: usize,
    transition: Transition,
    lightbox_open: bool,
    strip_offset: f32,
    strip_viewport: f32,
    resize_epoch: u64,
    swipe_origin: Option<f32>,
}

impl GalleryState {
    pub fn new(images: Vec<ImageEntry>) -> Self {
        Self {
            images,
            current: 0,
            displayed: 0,
            transition: Transition::Idle,
            lightbox_open: false,
            strip_offset: 0.0,
            strip_viewport: 0.0,
            resize_epoch: 0,
            swipe_origin: None,
        }
    }

    pub fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> Option<&ImageEntry> {
        self.images.get(self.current)
    }

    /// The photo the main view should draw right now
    pub fn displayed_image(&self) -> Option<&ImageEntry> {
        self.images.get(self.displayed)
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn is_active_thumbnail(&self, index: usize) -> bool {
        index == self.current
    }

    /// Switch to `index` with a fade. Out-of-range indices are ignored.
    pub fn show(&mut self, index: usize, now: Instant) {
        if index >= self.images.len() {
            return;
        }

        self.current = index;
        self.recenter_strip();

        match self.transition {
            // Already on the way out; the retargeted `current` is picked up
            // at the swap.
            Transition::FadingOut { .. } | Transition::Swapping => {}
            Transition::Idle | Transition::FadingIn { .. } => {
                self.transition = Transition::FadingOut {
                    tween: Tween::new(FADE_DURATION, anim::ease_out_cubic, now),
                };
            }
        }
    }

    pub fn next(&mut self, now: Instant) {
        if self.images.is_empty() {
            return;
        }
        self.show((self.current + 1) % self.images.len(), now);
    }

    pub fn previous(&mut self, now: Instant) {
        if self.images.is_empty() {
            return;
        }
        let n = self.images.len();
        self.show((self.current + n - 1) % n, now);
    }

    /// Advance the fade machine. Called once per redraw frame while active.
    pub fn tick(&mut self, now: Instant) {
        if let Transition::FadingOut { tween } = self.transition {
            if tween.is_finished(now) {
                self.transition = Transition::Swapping;
            }
        }
        if let Transition::Swapping = self.transition {
            self.displayed = self.current;
            self.transition = Transition::FadingIn {
                tween: Tween::new(FADE_DURATION, anim::ease_out_cubic, now),
            };
        }
        if let Transition::FadingIn { tween } = self.transition {
            if tween.is_finished(now) {
                self.transition = Transition::Idle;
            }
        }
    }

    /// Opacity of the main photo for the current frame
    pub fn photo_alpha(&self, now: Instant) -> f32 {
        match self.transition {
            Transition::Idle => 1.0,
            Transition::FadingOut { tween } => 1.0 - tween.eased(now),
            Transition::Swapping => 0.0,
            Transition::FadingIn { tween } => tween.eased(now),
        }
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.transition, Transition::Idle)
    }

    // --- thumbnail strip ---

    /// Total width of the strip content
    pub fn strip_content_width(&self) -> f32 {
        self.images.len() as f32 * SLOT_WIDTH
    }

    /// Largest valid strip offset
    pub fn max_scroll(&self) -> f32 {
        (self.strip_content_width() - self.strip_viewport).max(0.0)
    }

    pub fn strip_offset(&self) -> f32 {
        self.strip_offset
    }

    pub fn set_strip_viewport(&mut self, width: f32) {
        self.strip_viewport = width.max(0.0);
        self.recenter_strip();
    }

    /// Center the active thumbnail in the visible strip, clamped to the
    /// scrollable range.
    fn recenter_strip(&mut self) {
        let target =
            self.current as f32 * SLOT_WIDTH - self.strip_viewport / 2.0 + SLOT_WIDTH / 2.0;
        self.strip_offset = target.clamp(0.0, self.max_scroll());
    }

    /// Note a window resize; returns the generation the trailing timer
    /// must present to [`Self::settle_resize`].
    pub fn begin_resize(&mut self) -> u64 {
        self.resize_epoch += 1;
        self.resize_epoch
    }

    /// Apply a settled resize. Stale generations (a newer resize arrived
    /// while the timer was pending) are ignored.
    pub fn settle_resize(&mut self, epoch: u64, viewport: f32) -> bool {
        if epoch != self.resize_epoch {
            return false;
        }
        self.set_strip_viewport(viewport);
        true
    }

    // --- swipe ---

    pub fn begin_swipe(&mut self, x: f32) {
        if !self.lightbox_open {
            self.swipe_origin = Some(x);
        }
    }

    pub fn cancel_swipe(&mut self) {
        self.swipe_origin = None;
    }

    /// Finish a drag at `x`; returns whether it navigated.
    pub fn end_swipe(&mut self, x: f32, now: Instant) -> bool {
        let Some(origin) = self.swipe_origin.take() else {
            return false;
        };
        let diff = origin - x;
        if diff.abs() <= SWIPE_THRESHOLD {
            return false;
        }
        if diff > 0.0 {
            self.next(now);
        } else {
            self.previous(now);
        }
        true
    }

    // --- lightbox ---

    pub fn open_lightbox(&mut self) {
        if !self.images.is_empty() {
            self.lightbox_open = true;
        }
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox_open = false;
    }

    pub fn lightbox_open(&self) -> bool {
        self.lightbox_open
    }

    /// The page must not scroll while the lightbox covers it
    pub fn page_scroll_locked(&self) -> bool {
        self.lightbox_open
    }

    /// Advance inside the lightbox: shared index moves, main photo follows
    /// without its fade.
    pub fn lightbox_next(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.images.len();
        self.sync_without_fade();
    }

    pub fn lightbox_previous(&mut self) {
        if self.images.is_empty() {
            return;
        }
        let n = self.images.len();
        self.current = (self.current + n - 1) % n;
        self.sync_without_fade();
    }

    fn sync_without_fade(&mut self) {
        self.displayed = self.current;
        self.transition = Transition::Idle;
        self.recenter_strip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entries(n: usize) -> Vec<ImageEntry> {
        (0..n)
            .map(|i| ImageEntry {
                path: PathBuf::from(format!("photos/{i}.jpg")),
                alt: format!("Photo {i}"),
                present: true,
            })
            .collect()
    }

    fn settled(gallery: &mut GalleryState, now: Instant) -> Instant {
        // Run the machine past both fades.
        let mid = now + FADE_DURATION + Duration::from_millis(10);
        gallery.tick(mid);
        let end = mid + FADE_DURATION + Duration::from_millis(10);
        gallery.tick(end);
        end
    }

    #[test]
    fn next_composed_n_times_closes_the_circle() {
        let mut gallery = GalleryState::new(entries(7));
        let now = Instant::now();

        for _ in 0..7 {
            gallery.next(now);
        }
        assert_eq!(gallery.current(), 0);

        for _ in 0..7 {
            gallery.previous(now);
        }
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn show_out_of_range_is_a_silent_no_op() {
        let mut gallery = GalleryState::new(entries(3));
        let now = Instant::now();

        gallery.show(3, now);

        assert_eq!(gallery.current(), 0);
        assert!(!gallery.is_animating());
    }

    #[test]
    fn navigation_on_empty_gallery_is_harmless() {
        let mut gallery = GalleryState::new(Vec::new());
        let now = Instant::now();
        gallery.next(now);
        gallery.previous(now);
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn fade_machine_swaps_after_fade_out() {
        let mut gallery = GalleryState::new(entries(4));
        let now = Instant::now();

        gallery.show(2, now);
        assert_eq!(gallery.current(), 2);
        assert_eq!(gallery.displayed(), 0, "swap waits for the fade");
        assert!(gallery.photo_alpha(now) >= 0.99);

        let end = settled(&mut gallery, now);
        assert_eq!(gallery.displayed(), 2);
        assert!(!gallery.is_animating());
        assert!(gallery.photo_alpha(end) >= 0.99);
    }

    #[test]
    fn reentrant_show_applies_only_the_newest_index() {
        let mut gallery = GalleryState::new(entries(5));
        let now = Instant::now();

        gallery.show(1, now);
        // A second navigation lands mid-fade.
        let mid = now + Duration::from_millis(50);
        gallery.tick(mid);
        gallery.show(4, mid);

        settled(&mut gallery, mid);
        assert_eq!(gallery.displayed(), 4, "stale index must never surface");
    }

    #[test]
    fn strip_offset_stays_in_range() {
        let mut gallery = GalleryState::new(entries(10));
        gallery.set_strip_viewport(400.0);
        let now = Instant::now();

        for i in 0..10 {
            gallery.show(i, now);
            assert!(gallery.strip_offset() >= 0.0);
            assert!(gallery.strip_offset() <= gallery.max_scroll());
        }
    }

    #[test]
    fn wide_viewport_never_scrolls_the_strip() {
        let mut gallery = GalleryState::new(entries(3));
        gallery.set_strip_viewport(5000.0);
        let now = Instant::now();

        gallery.show(2, now);

        assert_eq!(gallery.max_scroll(), 0.0);
        assert_eq!(gallery.strip_offset(), 0.0);
    }

    #[test]
    fn stale_resize_generation_is_ignored() {
        let mut gallery = GalleryState::new(entries(6));

        let first = gallery.begin_resize();
        let second = gallery.begin_resize();

        assert!(!gallery.settle_resize(first, 300.0));
        assert!(gallery.settle_resize(second, 300.0));
    }

    #[test]
    fn swipe_below_threshold_changes_nothing() {
        let mut gallery = GalleryState::new(entries(4));
        let now = Instant::now();

        gallery.begin_swipe(200.0);
        assert!(!gallery.end_swipe(200.0 - SWIPE_THRESHOLD, now));
        assert_eq!(gallery.current(), 0);
        assert!(!gallery.is_animating());
    }

    #[test]
    fn swipe_direction_maps_to_navigation() {
        let mut gallery = GalleryState::new(entries(4));
        let now = Instant::now();

        // Leftward drag: next.
        gallery.begin_swipe(300.0);
        assert!(gallery.end_swipe(300.0 - SWIPE_THRESHOLD - 1.0, now));
        assert_eq!(gallery.current(), 1);

        // Rightward drag: previous.
        gallery.begin_swipe(300.0);
        assert!(gallery.end_swipe(300.0 + SWIPE_THRESHOLD + 1.0, now));
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut gallery = GalleryState::new(entries(4));
        let now = Instant::now();
        assert!(!gallery.end_swipe(0.0, now));
    }

    #[test]
    fn lightbox_cycles_do_not_leak_the_scroll_lock() {
        let mut gallery = GalleryState::new(entries(4));

        for _ in 0..5 {
            gallery.open_lightbox();
            assert!(gallery.page_scroll_locked());
            gallery.close_lightbox();
            assert!(!gallery.page_scroll_locked());
        }
    }

    #[test]
    fn lightbox_never_opens_on_an_empty_gallery() {
        let mut gallery = GalleryState::new(Vec::new());
        gallery.open_lightbox();
        assert!(!gallery.lightbox_open());
    }

    #[test]
    fn lightbox_navigation_skips_the_fade() {
        let mut gallery = GalleryState::new(entries(5));
        gallery.open_lightbox();

        gallery.lightbox_next();

        assert_eq!(gallery.current(), 1);
        assert_eq!(gallery.displayed(), 1, "main photo follows immediately");
        assert!(!gallery.is_animating());

        gallery.lightbox_previous();
        gallery.lightbox_previous();
        assert_eq!(gallery.current(), 4, "wraps backwards");
    }

    #[test]
    fn swipe_is_inert_while_lightbox_is_open() {
        let mut gallery = GalleryState::new(entries(4));
        let now = Instant::now();

        gallery.open_lightbox();
        gallery.begin_swipe(400.0);
        assert!(!gallery.end_swipe(0.0, now));
        assert_eq!(gallery.current(), 0);
    }
}
