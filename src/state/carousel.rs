//! Showcase carousel state.
//!
//! Cards sit on a horizontal lane at offsets proportional to their signed
//! distance from the current card. The current card is full size and on
//! top; every other card is uniformly scaled down and dimmed, no matter
//! how far out it sits. Movement is circular and re-enforces exclusive
//! playback: the centered card plays, everything else is paused and
//! rewound to the start.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::anim::{self, Tween};
use crate::playback::{ClipPlayer, PlaybackState};

use super::data::ClipEntry;

/// Card width at full scale
pub const CARD_WIDTH: f32 = 300.0;

/// Gap between neighbouring cards
pub const CARD_GAP: f32 = 20.0;

/// Scale applied to every non-current card
pub const INACTIVE_SCALE: f32 = 0.8;

/// Opacity applied to every non-current card
pub const INACTIVE_OPACITY: f32 = 0.5;

/// Distance between neighbouring slot centers
pub const SLOT_SPACING: f32 = CARD_WIDTH * INACTIVE_SCALE + CARD_GAP;

/// Duration of the slide to new slot positions
pub const MOVE_DURATION: Duration = Duration::from_millis(500);

/// Duration of the scale/opacity change
pub const STATE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Carousel events emitted by the showcase view
#[derive(Debug, Clone)]
pub enum CarouselMessage {
    NextPressed,
    PreviousPressed,
    TogglePlay(usize),
    ToggleMute(usize),
}

/// Scale, opacity and stacking of one card for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    pub scale: f32,
    pub opacity: f32,
    pub on_top: bool,
}

impl CardVisual {
    /// Visual state for a signed distance from the current card.
    /// Flat beyond one step: two slots out looks the same as one.
    pub fn for_distance(distance: i32) -> Self {
        if distance == 0 {
            Self {
                scale: 1.0,
                opacity: 1.0,
                on_top: true,
            }
        } else {
            Self {
                scale: INACTIVE_SCALE,
                opacity: INACTIVE_OPACITY,
                on_top: false,
            }
        }
    }
}

/// One card: its catalog entry, optional player and playback bookkeeping
#[derive(Debug)]
pub struct CardState {
    pub entry: ClipEntry,
    player: Option<ClipPlayer>,
    playback: PlaybackState,
    muted: bool,
}

impl CardState {
    /// Cards start muted with their clip parked at the beginning.
    pub fn new(entry: ClipEntry, mut player: Option<ClipPlayer>) -> Self {
        if let Some(player) = player.as_mut() {
            player.set_muted(true);
        }
        Self {
            entry,
            player,
            playback: PlaybackState::Stopped,
            muted: true,
        }
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    fn play(&mut self) {
        match self.player.as_mut() {
            Some(player) => match player.play() {
                Ok(()) => self.playback = PlaybackState::Playing,
                Err(error) => {
                    // The page equivalent of a rejected autoplay: log and
                    // carry on, the card just stays silent.
                    warn!(clip = %self.entry.path.display(), %error, "clip playback failed");
                    self.playback = PlaybackState::Stopped;
                }
            },
            None => {
                debug!(clip = %self.entry.path.display(), "no player for clip");
                self.playback = PlaybackState::Stopped;
            }
        }
    }

    fn pause(&mut self) {
        if let Some(player) = self.player.as_ref() {
            player.pause();
        }
        if self.playback.is_playing() {
            self.playback = PlaybackState::Paused;
        }
    }

    fn pause_and_rewind(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.pause();
            if let Err(error) = player.rewind() {
                warn!(clip = %self.entry.path.display(), %error, "clip rewind failed");
            }
        }
        self.playback = PlaybackState::Stopped;
    }

    pub fn toggle_play(&mut self) {
        if self.playback.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if let Some(player) = self.player.as_mut() {
            player.set_muted(self.muted);
        }
    }

    #[cfg(test)]
    fn force_playback(&mut self, playback: PlaybackState) {
        self.playback = playback;
    }
}

#[derive(Debug)]
pub struct CarouselState {
    cards: Vec<CardState>,
    current: usize,
    previous: usize,
    motion: Option<Tween>,
    visual: Option<Tween>,
}

impl CarouselState {
    /// Start centered on the middle card, which immediately takes playback.
    pub fn new(cards: Vec<CardState>) -> Self {
        let current = cards.len() / 2;
        let mut carousel = Self {
            cards,
            current,
            previous: current,
            motion: None,
            visual: None,
        };
        if !carousel.cards.is_empty() {
            carousel.enforce_exclusive_playback();
        }
        carousel
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_current(&self, index: usize) -> bool {
        index == self.current
    }

    /// Advance circularly and animate every card to its new slot.
    pub fn move_carousel(&mut self, direction: Direction, now: Instant) {
        if self.cards.is_empty() {
            return;
        }
        let n = self.cards.len();
        self.previous = self.current;
        self.current = match direction {
            Direction::Next => (self.current + 1) % n,
            Direction::Previous => (self.current + n - 1) % n,
        };
        self.motion = Some(Tween::new(MOVE_DURATION, anim::ease_out_quart, now));
        self.visual = Some(Tween::new(STATE_DURATION, anim::ease_out_cubic, now));
        self.enforce_exclusive_playback();
    }

    /// The centered card plays; every other card is paused and rewound.
    /// Cards that were rewound earlier therefore start from the beginning
    /// when they become current.
    fn enforce_exclusive_playback(&mut self) {
        let current = self.current;
        for (index, card) in self.cards.iter_mut().enumerate() {
            if index == current {
                card.play();
            } else {
                card.pause_and_rewind();
            }
        }
    }

    /// Horizontal center offset of a card relative to the lane center
    pub fn card_offset(&self, index: usize, now: Instant) -> f32 {
        let target = (index as f32 - self.current as f32) * SLOT_SPACING;
        match self.motion {
            Some(tween) if !tween.is_finished(now) => {
                let start = (index as f32 - self.previous as f32) * SLOT_SPACING;
                tween.interpolate(start, target, now)
            }
            _ => target,
        }
    }

    /// Scale/opacity/stacking of a card for the current frame
    pub fn card_visual(&self, index: usize, now: Instant) -> CardVisual {
        let target = CardVisual::for_distance(index as i32 - self.current as i32);
        match self.visual {
            Some(tween) if !tween.is_finished(now) => {
                let start = CardVisual::for_distance(index as i32 - self.previous as i32);
                CardVisual {
                    scale: tween.interpolate(start.scale, target.scale, now),
                    opacity: tween.interpolate(start.opacity, target.opacity, now),
                    on_top: target.on_top,
                }
            }
            _ => target,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.motion.is_some_and(|tween| tween.is_finished(now)) {
            self.motion = None;
        }
        if self.visual.is_some_and(|tween| tween.is_finished(now)) {
            self.visual = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some() || self.visual.is_some()
    }

    pub fn toggle_play(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.toggle_play();
        }
    }

    pub fn toggle_mute(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.toggle_mute();
        }
    }

    /// Number of cards whose media is playing right now
    pub fn playing_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| card.playback().is_playing())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cards(n: usize) -> Vec<CardState> {
        (0..n)
            .map(|i| {
                CardState::new(
                    ClipEntry {
                        path: PathBuf::from(format!("clips/{i}.ogg")),
                        title: format!("Clip {i}"),
                        poster: None,
                        present: false,
                    },
                    // No audio device in tests; playback bookkeeping still
                    // has to hold its invariants.
                    None,
                )
            })
            .collect()
    }

    fn current_count(carousel: &CarouselState) -> usize {
        (0..carousel.len())
            .filter(|&i| carousel.is_current(i))
            .count()
    }

    #[test]
    fn starts_on_the_middle_card() {
        assert_eq!(CarouselState::new(cards(5)).current(), 2);
        assert_eq!(CarouselState::new(cards(4)).current(), 2);
        assert_eq!(CarouselState::new(cards(1)).current(), 0);
    }

    #[test]
    fn exactly_one_card_is_current_after_any_move() {
        let mut carousel = CarouselState::new(cards(5));
        let now = Instant::now();

        for step in 0..12 {
            let direction = if step % 3 == 0 {
                Direction::Previous
            } else {
                Direction::Next
            };
            carousel.move_carousel(direction, now);
            assert_eq!(current_count(&carousel), 1);
        }
    }

    #[test]
    fn movement_is_circular() {
        let mut carousel = CarouselState::new(cards(5));
        let now = Instant::now();

        for _ in 0..5 {
            carousel.move_carousel(Direction::Next, now);
        }
        assert_eq!(carousel.current(), 2);

        carousel.move_carousel(Direction::Previous, now);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn failed_playback_leaves_zero_cards_playing() {
        // Every player is absent, so the play attempt on the centered card
        // degrades to Stopped. The invariant is "at most one playing".
        let mut carousel = CarouselState::new(cards(5));
        let now = Instant::now();

        carousel.move_carousel(Direction::Next, now);

        assert_eq!(carousel.playing_count(), 0);
        for (i, card) in carousel.cards().iter().enumerate() {
            assert_eq!(
                card.playback(),
                PlaybackState::Stopped,
                "card {i} should be stopped"
            );
        }
    }

    #[test]
    fn moving_pauses_and_rewinds_the_previous_card() {
        let mut carousel = CarouselState::new(cards(5));
        let now = Instant::now();

        // Pretend the centered card's playback succeeded.
        carousel.cards[2].force_playback(PlaybackState::Playing);

        carousel.move_carousel(Direction::Next, now);

        assert_eq!(carousel.current(), 3);
        assert_eq!(carousel.cards[2].playback(), PlaybackState::Stopped);
        assert!(carousel.playing_count() <= 1);
    }

    #[test]
    fn pausing_the_current_card_does_not_unseat_it() {
        let mut carousel = CarouselState::new(cards(5));

        carousel.cards[2].force_playback(PlaybackState::Playing);
        carousel.toggle_play(2);

        assert!(carousel.is_current(2));
        assert_eq!(carousel.cards[2].playback(), PlaybackState::Paused);
    }

    #[test]
    fn mute_toggle_is_per_card() {
        let mut carousel = CarouselState::new(cards(3));

        assert!(carousel.cards()[1].is_muted(), "cards start muted");
        carousel.toggle_mute(1);
        assert!(!carousel.cards()[1].is_muted());
        assert!(carousel.cards()[0].is_muted());
        assert!(carousel.cards()[2].is_muted());
    }

    #[test]
    fn slot_offsets_are_proportional_to_signed_distance() {
        let carousel = CarouselState::new(cards(5));
        let now = Instant::now();

        assert_eq!(carousel.card_offset(2, now), 0.0);
        assert_eq!(carousel.card_offset(3, now), SLOT_SPACING);
        assert_eq!(carousel.card_offset(0, now), -2.0 * SLOT_SPACING);
    }

    #[test]
    fn visual_policy_is_flat_beyond_one_step() {
        let carousel = CarouselState::new(cards(7));
        let now = Instant::now();

        let near = carousel.card_visual(2, now);
        let far = carousel.card_visual(0, now);

        assert_eq!(near, far, "no extra decay at greater distances");
        assert_eq!(near.scale, INACTIVE_SCALE);
        assert_eq!(near.opacity, INACTIVE_OPACITY);

        let center = carousel.card_visual(3, now);
        assert!(center.on_top);
        assert_eq!(center.scale, 1.0);
        assert_eq!(center.opacity, 1.0);
    }

    #[test]
    fn slots_settle_after_the_move_animation() {
        let mut carousel = CarouselState::new(cards(5));
        let now = Instant::now();

        carousel.move_carousel(Direction::Next, now);
        assert!(carousel.is_animating());

        // Mid-flight the card sits between its old and new slot.
        let mid = now + MOVE_DURATION / 2;
        let offset = carousel.card_offset(3, mid);
        assert!(offset > -SLOT_SPACING && offset < 0.0 + SLOT_SPACING);

        let end = now + MOVE_DURATION + Duration::from_millis(10);
        carousel.tick(end);
        assert!(!carousel.is_animating());
        assert_eq!(carousel.card_offset(3, end), 0.0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = CarouselState::new(Vec::new());
        let now = Instant::now();
        carousel.move_carousel(Direction::Next, now);
        assert_eq!(carousel.len(), 0);
        assert_eq!(carousel.playing_count(), 0);
    }
}
