//! Scroll-driven page state.
//!
//! Tracks the page scroll offset and derives everything the chrome needs
//! from it: the navbar's condensed look, one-shot section reveals, the
//! statistics counters and the hero parallax. Section positions come in
//! as spans (top, height) measured from the fixed layout.

use std::time::{Duration, Instant};

use crate::anim;

/// Scroll offset past which the navbar condenses
pub const NAV_SCROLL_THRESHOLD: f32 = 100.0;

/// Length of a section's fade-slide reveal
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Vertical distance a section travels while revealing
pub const REVEAL_DISTANCE: f32 = 30.0;

/// Bottom margin subtracted from the viewport before reveal checks
pub const REVEAL_MARGIN: f32 = 50.0;

/// Share of a section that must be visible to reveal it
pub const REVEAL_SHARE: f32 = 0.1;

/// Share of the stats section that must be visible to start the counters
pub const COUNTER_SHARE: f32 = 0.5;

/// Counter run time from zero to target
pub const COUNTER_DURATION: Duration = Duration::from_secs(2);

/// Hero content scrolls at half speed
pub const PARALLAX_FACTOR: f32 = 0.5;

/// The page sections, in layout order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Stats,
    Benefits,
    Gallery,
    Showcase,
    Purchase,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::About,
        Section::Stats,
        Section::Benefits,
        Section::Gallery,
        Section::Showcase,
        Section::Purchase,
        Section::Contact,
    ];

    /// Sections linked from the navbar
    pub const NAV: [Section; 6] = [
        Section::About,
        Section::Benefits,
        Section::Gallery,
        Section::Showcase,
        Section::Purchase,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "Our saffron",
            Section::Stats => "Numbers",
            Section::Benefits => "Benefits",
            Section::Gallery => "Gallery",
            Section::Showcase => "Showcase",
            Section::Purchase => "Order",
            Section::Contact => "Contact",
        }
    }
}

/// A section's vertical placement inside the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: f32,
    pub height: f32,
}

#[derive(Debug)]
pub struct RevealState {
    spans: Vec<SectionSpan>,
    scroll_offset: f32,
    viewport_height: f32,
    revealed: Vec<(Section, Instant)>,
    counters_started: Option<Instant>,
    counters_done: bool,
}

impl RevealState {
    pub fn new(spans: Vec<SectionSpan>, viewport_height: f32) -> Self {
        Self {
            spans,
            scroll_offset: 0.0,
            viewport_height,
            revealed: Vec::new(),
            counters_started: None,
            counters_done: false,
        }
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
    }

    pub fn section_top(&self, section: Section) -> Option<f32> {
        self.spans
            .iter()
            .find(|span| span.section == section)
            .map(|span| span.top)
    }

    /// Record a new scroll offset and fire any reveals it uncovers.
    pub fn on_scroll(&mut self, offset: f32, now: Instant) {
        self.scroll_offset = offset.max(0.0);
        self.check_reveals(now);
    }

    pub fn navbar_scrolled(&self) -> bool {
        self.scroll_offset > NAV_SCROLL_THRESHOLD
    }

    fn visible_amount(&self, span: &SectionSpan) -> f32 {
        let viewport_bottom = self.scroll_offset + self.viewport_height - REVEAL_MARGIN;
        let exposed_bottom = viewport_bottom - span.top;
        let exposed_top = span.top + span.height - self.scroll_offset;
        exposed_bottom.min(exposed_top).min(span.height)
    }

    fn check_reveals(&mut self, now: Instant) {
        for i in 0..self.spans.len() {
            let span = self.spans[i];
            if self.revealed.iter().any(|(s, _)| *s == span.section) {
                continue;
            }
            if self.visible_amount(&span) >= REVEAL_SHARE * span.height {
                self.revealed.push((span.section, now));
            }
        }

        if self.counters_started.is_none() {
            if let Some(span) = self
                .spans
                .iter()
                .find(|span| span.section == Section::Stats)
                .copied()
            {
                if self.visible_amount(&span) >= COUNTER_SHARE * span.height {
                    self.counters_started = Some(now);
                }
            }
        }
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.iter().any(|(s, _)| *s == section)
    }

    /// 0.0 before the reveal, eased up to 1.0 across the reveal animation
    pub fn reveal_progress(&self, section: Section, now: Instant) -> f32 {
        match self.revealed.iter().find(|(s, _)| *s == section) {
            None => 0.0,
            Some((_, started)) => {
                let elapsed = now.saturating_duration_since(*started).as_secs_f32();
                anim::ease_out_cubic(
                    (elapsed / REVEAL_DURATION.as_secs_f32()).clamp(0.0, 1.0),
                )
            }
        }
    }

    // --- statistics counters ---

    pub fn counters_started(&self) -> bool {
        self.counters_started.is_some()
    }

    /// Current display value of a counter; holds at `target` once done
    pub fn counter_value(&self, target: u64, now: Instant) -> u64 {
        match self.counters_started {
            None => 0,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started).as_secs_f32();
                let progress = (elapsed / COUNTER_DURATION.as_secs_f32()).min(1.0);
                if progress >= 1.0 {
                    target
                } else {
                    (target as f32 * progress).floor() as u64
                }
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(started) = self.counters_started {
            if now.saturating_duration_since(started) >= COUNTER_DURATION {
                self.counters_done = true;
            }
        }
    }

    /// Whether any reveal or counter still needs redraw frames
    pub fn is_animating(&self, now: Instant) -> bool {
        let revealing = self.revealed.iter().any(|(_, started)| {
            now.saturating_duration_since(*started) < REVEAL_DURATION
        });
        let counting = self.counters_started.is_some() && !self.counters_done;
        revealing || counting
    }

    // --- hero parallax ---

    /// Vertical shift and opacity of the hero content for the current
    /// scroll offset
    pub fn hero_parallax(&self) -> (f32, f32) {
        if self.viewport_height <= 0.0 {
            return (0.0, 1.0);
        }
        let scrolled = self.scroll_offset.min(self.viewport_height);
        let shift = scrolled * PARALLAX_FACTOR;
        let opacity = 1.0 - (scrolled / self.viewport_height) * 0.5;
        (shift, opacity)
    }
}

/// "12000" shown as "12,000"
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        let heights = [560.0, 440.0, 260.0, 480.0, 640.0, 620.0, 720.0, 300.0];
        let mut top = 0.0;
        Section::ALL
            .iter()
            .zip(heights)
            .map(|(&section, height)| {
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

    #[test]
    fn initial_viewport_reveals_only_what_it_shows() {
        let mut reveal = RevealState::new(spans(), 800.0);
        let now = Instant::now();

        reveal.on_scroll(0.0, now);

        assert!(reveal.is_revealed(Section::Hero));
        assert!(reveal.is_revealed(Section::About));
        assert!(!reveal.is_revealed(Section::Purchase));
    }

    #[test]
    fn reveals_fire_once_and_stick() {
        let mut reveal = RevealState::new(spans(), 800.0);
        let now = Instant::now();

        reveal.on_scroll(3000.0, now);
        assert!(reveal.is_revealed(Section::Purchase));

        // Scrolling back up never un-reveals.
        reveal.on_scroll(0.0, now);
        assert!(reveal.is_revealed(Section::Purchase));
    }

    #[test]
    fn reveal_progress_runs_from_zero_to_one() {
        let mut reveal = RevealState::new(spans(), 800.0);
        let now = Instant::now();

        assert_eq!(reveal.reveal_progress(Section::Hero, now), 0.0);

        reveal.on_scroll(0.0, now);
        let done = now + REVEAL_DURATION;
        assert_eq!(reveal.reveal_progress(Section::Hero, done), 1.0);
        assert!(reveal.reveal_progress(Section::Hero, now) < 1.0);
    }

    #[test]
    fn navbar_condenses_past_the_threshold() {
        let mut reveal = RevealState::new(spans(), 800.0);
        let now = Instant::now();

        reveal.on_scroll(NAV_SCROLL_THRESHOLD, now);
        assert!(!reveal.navbar_scrolled());

        reveal.on_scroll(NAV_SCROLL_THRESHOLD + 1.0, now);
        assert!(reveal.navbar_scrolled());
    }

    #[test]
    fn counters_need_half_the_section_visible() {
        let mut reveal = RevealState::new(spans(), 800.0);
        let now = Instant::now();

        // Stats span starts at 1000; barely reaching it is not enough.
        reveal.on_scroll(350.0, now);
        assert!(!reveal.counters_started());

        reveal.on_scroll(500.0, now);
        assert!(reveal.counters_started());
    }

    #[test]
    fn counter_value_clamps_at_target() {
        let mut reveal = RevealState::new(spans(), 800.0);
        let now = Instant::now();
        reveal.on_scroll(500.0, now);

        assert!(reveal.counter_value(12_000, now) < 12_000);

        let halfway = now + COUNTER_DURATION / 2;
        let value = reveal.counter_value(12_000, halfway);
        assert!(value > 0 && value < 12_000);

        let after = now + COUNTER_DURATION + Duration::from_secs(1);
        assert_eq!(reveal.counter_value(12_000, after), 12_000);

        reveal.tick(after);
        assert!(!reveal.is_animating(after));
    }

    #[test]
    fn parallax_shifts_at_half_speed_and_fades() {
        let mut reveal = RevealState::new(spans(), 800.0);
        let now = Instant::now();

        reveal.on_scroll(400.0, now);
        let (shift, opacity) = reveal.hero_parallax();
        assert_eq!(shift, 200.0);
        assert_eq!(opacity, 0.75);

        // Past one viewport height the effect saturates.
        reveal.on_scroll(5000.0, now);
        let (shift, opacity) = reveal.hero_parallax();
        assert_eq!(shift, 400.0);
        assert_eq!(opacity, 0.5);
    }

    #[test]
    fn counts_group_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(12_000), "12,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
