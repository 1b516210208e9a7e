//! Landing page state
//!
//! Owns every animated element of the MedGo+ landing page. Creating a
//! [`LandingPage`] is mounting it: all timers start counting from zero and
//! the page cascades into view as the host advances it.

use crate::content::{self, Feature, Stat, FEATURES, STATS};
use crate::dialog::Dialog;
use crate::motion::{Float, Motion, PopIn, Pulse, Reveal, Tally};
use std::time::Duration;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::debug;

pub const LOGO_DELAY_MS: u64 = 300;
pub const TAGLINE_DELAY_MS: u64 = 600;
pub const SUBTITLE_DELAY_MS: u64 = 900;
pub const GET_STARTED_DELAY_MS: u64 = 1200;
pub const STAT_DELAYS_MS: [u64; 3] = [1500, 1700, 1900];
pub const FEATURES_TITLE_DELAY_MS: u64 = 2200;
pub const FEATURES_SUBTITLE_DELAY_MS: u64 = 2400;
pub const FEATURE_DELAYS_MS: [u64; 3] = [2600, 2800, 3000];
pub const CTA_TITLE_DELAY_MS: u64 = 3200;
pub const CTA_SUBTITLE_DELAY_MS: u64 = 3400;
pub const CTA_BUTTONS_DELAY_MS: u64 = 3600;
pub const BOOK_DELAY_MS: u64 = 3800;
pub const LEARN_MORE_DELAY_MS: u64 = 4000;

pub const LOGO_FLOAT_MS: u64 = 6000;
pub const ICON_FLOAT_MS: u64 = 4000;
pub const BACKGROUND_FLOATS_MS: [u64; 3] = [4000, 5000, 6000];

/// What a call-to-action asks the host to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CtaAction {
    Welcome,
    Features,
}

impl CtaAction {
    pub fn dialog(self) -> Dialog {
        match self {
            Self::Welcome => Dialog::welcome(),
            Self::Features => Dialog::features(),
        }
    }
}

/// Focusable buttons, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CtaButton {
    GetStarted,
    BookConsultation,
    LearnMore,
}

impl CtaButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::GetStarted => content::GET_STARTED,
            Self::BookConsultation => content::BOOK_CONSULTATION,
            Self::LearnMore => content::LEARN_MORE,
        }
    }

    pub fn action(self) -> CtaAction {
        match self {
            Self::GetStarted | Self::BookConsultation => CtaAction::Welcome,
            Self::LearnMore => CtaAction::Features,
        }
    }

    fn offset_by(self, step: usize) -> Self {
        let order: Vec<Self> = Self::iter().collect();
        let index = order.iter().position(|b| *b == self).unwrap_or(0);
        order[(index + step) % order.len()]
    }

    pub fn next(self) -> Self {
        self.offset_by(1)
    }

    pub fn previous(self) -> Self {
        self.offset_by(Self::iter().len() - 1)
    }
}

#[derive(Debug, Clone)]
pub struct FeatureCard {
    pub feature: Feature,
    pub reveal: Reveal,
    pub pop: PopIn,
    pub icon_float: Float,
}

impl FeatureCard {
    fn new(feature: Feature, delay_ms: u64, motion: Motion) -> Self {
        Self {
            feature,
            reveal: Reveal::new(delay_ms),
            pop: PopIn::new(delay_ms),
            icon_float: Float::new(ICON_FLOAT_MS, motion),
        }
    }

    fn advance(&mut self, dt: Duration) {
        self.reveal.advance(dt);
        self.pop.advance(dt);
        self.icon_float.advance(dt);
    }

    pub fn is_settled(&self) -> bool {
        self.reveal.is_settled() && self.pop.is_settled()
    }
}

#[derive(Debug)]
pub struct StatCard {
    pub stat: Stat,
    pub tally: Tally,
}

#[derive(Debug)]
pub struct LandingPage {
    motion: Motion,
    elapsed: Duration,
    focus: CtaButton,
    pub background: [Float; 3],
    pub logo: Reveal,
    pub logo_float: Float,
    pub tagline: Reveal,
    pub subtitle: Reveal,
    pub get_started: Pulse<CtaAction>,
    pub stats: Vec<StatCard>,
    pub features_title: Reveal,
    pub features_subtitle: Reveal,
    pub features: Vec<FeatureCard>,
    pub cta_title: Reveal,
    pub cta_subtitle: Reveal,
    pub cta_buttons: Reveal,
    pub book: Pulse<CtaAction>,
    pub learn_more: Pulse<CtaAction>,
}

impl LandingPage {
    pub fn mount(motion: Motion) -> Self {
        debug!(?motion, "landing page mounted");
        Self {
            motion,
            elapsed: Duration::ZERO,
            focus: CtaButton::GetStarted,
            background: BACKGROUND_FLOATS_MS.map(|period| Float::new(period, motion)),
            logo: Reveal::new(LOGO_DELAY_MS),
            logo_float: Float::new(LOGO_FLOAT_MS, motion),
            tagline: Reveal::new(TAGLINE_DELAY_MS),
            subtitle: Reveal::new(SUBTITLE_DELAY_MS),
            get_started: Pulse::new(
                CtaButton::GetStarted.action(),
                GET_STARTED_DELAY_MS,
                motion,
            ),
            stats: STATS
                .iter()
                .zip(STAT_DELAYS_MS)
                .map(|(stat, delay)| StatCard {
                    stat: *stat,
                    tally: Tally::new(stat.target, delay),
                })
                .collect(),
            features_title: Reveal::new(FEATURES_TITLE_DELAY_MS),
            features_subtitle: Reveal::new(FEATURES_SUBTITLE_DELAY_MS),
            features: FEATURES
                .iter()
                .zip(FEATURE_DELAYS_MS)
                .map(|(feature, delay)| FeatureCard::new(*feature, delay, motion))
                .collect(),
            cta_title: Reveal::new(CTA_TITLE_DELAY_MS),
            cta_subtitle: Reveal::new(CTA_SUBTITLE_DELAY_MS),
            cta_buttons: Reveal::new(CTA_BUTTONS_DELAY_MS),
            book: Pulse::new(
                CtaButton::BookConsultation.action(),
                BOOK_DELAY_MS,
                motion,
            ),
            learn_more: Pulse::new(CtaButton::LearnMore.action(), LEARN_MORE_DELAY_MS, motion),
        }
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Time since mount
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn focus(&self) -> CtaButton {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn button(&self, button: CtaButton) -> &Pulse<CtaAction> {
        match button {
            CtaButton::GetStarted => &self.get_started,
            CtaButton::BookConsultation => &self.book,
            CtaButton::LearnMore => &self.learn_more,
        }
    }

    fn button_mut(&mut self, button: CtaButton) -> &mut Pulse<CtaAction> {
        match button {
            CtaButton::GetStarted => &mut self.get_started,
            CtaButton::BookConsultation => &mut self.book,
            CtaButton::LearnMore => &mut self.learn_more,
        }
    }

    /// Visible opacity of a button, including the row it sits in
    pub fn button_opacity(&self, button: CtaButton) -> f32 {
        let own = self.button(button).opacity();
        match button {
            CtaButton::GetStarted => own,
            CtaButton::BookConsultation | CtaButton::LearnMore => own * self.cta_buttons.opacity(),
        }
    }

    /// Press a button. Its action arrives from [`LandingPage::advance`]
    /// once the press feedback has played.
    pub fn activate(&mut self, button: CtaButton) -> bool {
        self.focus = button;
        self.button_mut(button).press()
    }

    pub fn activate_focused(&mut self) -> bool {
        self.activate(self.focus)
    }

    /// Move every element forward by `dt` and collect triggered actions
    pub fn advance(&mut self, dt: Duration) -> Vec<CtaAction> {
        self.elapsed += dt;

        for float in &mut self.background {
            float.advance(dt);
        }
        self.logo.advance(dt);
        self.logo_float.advance(dt);
        self.tagline.advance(dt);
        self.subtitle.advance(dt);
        for card in &mut self.stats {
            card.tally.advance(dt);
        }
        self.features_title.advance(dt);
        self.features_subtitle.advance(dt);
        for card in &mut self.features {
            card.advance(dt);
        }
        self.cta_title.advance(dt);
        self.cta_subtitle.advance(dt);
        self.cta_buttons.advance(dt);

        [
            self.get_started.advance(dt),
            self.book.advance(dt),
            self.learn_more.advance(dt),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Every reveal in page order
    pub fn reveals(&self) -> Vec<&Reveal> {
        let mut reveals = vec![
            &self.logo,
            &self.tagline,
            &self.subtitle,
            &self.features_title,
            &self.features_subtitle,
        ];
        reveals.extend(self.features.iter().map(|card| &card.reveal));
        reveals.extend([&self.cta_title, &self.cta_subtitle, &self.cta_buttons]);
        reveals
    }

    /// All entrances finished; only looping motion remains
    pub fn is_settled(&self) -> bool {
        self.reveals().iter().all(|r| r.is_settled())
            && self.features.iter().all(FeatureCard::is_settled)
            && self.stats.iter().all(|card| card.tally.is_settled())
            && CtaButton::iter().all(|b| self.button(b).is_settled())
    }

    /// Release every timer the page owns
    pub fn unmount(&mut self) {
        for card in &mut self.stats {
            card.tally.unmount();
        }
        debug!(elapsed_ms = self.elapsed.as_millis() as u64, "landing page unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_frames(page: &mut LandingPage, frames: usize) -> Vec<CtaAction> {
        let mut actions = Vec::new();
        for _ in 0..frames {
            actions.extend(page.advance(FRAME));
        }
        actions
    }

    #[test]
    fn test_everything_starts_hidden() {
        let page = LandingPage::mount(Motion::Full);
        assert!(page.reveals().iter().all(|r| r.opacity() == 0.0));
        assert!(CtaButton::iter().all(|b| page.button_opacity(b) == 0.0));
        assert!(page.stats.iter().all(|s| s.tally.displayed() == 0));
        assert_eq!(page.reveals().len(), 11);
    }

    #[test]
    fn test_page_fully_visible_after_longest_delay() {
        let mut page = LandingPage::mount(Motion::Full);
        let actions = run_frames(&mut page, 400);
        assert!(actions.is_empty());
        assert!(page.elapsed() > Duration::from_millis(LEARN_MORE_DELAY_MS));

        assert!(page.is_settled());
        assert_eq!(page.background.len(), 3);
        assert_eq!(page.features.len(), 3);
        for reveal in page.reveals() {
            assert_eq!(reveal.opacity(), 1.0);
            assert_eq!(reveal.offset(), 0.0);
        }
        for card in &page.features {
            assert_eq!(card.pop.scale(), 1.0);
        }
        for button in [CtaButton::BookConsultation, CtaButton::LearnMore] {
            assert_eq!(page.button_opacity(button), 1.0);
        }
        let shown: Vec<u64> = page.stats.iter().map(|s| s.tally.displayed()).collect();
        assert_eq!(shown, [1000, 150, 25]);
    }

    #[test]
    fn test_later_delays_never_start_first() {
        let mut page = LandingPage::mount(Motion::Full);
        for _ in 0..300 {
            page.advance(FRAME);
            let mut reveals = page.reveals();
            reveals.sort_by_key(|r| r.delay());
            let started: Vec<bool> = reveals.iter().map(|r| r.has_started()).collect();
            assert!(started.windows(2).all(|w| w[0] || !w[1]), "{started:?}");
        }
    }

    #[test]
    fn test_primary_cta_opens_exactly_one_welcome_dialog() {
        let mut page = LandingPage::mount(Motion::Full);
        run_frames(&mut page, 300);

        assert_eq!(page.focus(), CtaButton::GetStarted);
        assert!(page.activate_focused());
        assert!(!page.activate_focused());
        let actions = run_frames(&mut page, 20);
        assert_eq!(actions, [CtaAction::Welcome]);

        let dialog = actions[0].dialog();
        assert_eq!(dialog.title(), "Welcome to MedGo+! 🏥");
        let labels: Vec<_> = dialog.choices().iter().map(|c| c.label).collect();
        assert_eq!(labels, ["Book Now", "Learn More"]);
    }

    #[test]
    fn test_action_waits_for_press_feedback() {
        let mut page = LandingPage::mount(Motion::Full);
        page.activate(CtaButton::LearnMore);
        assert_eq!(page.focus(), CtaButton::LearnMore);
        assert!(page.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(page.advance(Duration::from_millis(1)), [CtaAction::Features]);
    }

    #[test]
    fn test_book_consultation_shares_welcome_dialog() {
        assert_eq!(CtaButton::BookConsultation.action(), CtaAction::Welcome);
        assert_eq!(CtaButton::LearnMore.action().dialog().title(), "MedGo+ Features");
    }

    #[test]
    fn test_focus_cycles_in_page_order() {
        let mut page = LandingPage::mount(Motion::Reduced);
        page.focus_next();
        assert_eq!(page.focus(), CtaButton::BookConsultation);
        page.focus_next();
        assert_eq!(page.focus(), CtaButton::LearnMore);
        page.focus_next();
        assert_eq!(page.focus(), CtaButton::GetStarted);
        page.focus_previous();
        assert_eq!(page.focus(), CtaButton::LearnMore);
    }

    #[test]
    fn test_reduced_motion_keeps_decorations_still() {
        let mut page = LandingPage::mount(Motion::Reduced);
        run_frames(&mut page, 400);
        assert!(page.background.iter().all(|f| f.offset() == 0.0));
        assert_eq!(page.logo_float.offset(), 0.0);
        assert_eq!(page.get_started.scale(), 1.0);
        assert!(page.is_settled());
    }

    #[test]
    fn test_unmount_mid_count_stops_tallies() {
        let mut page = LandingPage::mount(Motion::Full);
        run_frames(&mut page, 110);
        assert!(page.stats[0].tally.is_counting());
        page.unmount();
        assert!(page.stats.iter().all(|s| !s.tally.is_counting()));
    }
}
