use super::{
    dialog::render_dialog, footer::render_footer, render_landing, welcome::render_welcome,
};
use crate::events::{AppEvent, EventHandler};
use crate::layout::{PageLayout, ScreenLayout, ScreenRects, Slot};
use anyhow::Result;
use medgo_core::{
    dialog::Dialog,
    landing::{CtaButton, LandingPage},
    settings::{EntryScreen, Settings},
    theme::Theme,
};
use ratatui::{
    backend::Backend,
    prelude::{Frame, Rect, Terminal},
    widgets::Block,
};
use std::time::{Duration, Instant};
use strum::EnumIter;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Target frame interval
const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum AppMode {
    Landing,
    Dialog,
    Welcome,
}

fn button_slot(button: CtaButton) -> Slot {
    match button {
        CtaButton::GetStarted => Slot::GetStarted,
        CtaButton::BookConsultation => Slot::BookButton,
        CtaButton::LearnMore => Slot::LearnMoreButton,
    }
}

pub struct App {
    should_quit: bool,
    theme: Theme,
    settings: Settings,
    page: Option<LandingPage>,
    dialog: Option<Dialog>,
    scroll: u16,
    screen_layout: ScreenLayout,
    page_layout: Option<PageLayout>,
    viewport_height: u16,
    events: EventHandler,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self> {
        let page = match settings.entry {
            EntryScreen::Landing => Some(LandingPage::mount(settings.motion())),
            EntryScreen::Welcome => None,
        };
        info!(entry = %settings.entry, speed = settings.animation_speed, "starting");
        Ok(Self {
            should_quit: false,
            theme: Theme::default(),
            settings,
            page,
            dialog: None,
            scroll: 0,
            screen_layout: ScreenLayout::new()?,
            page_layout: None,
            viewport_height: 0,
            events: EventHandler::new(Duration::ZERO),
        })
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut ticker = tokio::time::interval(FRAME);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last = Instant::now();

        while !self.should_quit {
            ticker.tick().await;
            let now = Instant::now();
            self.tick(self.frame_delta(now.duration_since(last)));
            last = now;

            self.draw(terminal)?;

            while let Some(event) = self.events.next_event(self.mode())? {
                self.handle_event(event);
                if self.should_quit {
                    break;
                }
            }
        }

        self.unmount();
        Ok(())
    }

    pub fn mode(&self) -> AppMode {
        if self.dialog.is_some() {
            AppMode::Dialog
        } else if self.page.is_some() {
            AppMode::Landing
        } else {
            AppMode::Welcome
        }
    }

    /// Wall-clock frame time scaled by the configured animation speed
    fn frame_delta(&self, elapsed: Duration) -> Duration {
        elapsed.mul_f64(self.settings.frame_scale())
    }

    /// Advance the page; a triggered action opens its dialog unless one is
    /// already showing
    fn tick(&mut self, dt: Duration) {
        let Some(page) = self.page.as_mut() else {
            return;
        };
        for action in page.advance(dt) {
            if self.dialog.is_some() {
                debug!(%action, "dialog already open, action dropped");
                continue;
            }
            info!(%action, "opening dialog");
            self.dialog = Some(action.dialog());
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let rects = self.relayout(terminal.size()?)?;
        terminal.draw(|frame| self.render(frame, rects))?;
        Ok(())
    }

    fn relayout(&mut self, area: Rect) -> Result<ScreenRects> {
        let rects = self.screen_layout.compute(area)?;
        self.viewport_height = rects.body.height;
        if self.page.is_some() && self.page_layout.as_ref().map(|l| l.width) != Some(rects.body.width) {
            debug!(width = rects.body.width, "page relayout");
            self.page_layout = Some(PageLayout::compute(rects.body.width)?);
        }
        self.scroll = self.scroll.min(self.max_scroll());
        Ok(rects)
    }

    fn render(&self, frame: &mut Frame, rects: ScreenRects) {
        frame.render_widget(Block::default().style(self.theme.page_style()), frame.size());

        match (&self.page, &self.page_layout) {
            (Some(page), Some(layout)) => {
                render_landing(frame, rects.body, page, layout, self.scroll, &self.theme)
            }
            _ => render_welcome(frame, rects.body),
        }
        if let Some(dialog) = &self.dialog {
            render_dialog(frame, dialog, &self.theme);
        }
        render_footer(frame, rects.footer, &self.theme, self.mode());
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit | AppEvent::ForceQuit => {
                info!(?event, "quit requested");
                self.should_quit = true;
            }
            AppEvent::SelectNext => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.select_next();
                }
            }
            AppEvent::SelectPrevious => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.select_previous();
                }
            }
            AppEvent::Dismiss => {
                if let Some(dialog) = self.dialog.take() {
                    debug!(title = dialog.title(), "dialog dismissed");
                }
            }
            AppEvent::Activate => self.activate(),
            AppEvent::FocusNext => {
                if let Some(page) = self.page.as_mut() {
                    page.focus_next();
                    self.scroll_to_focus();
                }
            }
            AppEvent::FocusPrevious => {
                if let Some(page) = self.page.as_mut() {
                    page.focus_previous();
                    self.scroll_to_focus();
                }
            }
            AppEvent::ScrollUp => self.scroll_by(-1),
            AppEvent::ScrollDown => self.scroll_by(1),
            AppEvent::PageUp => self.scroll_by(-(self.viewport_height as i32)),
            AppEvent::PageDown => self.scroll_by(self.viewport_height as i32),
            AppEvent::Home => self.scroll = 0,
            AppEvent::End => self.scroll = self.max_scroll(),
            AppEvent::Resize(width, height) => debug!(width, height, "terminal resized"),
            AppEvent::None => {}
        }
    }

    fn activate(&mut self) {
        if let Some(dialog) = self.dialog.take() {
            let choice = dialog.confirm();
            debug!(choice = choice.label, "dialog closed");
            return;
        }
        match self.page.as_mut() {
            Some(page) => {
                let button = page.focus();
                if page.activate_focused() {
                    debug!(%button, "button pressed");
                } else {
                    debug!(%button, "press ignored");
                }
            }
            None => debug!("welcome shell button has no action"),
        }
    }

    fn max_scroll(&self) -> u16 {
        self.page_layout
            .as_ref()
            .map(|l| l.height.saturating_sub(self.viewport_height))
            .unwrap_or(0)
    }

    fn scroll_by(&mut self, rows: i32) {
        let target = (self.scroll as i32 + rows).clamp(0, self.max_scroll() as i32);
        self.scroll = target as u16;
    }

    /// Scroll the least amount that brings the focused button into view
    fn scroll_to_focus(&mut self) {
        let (Some(page), Some(layout)) = (&self.page, &self.page_layout) else {
            return;
        };
        let rect = layout.slot(button_slot(page.focus()));
        if rect.y < self.scroll {
            self.scroll = rect.y;
        } else if rect.bottom() > self.scroll + self.viewport_height {
            self.scroll = rect.bottom().saturating_sub(self.viewport_height);
        }
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn unmount(&mut self) {
        if let Some(page) = self.page.as_mut() {
            page.unmount();
        }
    }
}
