use macroquad::prelude::*;
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;

use crate::host::{Host, Page};
use crate::layout::Layout;
use crate::render::{control_pad, render_home, render_maze};
use crate::session::MazeSession;
use crate::storage::Achievements;

/// Seconds the solved maze stays visible before a requested page switch.
const NAVIGATE_DELAY: f64 = 1.0;

/// Host services backed by local storage and the window.
struct AppHost {
    achievements: Achievements,
    requested: Option<Page>,
}

impl Host for AppHost {
    fn achievement(&mut self, maze_id: &str) -> bool {
        self.achievements.unlock(maze_id)
    }

    fn navigate_to(&mut self, page: Page) {
        self.requested = Some(page);
    }

    fn is_coarse_landscape(&self) -> bool {
        quad_tilt::is_coarse_landscape()
    }
}

/// A page switch the maze asked for, held back for [`NAVIGATE_DELAY`].
#[derive(Debug, Default)]
struct PendingNavigation {
    due: Option<(Page, f64)>,
}

impl PendingNavigation {
    /// Queues `requested`, if any, and returns the page whose delay has run out.
    /// A newer request replaces an older one that is still waiting.
    fn step(&mut self, requested: Option<Page>, now: f64) -> Option<Page> {
        if let Some(page) = requested {
            self.due = Some((page, now + NAVIGATE_DELAY));
        }
        match self.due {
            Some((page, at)) if now >= at => {
                self.due = None;
                Some(page)
            }
            _ => None,
        }
    }
}

pub struct App {
    page: Page,
    layout: Layout,
    session: Option<MazeSession>,
    host: AppHost,
    rng: StdRng,
    screen: (f32, f32),
    pending: PendingNavigation,
}

impl App {
    /// Opens the not-found page. Without a `seed`, the maze is seeded from the clock.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| (macroquad::miniquad::date::now() * 1000.0) as u64);
        log::info!("Maze seed {seed}");
        let mut app = Self {
            page: Page::NotFound,
            layout: Layout::NOT_FOUND,
            session: None,
            host: AppHost {
                achievements: Achievements::load(),
                requested: None,
            },
            rng: StdRng::seed_from_u64(seed),
            screen: (screen_width(), screen_height()),
            pending: PendingNavigation::default(),
        };
        app.open_maze();
        app
    }

    fn open_maze(&mut self) {
        let (width, height) = self.screen;
        let buttons = control_pad(&self.layout, width, height);
        let mut session = MazeSession::new(self.layout, buttons, &mut self.rng);
        session.start();
        self.session = Some(session);
        self.page = Page::NotFound;
    }

    fn go_to(&mut self, page: Page) {
        if let Some(mut session) = self.session.take() {
            session.teardown();
        }
        match page {
            Page::NotFound => self.open_maze(),
            Page::Home => self.page = Page::Home,
        }
    }

    fn track_resize(&mut self) {
        let screen = (screen_width(), screen_height());
        if screen == self.screen {
            return;
        }
        self.screen = screen;
        if let Some(session) = self.session.as_mut() {
            session.set_controls(control_pad(&self.layout, screen.0, screen.1));
        }
    }

    fn home_dismissed() -> bool {
        !get_keys_pressed().is_empty()
            || is_mouse_button_pressed(MouseButton::Left)
            || touches()
                .iter()
                .any(|t| matches!(t.phase, TouchPhase::Started))
    }

    /// Run one frame of the app loop. Returns false if the app should exit.
    pub fn tick(&mut self) -> bool {
        if is_key_pressed(KeyCode::Escape) {
            return false;
        }
        let now = get_time();
        self.track_resize();

        match self.page {
            Page::NotFound => {
                if let Some(session) = self.session.as_mut() {
                    session.poll(now, &mut self.host);
                }
            }
            Page::Home => {
                if Self::home_dismissed() {
                    self.go_to(Page::NotFound);
                }
            }
        }

        self.follow_navigation(now);

        self.render(now);
        true
    }

    fn follow_navigation(&mut self, now: f64) {
        let requested = self.host.requested.take();
        if let Some(page) = self.pending.step(requested, now) {
            self.go_to(page);
        }
    }

    fn render(&self, now: f64) {
        match (&self.page, &self.session) {
            (Page::NotFound, Some(session)) => render_maze(session, &self.layout, now),
            _ => render_home(&self.host.achievements),
        }
    }
}
