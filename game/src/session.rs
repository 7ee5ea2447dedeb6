use quad_tilt::OrientationListener;
use rand::Rng;

use crate::carve::carve;
use crate::course::Course;
use crate::grid::Grid;
use crate::host::Host;
use crate::input::{ButtonPad, InputDispatcher, InputEvent, poll_events};
use crate::layout::Layout;
use crate::navigator::{Navigator, PlayState};

/// One play of the maze, from page open to teardown.
///
/// The session is the only owner of the shared orientation listener: it is
/// registered by [`MazeSession::start`] and removed by
/// [`MazeSession::teardown`] or when the session is dropped.
pub(crate) struct MazeSession {
    navigator: Navigator,
    input: InputDispatcher,
    listener: Option<OrientationListener>,
}

impl MazeSession {
    pub(crate) fn new<R: Rng + ?Sized>(
        layout: Layout,
        buttons: Option<ButtonPad>,
        rng: &mut R,
    ) -> Self {
        let mut grid = Grid::for_layout(&layout);
        carve(&mut grid, rng);
        debug_assert!(grid.is_consistent());
        let course = Course::random(&grid, layout, rng);
        log::debug!(
            "Carved {}x{} maze with corridors at {:?}:\n{}",
            grid.width(),
            grid.height(),
            course.corridors(),
            grid.to_csv()
        );

        Self {
            navigator: Navigator::new(course, layout),
            input: InputDispatcher::new(buttons),
            listener: None,
        }
    }

    pub(crate) fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub(crate) fn input(&self) -> &InputDispatcher {
        &self.input
    }

    /// Replaces the on-screen controls, e.g. after the window was resized.
    pub(crate) fn set_controls(&mut self, buttons: Option<ButtonPad>) {
        self.input.set_buttons(buttons);
    }

    pub(crate) fn start(&mut self) {
        if self.listener.is_none() {
            self.listener = Some(OrientationListener::register());
        }
    }

    pub(crate) fn teardown(&mut self) {
        if self.listener.take().is_some() {
            log::debug!("Maze session torn down");
        }
    }

    #[cfg(test)]
    pub(crate) fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    /// Applies one input event. Once the maze is solved, input is ignored.
    pub(crate) fn handle(&mut self, event: InputEvent, now: f64, host: &mut dyn Host) {
        if self.navigator.state() == PlayState::Completed {
            return;
        }
        for dir in self.input.dispatch(event, now) {
            self.navigator.attempt_move(dir, host);
        }
    }

    /// Polls and applies this frame's input. Keys and presses are read only
    /// while started, the same as tilt, so a torn-down session stays inert.
    pub(crate) fn poll(&mut self, now: f64, host: &mut dyn Host) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        let events = poll_events(Some(listener));
        for event in events {
            self.handle(event, now, host);
        }
    }
}
