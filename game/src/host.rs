/// Pages the maze can ask the router to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Page {
    NotFound,
    Home,
}

/// Services the maze calls out to. The application shell implements them.
pub(crate) trait Host {
    /// Records that the maze `maze_id` was solved. Returns false if the record
    /// could not be kept; the maze then stays on the page.
    fn achievement(&mut self, maze_id: &str) -> bool;

    /// Fire-and-forget request to switch pages.
    fn navigate_to(&mut self, page: Page);

    /// Coarse pointer in landscape orientation, i.e. a phone held sideways.
    fn is_coarse_landscape(&self) -> bool;
}
