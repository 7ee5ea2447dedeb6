use crate::course::{Course, Rect};
use crate::direction::Dir4;
use crate::host::{Host, Page};
use crate::layout::Layout;
use crate::position::Point;

/// Identifier reported to the host when the maze is solved.
pub(crate) const MAZE_ID: &str = "maze";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MoveOutcome {
    Accepted,
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlayState {
    Playing,
    Completed,
}

/// Proximity feedback shown on the actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Mood {
    /// No move made yet.
    #[default]
    Waiting,
    Closer,
    Farther,
    /// Exactly one step from the goal.
    Almost,
    Reached,
}

/// True if `rect` does not stop an actor of `size` at `at` from stepping in `dir`.
///
/// Right and down test a range shifted back by the actor's size, left and up
/// the unshifted one, so an actor touching a wall can always back away.
fn clears(rect: &Rect, at: Point, dir: Dir4, size: i32) -> bool {
    let Point { x, y } = at;
    if dir.is_horizontal() {
        let beside = y < rect.top || y > rect.bottom() - size;
        let ahead = match dir {
            Dir4::Right => x < rect.left - size || x > rect.right() - size,
            _ => x < rect.left || x > rect.right(),
        };
        beside || ahead
    } else {
        let beside = x < rect.left || x > rect.right() - size;
        let ahead = match dir {
            Dir4::Down => y < rect.top - size || y > rect.bottom() - size,
            _ => y < rect.top || y > rect.bottom(),
        };
        beside || ahead
    }
}

/// Moves the actor through one course and reports how close it is getting.
#[derive(Clone, Debug)]
pub(crate) struct Navigator {
    course: Course,
    step: i32,
    size: i32,
    actor: Point,
    prev_distance: f32,
    mood: Mood,
    state: PlayState,
}

impl Navigator {
    pub(crate) fn new(course: Course, layout: Layout) -> Self {
        Self {
            actor: course.start(),
            course,
            step: layout.step,
            size: layout.size,
            prev_distance: (layout.maze_width * 2) as f32,
            mood: Mood::default(),
            state: PlayState::Playing,
        }
    }

    pub(crate) fn course(&self) -> &Course {
        &self.course
    }

    pub(crate) fn actor(&self) -> Point {
        self.actor
    }

    pub(crate) fn goal(&self) -> Point {
        self.course.goal()
    }

    pub(crate) fn mood(&self) -> Mood {
        self.mood
    }

    pub(crate) fn state(&self) -> PlayState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn prev_distance(&self) -> f32 {
        self.prev_distance
    }

    pub(crate) fn can_move_x(&self, dir: Dir4) -> bool {
        debug_assert!(dir.is_horizontal());
        self.can_move(dir)
    }

    pub(crate) fn can_move_y(&self, dir: Dir4) -> bool {
        debug_assert!(!dir.is_horizontal());
        self.can_move(dir)
    }

    fn can_move(&self, dir: Dir4) -> bool {
        self.course
            .obstacles()
            .iter()
            .all(|o| clears(&o.rect, self.actor, dir, self.size))
    }

    /// Steps the actor in `dir` if nothing blocks it. A rejected move changes
    /// nothing; once the goal is reached every move is rejected.
    pub(crate) fn attempt_move(&mut self, dir: Dir4, host: &mut dyn Host) -> MoveOutcome {
        if self.state == PlayState::Completed {
            return MoveOutcome::Rejected;
        }
        let allowed = if dir.is_horizontal() {
            self.can_move_x(dir)
        } else {
            self.can_move_y(dir)
        };
        if !allowed {
            return MoveOutcome::Rejected;
        }

        self.actor = self.actor.stepped(dir, self.step);
        self.update_mood();
        if self.mood == Mood::Reached {
            self.complete(host);
        }
        MoveOutcome::Accepted
    }

    fn update_mood(&mut self) {
        let goal = self.goal();
        let dist_sq = self.actor.dist_sq(goal);
        let distance = self.actor.distance(goal);
        self.mood = if dist_sq == 0 {
            Mood::Reached
        } else if dist_sq == self.step * self.step {
            Mood::Almost
        } else if distance <= self.prev_distance {
            Mood::Closer
        } else {
            Mood::Farther
        };
        self.prev_distance = distance;
    }

    fn complete(&mut self, host: &mut dyn Host) {
        self.state = PlayState::Completed;
        log::info!("Maze solved");
        if !host.achievement(MAZE_ID) {
            log::warn!("Achievement for {MAZE_ID} was not recorded; staying on the page");
            return;
        }
        if host.is_coarse_landscape() {
            log::debug!("Coarse landscape display, skipping navigation");
            return;
        }
        host.navigate_to(Page::Home);
    }

    #[cfg(test)]
    pub(crate) fn place_actor(&mut self, at: Point) {
        self.actor = at;
    }
}

#[cfg(test)]
mod tests;
