use std::ops::{Add, Sub};

use crate::direction::Dir4;

/// Cell coordinates within the maze grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) fn new(x: usize, y: usize) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
        }
    }

    pub(crate) fn in_bounds(self, bounds: (usize, usize)) -> bool {
        let (width, height) = bounds;
        let x_in_bounds = self.x >= 0 && (self.x as usize) < width;
        let y_in_bounds = self.y >= 0 && (self.y as usize) < height;
        x_in_bounds && y_in_bounds
    }
}

/// Pixel coordinates of the actor, the goal and obstacle corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub(crate) fn dist_sq(self, to: Point) -> i32 {
        (to - self).magnitude_sq()
    }

    pub(crate) fn distance(self, to: Point) -> f32 {
        (self.dist_sq(to) as f32).sqrt()
    }

    pub(crate) fn stepped(self, dir: Dir4, step: i32) -> Point {
        let PositionDelta { dx, dy } = dir.delta();
        Point::new(self.x + dx * step, self.y + dy * step)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PositionDelta {
    pub(crate) dx: i32,
    pub(crate) dy: i32,
}

impl PositionDelta {
    pub(crate) fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub(crate) fn magnitude_sq(self) -> i32 {
        self.dx * self.dx + self.dy * self.dy
    }
}

impl Add<PositionDelta> for Position {
    type Output = Position;

    fn add(self, delta: PositionDelta) -> Position {
        let x = self.x + delta.dx;
        let y = self.y + delta.dy;
        Position { x, y }
    }
}

impl Sub for Point {
    type Output = PositionDelta;

    fn sub(self, other: Point) -> PositionDelta {
        PositionDelta {
            dx: self.x - other.x,
            dy: self.y - other.y,
        }
    }
}
