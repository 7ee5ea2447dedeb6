//! Turns a carved grid into the obstacle rectangles used for both drawing and
//! collision, and fixes where the actor starts and where the goal sits.

use rand::Rng;

use crate::grid::Grid;
use crate::layout::Layout;
use crate::position::{Point, Position};

/// Axis-aligned rectangle in page pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rect {
    pub(crate) left: i32,
    pub(crate) top: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl Rect {
    pub(crate) const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub(crate) fn right(&self) -> i32 {
        self.left + self.width
    }

    pub(crate) fn bottom(&self) -> i32 {
        self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ObstacleKind {
    /// A wall segment between two cells.
    Wall,
    /// Part of the drawn outer frame.
    Frame,
    /// Invisible piece closing off a start or goal corridor.
    Boundary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Obstacle {
    pub(crate) rect: Rect,
    pub(crate) kind: ObstacleKind,
}

impl Obstacle {
    pub(crate) fn is_visible(&self) -> bool {
        self.kind != ObstacleKind::Boundary
    }
}

/// Everything fixed at maze creation: obstacles, start and goal.
#[derive(Clone, Debug)]
pub(crate) struct Course {
    obstacles: Vec<Obstacle>,
    start: Point,
    goal: Point,
    corridors: (i32, i32),
}

impl Course {
    /// Builds a course with the start corridor at a random row.
    pub(crate) fn random<R: Rng + ?Sized>(grid: &Grid, layout: Layout, rng: &mut R) -> Self {
        let l1 = rng.gen_range(0..layout.rows() as i32) * layout.step;
        Self::build(grid, layout, l1)
    }

    /// Builds the course for a start corridor `l1` pixels below the top of the
    /// maze. The goal corridor sits at the complementary `l2`, so the two
    /// openings never line up.
    pub(crate) fn build(grid: &Grid, layout: Layout, l1: i32) -> Self {
        let Layout {
            step,
            wall,
            maze_width: w,
            maze_height: h,
            ..
        } = layout;
        let l1 = l1.clamp(0, h - step);
        let l2 = h - step - l1;

        let mut obstacles = cell_walls(grid, layout);

        let frame = [
            Rect::new(step, step, w + wall, wall),
            Rect::new(step, h + step, w + wall, wall),
            Rect::new(step, step, wall, l1),
            Rect::new(step, l1 + 2 * step, wall, l2),
            Rect::new(w + step, step, wall, l2),
            Rect::new(w + step, l2 + 2 * step, wall, l1),
        ];
        obstacles.extend(
            frame
                .into_iter()
                .filter(|r| r.width > 0 && r.height > 0)
                .map(|rect| Obstacle {
                    rect,
                    kind: ObstacleKind::Frame,
                }),
        );

        let boundary = [
            // Back walls behind the start and the goal.
            Rect::new(0, l1 + step, wall, step),
            Rect::new(w + 2 * step, l2 + step, wall, step),
            // Caps above and below each corridor.
            Rect::new(0, l1 + step, step, wall),
            Rect::new(0, l1 + 2 * step, step, wall),
            Rect::new(w + step, l2 + step, step, wall),
            Rect::new(w + step, l2 + 2 * step, step, wall),
        ];
        obstacles.extend(boundary.into_iter().map(|rect| Obstacle {
            rect,
            kind: ObstacleKind::Boundary,
        }));

        Self {
            obstacles,
            start: Point::new(0, l1 + step),
            goal: Point::new(w + step, l2 + step),
            corridors: (l1, l2),
        }
    }

    pub(crate) fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub(crate) fn start(&self) -> Point {
        self.start
    }

    pub(crate) fn goal(&self) -> Point {
        self.goal
    }

    /// Offsets of the start and goal corridors from the top of the maze.
    pub(crate) fn corridors(&self) -> (i32, i32) {
        self.corridors
    }
}

/// One vertical segment left of each cell and one horizontal segment below
/// it. The right and top sides come from the neighbouring cells; the outer
/// edges are left to the frame.
fn cell_walls(grid: &Grid, layout: Layout) -> Vec<Obstacle> {
    let Layout { step, wall, .. } = layout;
    let mut walls = Vec::new();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let Some(cell) = grid.at(Position::new(x, y)) else {
                continue;
            };
            let left = (x as i32 + 1) * step;
            let top = (y as i32 + 1) * step;
            if !cell.left && x > 0 {
                walls.push(Obstacle {
                    rect: Rect::new(left, top, wall, step),
                    kind: ObstacleKind::Wall,
                });
            }
            if !cell.down && y + 1 < grid.height() {
                walls.push(Obstacle {
                    rect: Rect::new(left, top + step, step + wall, wall),
                    kind: ObstacleKind::Wall,
                });
            }
        }
    }
    walls
}
