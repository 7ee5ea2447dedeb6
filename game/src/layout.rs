/// Fixed pixel geometry of a maze page.
///
/// The carved area starts one `step` in from the top-left corner so the start
/// and goal corridors fit on either side of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Layout {
    /// Distance covered by one move, and the edge length of a cell.
    pub(crate) step: i32,
    /// Edge length of the actor's bounding box.
    pub(crate) size: i32,
    /// Thickness of a drawn wall.
    pub(crate) wall: i32,
    pub(crate) maze_width: i32,
    pub(crate) maze_height: i32,
}

impl Layout {
    pub(crate) const NOT_FOUND: Layout = Layout {
        step: 20,
        size: 20,
        wall: 2,
        maze_width: 300,
        maze_height: 200,
    };

    pub(crate) fn columns(&self) -> usize {
        (self.maze_width / self.step).max(1) as usize
    }

    pub(crate) fn rows(&self) -> usize {
        (self.maze_height / self.step).max(1) as usize
    }

    /// Width of everything drawn, corridors included.
    pub(crate) fn outer_width(&self) -> i32 {
        self.maze_width + 2 * self.step + self.wall
    }

    pub(crate) fn outer_height(&self) -> i32 {
        self.maze_height + 2 * self.step + self.wall
    }
}
