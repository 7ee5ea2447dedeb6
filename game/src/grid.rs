use crate::direction::Dir4;
use crate::layout::Layout;
use crate::position::Position;

mod parse;

/// One maze cell. A flag is `true` when the passage on that side is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) up: bool,
    pub(crate) down: bool,
    pub(crate) left: bool,
    pub(crate) right: bool,
    /// Only meaningful while carving.
    pub(crate) visited: bool,
}

impl Cell {
    pub(crate) fn is_open(&self, dir: Dir4) -> bool {
        match dir {
            Dir4::Up => self.up,
            Dir4::Down => self.down,
            Dir4::Left => self.left,
            Dir4::Right => self.right,
        }
    }

    fn open(&mut self, dir: Dir4) {
        match dir {
            Dir4::Up => self.up = true,
            Dir4::Down => self.down = true,
            Dir4::Left => self.left = true,
            Dir4::Right => self.right = true,
        }
    }

    pub(crate) fn open_dirs(self) -> impl Iterator<Item = Dir4> {
        Dir4::ALL.into_iter().filter(move |&dir| self.is_open(dir))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Grid {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid must not be empty");
        Self {
            cells: vec![vec![Cell::default(); width]; height],
            width,
            height,
        }
    }

    pub(crate) fn for_layout(layout: &Layout) -> Self {
        Self::new(layout.columns(), layout.rows())
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn bounds(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub(crate) fn at(&self, pos: Position) -> Option<Cell> {
        pos.in_bounds(self.bounds())
            .then(|| self.cells[pos.y as usize][pos.x as usize])
    }

    pub(crate) fn at_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if pos.in_bounds(self.bounds()) {
            Some(&mut self.cells[pos.y as usize][pos.x as usize])
        } else {
            None
        }
    }

    /// The adjacent cell in `dir`, if it lies inside the grid.
    pub(crate) fn neighbor(&self, pos: Position, dir: Dir4) -> Option<Position> {
        let next = pos + dir.delta();
        (pos.in_bounds(self.bounds()) && next.in_bounds(self.bounds())).then_some(next)
    }

    /// Opens the passage between `pos` and its neighbour in `dir` on both sides.
    /// Returns false, leaving the grid untouched, when there is no such neighbour.
    pub(crate) fn connect(&mut self, pos: Position, dir: Dir4) -> bool {
        let Some(next) = self.neighbor(pos, dir) else {
            return false;
        };
        self.cells[pos.y as usize][pos.x as usize].open(dir);
        self.cells[next.y as usize][next.x as usize].open(dir.opposite());
        true
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| (Position::new(x, y), cell))
        })
    }

    /// Number of open passages, each counted once.
    #[cfg(test)]
    pub(crate) fn passage_count(&self) -> usize {
        self.entries()
            .map(|(_, cell)| usize::from(cell.right) + usize::from(cell.down))
            .sum()
    }

    /// True if every open flag is matched by its neighbour and none leads off the grid.
    pub(crate) fn is_consistent(&self) -> bool {
        self.entries().all(|(pos, cell)| {
            cell.open_dirs().all(|dir| {
                self.neighbor(pos, dir)
                    .and_then(|next| self.at(next))
                    .is_some_and(|other| other.is_open(dir.opposite()))
            })
        })
    }
}
