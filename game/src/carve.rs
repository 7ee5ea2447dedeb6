//! Randomized depth-first maze carving ("recursive backtracker").
//!
//! Each cell keeps the first `s` canonical directions in place and shuffles
//! only the rest, where `s` is the slot of the direction that led into it
//! from its parent. That bias gives the mazes their long, winding corridors.

use rand::Rng;

use crate::direction::Dir4;
use crate::grid::Grid;
use crate::position::Position;

struct Frame {
    pos: Position,
    order: [Dir4; 4],
    next: usize,
}

impl Frame {
    fn enter<R: Rng + ?Sized>(grid: &mut Grid, pos: Position, keep: usize, rng: &mut R) -> Self {
        if let Some(cell) = grid.at_mut(pos) {
            cell.visited = true;
        }
        Self {
            pos,
            order: limited_shuffle(keep, rng),
            next: 0,
        }
    }
}

/// Canonical directions with `dirs[keep..]` Fisher-Yates shuffled.
pub(crate) fn limited_shuffle<R: Rng + ?Sized>(keep: usize, rng: &mut R) -> [Dir4; 4] {
    let mut dirs = Dir4::ALL;
    let suffix = &mut dirs[keep.min(4)..];
    for i in (1..suffix.len()).rev() {
        let j = rng.gen_range(0..=i);
        suffix.swap(i, j);
    }
    dirs
}

/// Carves a perfect maze into `grid`, starting from the top-left cell.
///
/// Uses an explicit stack, so depth is bounded by the cell count rather than
/// the call stack.
pub(crate) fn carve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let root = Frame::enter(grid, Position::new(0, 0), 0, rng);
    let mut stack = vec![root];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.order.len() {
            stack.pop();
            continue;
        }
        let (pos, slot, dir) = (frame.pos, frame.next, frame.order[frame.next]);
        frame.next += 1;

        let Some(next) = grid.neighbor(pos, dir) else {
            continue;
        };
        if grid.at(next).is_some_and(|cell| cell.visited) {
            continue;
        }
        grid.connect(pos, dir);
        stack.push(Frame::enter(grid, next, slot, rng));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn carved(width: usize, height: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(width, height);
        carve(&mut grid, &mut StdRng::seed_from_u64(seed));
        grid
    }

    /// Returns (reachable cells, whether a cycle was found) by walking passages.
    fn explore(grid: &Grid) -> (usize, bool) {
        let start = Position::new(0, 0);
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([(start, None)]);
        let mut cycle = false;
        while let Some((pos, came_from)) = queue.pop_front() {
            let cell = grid.at(pos).unwrap();
            for dir in cell.open_dirs() {
                let next = pos + dir.delta();
                if Some(next) == came_from {
                    continue;
                }
                if !seen.insert(next) {
                    cycle = true;
                    continue;
                }
                queue.push_back((next, Some(pos)));
            }
        }
        (seen.len(), cycle)
    }

    #[test]
    fn four_by_four_is_a_spanning_tree() {
        let grid = carved(4, 4, 7);
        assert_eq!(grid.passage_count(), 15);
        let (reachable, cycle) = explore(&grid);
        assert_eq!(reachable, 16);
        assert!(!cycle);
    }

    #[test]
    fn every_cell_visited_and_connected() {
        for seed in 0..20 {
            let grid = carved(15, 10, seed);
            assert!(grid.entries().all(|(_, cell)| cell.visited));
            assert!(grid.is_consistent());
            assert_eq!(grid.passage_count(), 15 * 10 - 1);
            assert_eq!(explore(&grid), (150, false), "seed {seed}");
        }
    }

    #[test]
    fn same_seed_same_maze() {
        assert_eq!(carved(8, 6, 42), carved(8, 6, 42));
    }

    #[test]
    fn single_row_is_a_straight_corridor() {
        let grid = carved(5, 1, 3);
        assert_eq!(grid.passage_count(), 4);
        for x in 0..4 {
            assert!(grid.at(Position::new(x, 0)).unwrap().right);
        }
    }

    #[test]
    fn large_grid_does_not_overflow() {
        let grid = carved(200, 200, 1);
        assert_eq!(grid.passage_count(), 200 * 200 - 1);
    }

    #[test]
    fn shuffle_keeps_prefix() {
        let mut rng = StdRng::seed_from_u64(9);
        for keep in 0..=4 {
            for _ in 0..10 {
                let order = limited_shuffle(keep, &mut rng);
                assert_eq!(order[..keep], Dir4::ALL[..keep]);
                let mut sorted = order.map(Dir4::index);
                sorted.sort();
                assert_eq!(sorted, [0, 1, 2, 3]);
            }
        }
        assert_eq!(limited_shuffle(3, &mut rng), Dir4::ALL);
    }
}
