use crate::position::PositionDelta;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Dir4 {
    Up,
    Down,
    Left,
    Right,
}

impl Dir4 {
    /// Canonical ordering. The maze carver keeps a prefix of this list fixed.
    pub(crate) const ALL: [Dir4; 4] = [Dir4::Up, Dir4::Down, Dir4::Left, Dir4::Right];

    pub(crate) fn delta(self) -> PositionDelta {
        match self {
            Dir4::Up => PositionDelta::new(0, -1),
            Dir4::Down => PositionDelta::new(0, 1),
            Dir4::Left => PositionDelta::new(-1, 0),
            Dir4::Right => PositionDelta::new(1, 0),
        }
    }

    pub(crate) fn opposite(self) -> Dir4 {
        match self {
            Dir4::Up => Dir4::Down,
            Dir4::Down => Dir4::Up,
            Dir4::Left => Dir4::Right,
            Dir4::Right => Dir4::Left,
        }
    }

    pub(crate) fn is_horizontal(self) -> bool {
        match self {
            Dir4::Left | Dir4::Right => true,
            Dir4::Up | Dir4::Down => false,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Dir4::Up => 0,
            Dir4::Down => 1,
            Dir4::Left => 2,
            Dir4::Right => 3,
        }
    }

    /// Single-letter code used by the CSV grid format.
    pub(crate) fn code(self) -> char {
        match self {
            Dir4::Up => 'u',
            Dir4::Down => 'd',
            Dir4::Left => 'l',
            Dir4::Right => 'r',
        }
    }
}
