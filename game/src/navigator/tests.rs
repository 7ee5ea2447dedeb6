use std::collections::{HashSet, VecDeque};

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::carve::carve;
use crate::grid::Grid;
use crate::host::testing::RecordingHost;

/// Two rows of three cells, carved as a single serpentine corridor.
const SMALL: Layout = Layout {
    step: 20,
    size: 20,
    wall: 2,
    maze_width: 60,
    maze_height: 40,
};

fn serpentine() -> Navigator {
    let grid = Grid::from_csv("r,lr,ld\nr,lr,lu").unwrap();
    Navigator::new(Course::build(&grid, SMALL, 0), SMALL)
}

fn carved(seed: u64) -> (Grid, Navigator) {
    let layout = Layout::NOT_FOUND;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::for_layout(&layout);
    carve(&mut grid, &mut rng);
    let course = Course::random(&grid, layout, &mut rng);
    (grid, Navigator::new(course, layout))
}

fn probe_move(nav: &Navigator, at: Point, dir: Dir4) -> (MoveOutcome, Point) {
    let mut probe = nav.clone();
    probe.place_actor(at);
    let outcome = probe.attempt_move(dir, &mut RecordingHost::default());
    (outcome, probe.actor())
}

#[test]
fn walks_the_corridor_to_the_goal() {
    let mut nav = serpentine();
    let mut host = RecordingHost::default();
    assert_eq!(nav.actor(), Point::new(0, 20));
    assert_eq!(nav.goal(), Point::new(80, 40));

    let mut moods = Vec::new();
    for dir in [Dir4::Right, Dir4::Right, Dir4::Right, Dir4::Down, Dir4::Right] {
        assert_eq!(nav.attempt_move(dir, &mut host), MoveOutcome::Accepted);
        moods.push(nav.mood());
    }
    assert_eq!(
        moods,
        [
            Mood::Closer,
            Mood::Closer,
            Mood::Closer,
            Mood::Almost,
            Mood::Reached
        ]
    );
    assert_eq!(nav.state(), PlayState::Completed);
    assert_eq!(host.achievements, [MAZE_ID]);
    assert_eq!(host.navigations, [Page::Home]);
}

#[test]
fn start_corridor_only_opens_into_the_maze() {
    let mut nav = serpentine();
    let mut host = RecordingHost::default();
    for dir in [Dir4::Up, Dir4::Down, Dir4::Left] {
        assert_eq!(nav.attempt_move(dir, &mut host), MoveOutcome::Rejected);
    }
    assert!(nav.can_move_x(Dir4::Right));
    assert!(!nav.can_move_x(Dir4::Left));
    assert!(!nav.can_move_y(Dir4::Up));
    assert!(!nav.can_move_y(Dir4::Down));
}

#[test]
fn rejected_move_changes_nothing() {
    let mut nav = serpentine();
    let mut host = RecordingHost::default();
    nav.attempt_move(Dir4::Right, &mut host);
    let (actor, distance, mood) = (nav.actor(), nav.prev_distance(), nav.mood());

    // Cell (0, 0) has a wall below it.
    assert_eq!(nav.attempt_move(Dir4::Down, &mut host), MoveOutcome::Rejected);
    assert_eq!(nav.actor(), actor);
    assert_eq!(nav.prev_distance(), distance);
    assert_eq!(nav.mood(), mood);
}

#[test]
fn frame_blocks_the_wrong_exit() {
    let mut nav = serpentine();
    let mut host = RecordingHost::default();
    for _ in 0..3 {
        nav.attempt_move(Dir4::Right, &mut host);
    }
    assert_eq!(nav.actor(), Point::new(60, 20));
    assert_eq!(nav.attempt_move(Dir4::Right, &mut host), MoveOutcome::Rejected);
    assert_eq!(nav.attempt_move(Dir4::Up, &mut host), MoveOutcome::Rejected);
}

#[test]
fn backing_off_is_farther() {
    let mut nav = serpentine();
    let mut host = RecordingHost::default();
    nav.attempt_move(Dir4::Right, &mut host);
    assert_eq!(nav.mood(), Mood::Closer);
    assert_eq!(nav.attempt_move(Dir4::Left, &mut host), MoveOutcome::Accepted);
    assert_eq!(nav.mood(), Mood::Farther);
    assert_eq!(nav.actor(), Point::new(0, 20));
}

#[test]
fn one_step_right_of_goal_completes_once() {
    let mut nav = serpentine();
    let mut host = RecordingHost::default();
    nav.place_actor(Point::new(60, 40));

    assert_eq!(nav.attempt_move(Dir4::Right, &mut host), MoveOutcome::Accepted);
    assert_eq!(nav.actor(), nav.goal());
    assert_eq!(nav.prev_distance(), 0.0);
    assert_eq!(nav.mood(), Mood::Reached);
    assert_eq!(host.achievements, [MAZE_ID]);

    for dir in Dir4::ALL {
        assert_eq!(nav.attempt_move(dir, &mut host), MoveOutcome::Rejected);
    }
    assert_eq!(nav.actor(), nav.goal());
    assert_eq!(nav.state(), PlayState::Completed);
    assert_eq!(host.achievements.len(), 1);
    assert_eq!(host.navigations.len(), 1);
}

#[test]
fn refused_achievement_skips_navigation() {
    let mut nav = serpentine();
    let mut host = RecordingHost {
        refuse: true,
        ..Default::default()
    };
    nav.place_actor(Point::new(60, 40));
    nav.attempt_move(Dir4::Right, &mut host);
    assert_eq!(nav.state(), PlayState::Completed);
    assert_eq!(host.achievements.len(), 1);
    assert!(host.navigations.is_empty());
}

#[test]
fn landscape_phone_stays_on_the_page() {
    let mut nav = serpentine();
    let mut host = RecordingHost {
        landscape: true,
        ..Default::default()
    };
    nav.place_actor(Point::new(60, 40));
    nav.attempt_move(Dir4::Right, &mut host);
    assert_eq!(host.achievements, [MAZE_ID]);
    assert!(host.navigations.is_empty());
}

#[test]
fn collisions_follow_the_carved_passages() {
    for seed in 0..5 {
        let (grid, nav) = carved(seed);
        let (start, goal) = (nav.course().start(), nav.goal());
        for (pos, cell) in grid.entries() {
            let at = Point::new((pos.x + 1) * 20, (pos.y + 1) * 20);
            for dir in Dir4::ALL {
                let into_start = pos.x == 0 && dir == Dir4::Left && at.y == start.y;
                let into_goal =
                    pos.x as usize == grid.width() - 1 && dir == Dir4::Right && at.y == goal.y;
                let expected = cell.is_open(dir) || into_start || into_goal;
                let (outcome, _) = probe_move(&nav, at, dir);
                assert_eq!(
                    outcome == MoveOutcome::Accepted,
                    expected,
                    "seed {seed}, cell {pos:?}, {dir:?}"
                );
            }
        }
    }
}

#[test]
fn every_reachable_move_can_be_undone() {
    for seed in 0..5 {
        let (grid, nav) = carved(seed);
        let goal = nav.goal();
        let start = nav.actor();
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut found_goal = false;

        while let Some(at) = queue.pop_front() {
            let mut any_move = false;
            for dir in Dir4::ALL {
                let (outcome, next) = probe_move(&nav, at, dir);
                if outcome == MoveOutcome::Rejected {
                    continue;
                }
                any_move = true;
                if next == goal {
                    found_goal = true;
                    continue;
                }
                assert_eq!(
                    probe_move(&nav, next, dir.opposite()),
                    (MoveOutcome::Accepted, at),
                    "seed {seed}: stuck after {dir:?} from {at:?}"
                );
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
            assert!(any_move, "seed {seed}: no way out of {at:?}");
        }

        assert!(found_goal, "seed {seed}: goal unreachable");
        assert_eq!(seen.len(), grid.width() * grid.height() + 1);
        assert!(seen.iter().all(|p| p.x >= 0 && p.y >= 0));
    }
}
