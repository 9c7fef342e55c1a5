use super::*;
use crate::grid::model::Walls;

fn w(top: u8, right: u8, bottom: u8, left: u8) -> Walls {
    Walls {
        top: top == 1,
        right: right == 1,
        bottom: bottom == 1,
        left: left == 1,
    }
}

fn c(x: u32, y: u32) -> Coord {
    Coord::new(x, y)
}

fn run(grid: &Grid) -> Vec<Snapshot> {
    solve(grid).collect::<MazeResult<Vec<_>>>().unwrap()
}

/// 2x2 with a closed outer boundary and an open interior.
fn open_square() -> Grid {
    Grid::new(
        2,
        2,
        c(0, 0),
        c(1, 1),
        vec![w(1, 0, 0, 1), w(1, 1, 0, 0), w(0, 0, 1, 1), w(0, 1, 1, 0)],
    )
    .unwrap()
}

/// Corridor (0,0)-(1,0)-(2,0) with a branch (1,0)-(1,1) down to the goal.
fn t_branch() -> Grid {
    Grid::new(
        3,
        2,
        c(0, 0),
        c(1, 1),
        vec![
            w(1, 0, 1, 1),
            w(1, 0, 0, 0),
            w(1, 1, 1, 0),
            w(1, 1, 1, 1),
            w(0, 1, 1, 1),
            w(1, 1, 1, 1),
        ],
    )
    .unwrap()
}

#[test]
fn open_square_moves_right_then_down() {
    let snaps = run(&open_square());
    assert_eq!(snaps.len(), 2);

    assert_eq!(snaps[0].index, 1);
    assert_eq!(snaps[0].event, Some(StepEvent::Moved(Direction::Right)));
    assert_eq!(snaps[0].position, c(1, 0));
    assert!(!snaps[0].done);

    assert_eq!(snaps[1].event, Some(StepEvent::Moved(Direction::Down)));
    assert_eq!(snaps[1].position, c(1, 1));
    assert!(snaps[1].done);
    assert_eq!(snaps[1].path, vec![c(0, 0), c(1, 0), c(1, 1)]);
    assert!(snaps.iter().all(|s| s.crosses.is_empty()));
}

#[test]
fn single_cell_goal_is_done_immediately() {
    let g = Grid::new(1, 1, c(0, 0), c(0, 0), vec![Walls::closed()]).unwrap();
    let snaps = run(&g);
    assert_eq!(snaps.len(), 1);
    assert!(snaps[0].done);
    assert_eq!(snaps[0].event, Some(StepEvent::Arrived));
    assert_eq!(snaps[0].path, vec![c(0, 0)]);
}

#[test]
fn t_branch_backtracks_through_cross() {
    let snaps = run(&t_branch());
    let events: Vec<_> = snaps.iter().map(|s| s.event).collect();
    assert_eq!(
        events,
        vec![
            Some(StepEvent::Moved(Direction::Right)),
            Some(StepEvent::Moved(Direction::Right)),
            Some(StepEvent::Backtracked { from: c(2, 0) }),
            Some(StepEvent::Moved(Direction::Down)),
        ]
    );
    assert_eq!(snaps[0].crosses, vec![c(1, 0)]);
    assert_eq!(snaps[2].position, c(1, 0));

    let last = snaps.last().unwrap();
    assert!(last.done);
    assert_eq!(last.position, c(1, 1));
    assert_eq!(last.path, vec![c(0, 0), c(1, 0), c(2, 0), c(1, 0), c(1, 1)]);
}

/// Corridor along the top row with a tooth hanging off every cell; the goal is the leftmost tooth.
/// (0,0), (1,0) and (2,0) are crosses, so reaching the goal takes 7 moves and 3 teleports.
fn comb() -> Grid {
    Grid::new(
        4,
        2,
        c(0, 0),
        c(0, 1),
        vec![
            w(0, 0, 0, 1),
            w(1, 0, 0, 0),
            w(1, 0, 0, 0),
            w(1, 1, 0, 0),
            w(0, 1, 1, 1),
            w(0, 1, 1, 1),
            w(0, 1, 1, 1),
            w(0, 1, 1, 1),
        ],
    )
    .unwrap()
}

#[test]
fn walled_in_start_stalls_on_first_step() {
    let g = Grid::new(1, 2, c(0, 0), c(0, 1), vec![Walls::closed(), Walls::closed()]).unwrap();
    let mut it = solve(&g);
    let err = it.next().unwrap().unwrap_err();
    assert!(matches!(err, MazeError::StallDetected { x: 0, y: 0 }));
    assert!(it.next().is_none());
}

#[test]
fn exhausted_crosses_are_popped() {
    // A = (0,0) opens up (onto the boundary), right and down; B = (1,0) opens left, right and
    // down. Both branches of B dead-end, so B is popped and the walker falls back to A, whose
    // remaining branch leads to the goal (0,1).
    let g = Grid::new(
        3,
        2,
        c(0, 0),
        c(0, 1),
        vec![
            w(0, 0, 0, 1),
            w(1, 0, 0, 0),
            w(1, 1, 1, 0),
            w(0, 1, 1, 1),
            w(0, 1, 1, 1),
            w(1, 1, 1, 1),
        ],
    )
    .unwrap();
    let snaps = run(&g);
    let events: Vec<_> = snaps.iter().map(|s| s.event).collect();
    assert_eq!(
        events,
        vec![
            Some(StepEvent::Moved(Direction::Right)),
            Some(StepEvent::Moved(Direction::Right)),
            Some(StepEvent::Backtracked { from: c(2, 0) }),
            Some(StepEvent::Moved(Direction::Down)),
            Some(StepEvent::Backtracked { from: c(1, 1) }),
            Some(StepEvent::Moved(Direction::Down)),
        ]
    );
    assert_eq!(snaps[3].crosses, vec![c(0, 0), c(1, 0)]);
    assert_eq!(snaps[4].crosses, vec![c(0, 0)]);
    assert_eq!(snaps[4].position, c(0, 0));

    let last = snaps.last().unwrap();
    assert!(last.done);
    assert_eq!(
        last.path,
        vec![
            c(0, 0),
            c(1, 0),
            c(2, 0),
            c(1, 0),
            c(1, 1),
            c(0, 0),
            c(0, 1)
        ]
    );
}

#[test]
fn step_limit_is_enforced() {
    let g = open_square();
    let mut it = solve_with(&g, SolveOpts::default().with_step_limit(1));
    assert!(it.next().unwrap().is_ok());
    let err = it.next().unwrap().unwrap_err();
    assert!(matches!(err, MazeError::StepLimitExceeded { limit: 1 }));
    assert!(it.next().is_none());
}

#[test]
fn teleports_count_against_the_limit() {
    // Two moves reach the dead end (2,0); the teleport back to (1,0) would be step 3.
    let g = t_branch();
    let results: Vec<_> = solve_with(&g, SolveOpts::default().with_step_limit(2)).collect();
    assert_eq!(results.len(), 3);
    assert!(results[..2].iter().all(|r| r.is_ok()));
    assert!(matches!(
        results[2],
        Err(MazeError::StepLimitExceeded { limit: 2 })
    ));
}

#[test]
fn comb_needs_more_steps_than_cells() {
    let g = comb();
    let snaps = solve_with(&g, SolveOpts::default().with_step_limit(10))
        .collect::<MazeResult<Vec<_>>>()
        .unwrap();
    assert_eq!(snaps.len(), 10);
    let teleports = snaps
        .iter()
        .filter(|s| matches!(s.event, Some(StepEvent::Backtracked { .. })))
        .count();
    assert_eq!(teleports, 3);
    let last = snaps.last().unwrap();
    assert!(last.done);
    assert_eq!(last.position, c(0, 1));
}

#[test]
fn default_limit_stops_comb_at_cell_count() {
    let g = comb();
    let mut snaps = Vec::new();
    let mut err = None;
    for item in solve(&g) {
        match item {
            Ok(s) => snaps.push(s),
            Err(e) => err = Some(e),
        }
    }
    assert!(matches!(err, Some(MazeError::StepLimitExceeded { limit: 8 })));
    assert_eq!(snaps.len(), 8);
    assert_eq!(snaps[7].position, c(1, 1));
    // The refused ninth step was the teleport back to (0,0).
    assert_eq!(snaps[7].crosses, vec![c(0, 0), c(1, 0)]);
}

#[test]
fn default_limit_is_cell_count() {
    let g = t_branch();
    assert_eq!(SolveOpts::default().limit_for(&g), 6);
    assert_eq!(SolveOpts::default().with_step_limit(3).limit_for(&g), 3);
}

#[test]
fn pure_step_does_not_share_state() {
    let g = open_square();
    let s0 = SolverState::new(&g);
    let (a, snap_a) = step(&g, s0.clone(), &SolveOpts::default()).unwrap();
    let (b, snap_b) = step(&g, s0, &SolveOpts::default()).unwrap();
    assert_eq!(a, b);
    assert_eq!(snap_a, snap_b);
    assert!(a.is_visited(c(0, 0)));
    assert!(a.is_visited(c(1, 0)));
    assert_eq!(a.previous_step(), Some(Direction::Right));
}

#[test]
fn stepping_a_finished_solve_is_an_error() {
    let g = Grid::new(1, 1, c(0, 0), c(0, 0), vec![Walls::open()]).unwrap();
    let (done, _) = step(&g, SolverState::new(&g), &SolveOpts::default()).unwrap();
    assert!(done.is_done());
    assert!(step(&g, done, &SolveOpts::default()).is_err());
}

#[test]
fn initial_snapshot_shows_walker_on_start() {
    let g = t_branch();
    let snap = solve(&g).initial_snapshot();
    assert_eq!(snap.index, 0);
    assert_eq!(snap.position, c(0, 0));
    assert_eq!(snap.path, vec![c(0, 0)]);
    assert_eq!(snap.event, None);
    assert!(!snap.done);
}
