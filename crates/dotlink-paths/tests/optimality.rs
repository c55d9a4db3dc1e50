//! Randomised checks of the A* search against a plain breadth-first search.

use std::collections::VecDeque;

use dotlink_core::{Grid, Pos, Role};
use dotlink_paths::{Flow, Outcome, Quiet, Step, observer, search};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Step distances from `start` to every reachable cell.
fn bfs(grid: &Grid, start: Pos) -> Vec<Option<u32>> {
    let mut dist = vec![None; grid.len()];
    let mut queue = VecDeque::new();
    dist[grid.index_of(start)] = Some(0);
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        let d = dist[grid.index_of(p)].unwrap();
        for n in grid.neighbors(p) {
            let ni = grid.index_of(n);
            if dist[ni].is_none() {
                dist[ni] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

fn random_pos(rng: &mut StdRng, rows: usize) -> Pos {
    Pos::new(rng.random_range(0..rows), rng.random_range(0..rows))
}

/// A random walled grid with distinct, passable start and goal.
fn random_case(rng: &mut StdRng) -> (Grid, Pos, Pos) {
    let rows = rng.random_range(3..=9);
    let mut grid = Grid::build(rows, 90);
    for r in 0..rows {
        for c in 0..rows {
            if rng.random_bool(0.3) {
                grid.set_role(Pos::new(r, c), Role::Blocked);
            }
        }
    }
    let start = random_pos(rng, rows);
    let mut goal = random_pos(rng, rows);
    while goal == start {
        goal = random_pos(rng, rows);
    }
    grid.set_role(start, Role::Start);
    grid.set_role(goal, Role::Goal);
    (grid, start, goal)
}

#[test]
fn matches_bfs_on_random_grids() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let (mut found, mut missing) = (0, 0);

    for _ in 0..400 {
        let (mut grid, start, goal) = random_case(&mut rng);
        let dist = bfs(&grid, start);
        let expected = dist[grid.index_of(goal)];

        match search(&mut grid, start, goal, &mut Quiet).unwrap() {
            Outcome::Found(path) => {
                found += 1;
                assert_eq!(Some(path.len() as u32), expected, "\n{grid}");
                assert_eq!(path.cost() as usize, path.len());
                let mut prev = start;
                for &p in &path {
                    assert!(prev.is_adjacent(p));
                    assert_ne!(grid.role(p), Role::Blocked);
                    prev = p;
                }
                assert_eq!(prev, goal);
            }
            Outcome::NotFound => {
                missing += 1;
                assert_eq!(expected, None, "\n{grid}");
                // Nothing outside the start's component was touched.
                for cell in &grid {
                    if matches!(cell.role, Role::Open | Role::Closed) {
                        assert!(dist[grid.index_of(cell.pos)].is_some(), "\n{grid}");
                    }
                }
                assert_eq!(grid.count(Role::Open), 0);
            }
            Outcome::Aborted => unreachable!("quiet observer never aborts"),
        }
        assert_eq!(grid.role(start), Role::Start);
        assert_eq!(grid.role(goal), Role::Goal);
    }

    // The density is chosen so both outcomes are exercised.
    assert!(found > 50, "found={found}");
    assert!(missing > 10, "missing={missing}");
}

#[test]
fn random_grids_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let (grid, start, goal) = random_case(&mut rng);

        let record = |mut g: Grid| {
            let mut steps = Vec::new();
            let outcome = search(
                &mut g,
                start,
                goal,
                &mut observer::from_fn(|_, s: Step| {
                    steps.push(s);
                    Flow::Continue
                }),
            )
            .unwrap();
            (outcome, steps, g)
        };

        let first = record(grid.clone());
        let second = record(grid);
        assert_eq!(first, second);
    }
}
