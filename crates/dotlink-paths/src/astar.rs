use dotlink_core::{Grid, Pos, Role, manhattan};

use crate::error::SearchError;
use crate::observer::{Flow, Step, StepObserver};
use crate::reconstruct::{reconstruct, trace};
use crate::state::SearchState;

/// A shortest path, as found by [`search`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Pos>,
    cost: u32,
}

impl Path {
    /// Cells from the first step after the start up to and including the
    /// goal.
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `g` of the goal when it was popped from the frontier.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn goal(&self) -> Option<Pos> {
        self.cells.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pos> {
        self.cells.iter()
    }

    pub fn into_cells(self) -> Vec<Pos> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// How a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was reached; the path is optimal in step count.
    Found(Path),
    /// The frontier ran dry: no path exists under the current obstacles.
    NotFound,
    /// The observer asked to stop.
    Aborted,
}

impl Outcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

fn check_endpoints(grid: &Grid, start: Pos, goal: Pos) -> Result<(), SearchError> {
    for pos in [start, goal] {
        if !grid.contains(pos) {
            return Err(SearchError::OutOfBounds {
                pos,
                rows: grid.rows(),
            });
        }
    }
    if start == goal {
        return Err(SearchError::SameEndpoints(start));
    }
    for pos in [start, goal] {
        if grid[pos].is_blocked() {
            return Err(SearchError::BlockedEndpoint(pos));
        }
    }
    Ok(())
}

/// Find a minimum-step 4-directional path from `start` to `goal` with A*
/// and the Manhattan heuristic.
///
/// While it runs, the search writes its progress into the grid: discovered
/// cells become [`Role::Open`], expanded cells other than `start` become
/// [`Role::Closed`], and on success the cells between start and goal become
/// [`Role::Path`]. The goal ends up as [`Role::Goal`] when found; otherwise
/// its role is restored to what it was before the run.
///
/// `observer` is called after every expansion and after every Path mark.
/// Frontier ties on `f` are broken by insertion order, so identical inputs
/// always expand the same cells in the same order.
///
/// Endpoint violations are reported as [`SearchError`] before the grid is
/// modified.
pub fn search<O: StepObserver + ?Sized>(
    grid: &mut Grid,
    start: Pos,
    goal: Pos,
    observer: &mut O,
) -> Result<Outcome, SearchError> {
    check_endpoints(grid, start, goal)?;
    log::debug!(
        "astar: {start} -> {goal} on a {n}x{n} grid",
        n = grid.rows()
    );

    let goal_role = grid.role(goal);
    let mut st = SearchState::new(grid);

    // Initialise the start node.
    {
        let si = grid.index_of(start);
        let node = &mut st.nodes[si];
        node.g = 0;
        node.f = manhattan(start, goal);
        node.open = true;
        st.frontier.push(start, node.f);
    }

    let mut nbuf = Vec::with_capacity(4);

    let outcome = loop {
        let Some(current) = st.frontier.pop() else {
            break Outcome::NotFound;
        };
        let ci = grid.index_of(current);
        st.nodes[ci].open = false;

        if current == goal {
            let path = Path {
                cells: reconstruct(&st.came_from, goal),
                cost: st.nodes[ci].g,
            };
            break match trace(grid, &path.cells, observer) {
                Flow::Continue => Outcome::Found(path),
                Flow::Abort => Outcome::Aborted,
            };
        }

        let tentative_g = st.nodes[ci].g + 1;

        nbuf.clear();
        grid.neighbors_into(current, &mut nbuf);

        for &np in nbuf.iter() {
            let ni = grid.index_of(np);
            let n = &mut st.nodes[ni];
            if tentative_g >= n.g {
                continue;
            }
            n.g = tentative_g;
            n.f = tentative_g + manhattan(np, goal);
            st.came_from.insert(np, current);
            if !n.open {
                n.open = true;
                st.frontier.push(np, n.f);
                grid.set_role(np, Role::Open);
            }
        }

        st.expanded += 1;
        log::trace!(
            "astar: expanded {current} g={} frontier={}",
            st.nodes[ci].g,
            st.frontier.len()
        );

        if observer.on_step(grid, Step::Expanded(current)).is_abort() {
            break Outcome::Aborted;
        }

        if current != start {
            grid.set_role(current, Role::Closed);
        }
    };

    match &outcome {
        Outcome::Found(path) => {
            grid.set_role(goal, Role::Goal);
            log::debug!(
                "astar: found path of {} steps after {} expansions",
                path.len(),
                st.expanded
            );
        }
        Outcome::NotFound => {
            grid.set_role(goal, goal_role);
            log::debug!("astar: no path after {} expansions", st.expanded);
        }
        Outcome::Aborted => {
            grid.set_role(goal, goal_role);
            log::debug!("astar: aborted after {} expansions", st.expanded);
        }
    }

    Ok(outcome)
}
