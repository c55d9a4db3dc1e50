//! Shared model for the `dotlink` command-line demo.
//!
//! Builds a grid either from a text layout or as a random wall field, runs
//! the A* search on it, optionally printing the grid after every observer
//! step, and summarises the outcome.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use dotlink_core::{DEFAULT_ROWS, DEFAULT_WIDTH, Grid, Layout, LayoutError, Pos, Role};
use dotlink_paths::{Flow, Outcome, SearchError, StepLimit, StepObserver, observer, search};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

/// Exit code when no path exists.
pub const EXIT_NOT_FOUND: i32 = 2;
/// Exit code when the run was aborted.
pub const EXIT_ABORTED: i32 = 3;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Find a shortest 4-directional path across a grid with A*.
#[derive(Parser, Debug, Clone)]
#[command(name = "dotlink", version, about)]
pub struct Args {
    /// Text layout to load ('.' empty, '#' wall, 'S' start, 'G' goal).
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// Grid dimension for a random wall field.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Pixel width of the grid (only affects the reported cell size).
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Probability of each cell being a wall in a random field.
    #[arg(long, default_value_t = 0.3)]
    pub density: f64,

    /// Seed for the random wall field.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Start cell as ROW,COL.
    #[arg(long, value_parser = parse_pos)]
    pub start: Option<Pos>,

    /// Goal cell as ROW,COL.
    #[arg(long, value_parser = parse_pos)]
    pub goal: Option<Pos>,

    /// Abort the search after this many expansions.
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Print the grid after every search step.
    #[arg(long)]
    pub trace: bool,
}

/// Parse `ROW,COL`.
pub fn parse_pos(s: &str) -> Result<Pos, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = r.trim().parse::<usize>().map_err(|e| format!("bad row {r:?}: {e}"))?;
    let col = c.trim().parse::<usize>().map_err(|e| format!("bad column {c:?}: {e}"))?;
    Ok(Pos::new(row, col))
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that stops the demo before or during the search.
#[derive(Debug)]
pub enum DemoError {
    Io { path: PathBuf, source: std::io::Error },
    Layout(LayoutError),
    MissingEndpoint(Role),
    InvalidDensity(f64),
    Search(SearchError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "reading {}: {source}", path.display()),
            Self::Layout(e) => write!(f, "{e}"),
            Self::MissingEndpoint(role) => {
                write!(f, "no {role:?} cell in the map and none given on the command line")
            }
            Self::InvalidDensity(d) => write!(f, "density must be within 0..=1, got {d}"),
            Self::Search(e) => write!(f, "search: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Layout(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayoutError> for DemoError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl From<SearchError> for DemoError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// A grid with its designated endpoints.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: Grid,
    pub start: Pos,
    pub goal: Pos,
}

/// Fill a `rows × rows` grid with walls, each cell independently with
/// probability `density`.
pub fn random_grid(rows: usize, width: u32, density: f64, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::build(rows, width);
    for row in 0..rows {
        for col in 0..rows {
            if rng.random_bool(density) {
                grid.set_role(Pos::new(row, col), Role::Blocked);
            }
        }
    }
    grid
}

/// Move the single `role` designation to `pos`.
fn designate(grid: &mut Grid, role: Role, pos: Pos) {
    if let Some(old) = grid.find(role) {
        grid.set_role(old, Role::Empty);
    }
    grid.set_role(pos, role);
}

/// Resolve an endpoint: the command-line value wins, then the grid's own
/// designation.
fn endpoint(grid: &mut Grid, role: Role, arg: Option<Pos>) -> Result<Pos, DemoError> {
    match arg {
        Some(pos) => {
            if !grid.contains(pos) {
                return Err(SearchError::OutOfBounds {
                    pos,
                    rows: grid.rows(),
                }
                .into());
            }
            designate(grid, role, pos);
            Ok(pos)
        }
        None => grid.find(role).ok_or(DemoError::MissingEndpoint(role)),
    }
}

/// Build the scenario described by a text layout plus endpoint overrides.
pub fn scenario_from_layout(text: &str, args: &Args) -> Result<Scenario, DemoError> {
    let mut grid = Layout::parse(text)?.to_grid(args.width);
    let start = endpoint(&mut grid, Role::Start, args.start)?;
    let goal = endpoint(&mut grid, Role::Goal, args.goal)?;
    Ok(Scenario { grid, start, goal })
}

/// Build a random wall field. Endpoints default to opposite corners and are
/// always left passable.
pub fn random_scenario(args: &Args) -> Result<Scenario, DemoError> {
    if !(0.0..=1.0).contains(&args.density) {
        return Err(DemoError::InvalidDensity(args.density));
    }
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut grid = random_grid(args.rows, args.width, args.density, &mut rng);
    let last = args.rows.saturating_sub(1);
    let start = args.start.unwrap_or(Pos::ZERO);
    let goal = args.goal.unwrap_or(Pos::new(last, last));
    for (role, pos) in [(Role::Start, start), (Role::Goal, goal)] {
        if !grid.contains(pos) {
            return Err(SearchError::OutOfBounds {
                pos,
                rows: grid.rows(),
            }
            .into());
        }
        grid.set_role(pos, role);
    }
    Ok(Scenario { grid, start, goal })
}

/// Build the scenario requested on the command line.
pub fn load_scenario(args: &Args) -> Result<Scenario, DemoError> {
    match &args.map {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
                path: path.clone(),
                source,
            })?;
            log::info!("loaded map {}", path.display());
            scenario_from_layout(&text, args)
        }
        None => {
            log::info!(
                "random {n}x{n} field, density {}, seed {}",
                args.density,
                args.seed,
                n = args.rows
            );
            random_scenario(args)
        }
    }
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

/// Result of one demo run.
#[derive(Debug, Clone)]
pub struct Report {
    pub grid: Grid,
    pub start: Pos,
    pub goal: Pos,
    pub outcome: Outcome,
}

impl Report {
    /// One-line description of the outcome.
    pub fn summary(&self) -> String {
        match &self.outcome {
            Outcome::Found(path) => format!(
                "found: {} steps from {} to {}",
                path.len(),
                self.start,
                self.goal
            ),
            Outcome::NotFound => format!("no path from {} to {}", self.start, self.goal),
            Outcome::Aborted => format!("aborted: {} to {}", self.start, self.goal),
        }
    }

    /// Process exit code for the outcome.
    pub fn exit_code(&self) -> i32 {
        match self.outcome {
            Outcome::Found(_) => 0,
            Outcome::NotFound => EXIT_NOT_FOUND,
            Outcome::Aborted => EXIT_ABORTED,
        }
    }
}

/// Search a prepared scenario.
pub fn run_scenario(scenario: Scenario, args: &Args) -> Result<Report, DemoError> {
    let Scenario {
        mut grid,
        start,
        goal,
    } = scenario;

    let trace = args.trace;
    let printer = observer::from_fn(move |g, step| {
        if trace {
            println!("{step:?}\n{g}\n");
        }
        Flow::Continue
    });
    let mut obs: Box<dyn StepObserver> = match args.max_steps {
        Some(n) => Box::new(StepLimit::new(printer, n)),
        None => Box::new(printer),
    };

    let outcome = search(&mut grid, start, goal, obs.as_mut())?;
    Ok(Report {
        grid,
        start,
        goal,
        outcome,
    })
}

/// Load and search the scenario requested on the command line.
pub fn run(args: &Args) -> Result<Report, DemoError> {
    let scenario = load_scenario(args)?;
    run_scenario(scenario, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["dotlink"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn parse_pos_accepts_row_col() {
        assert_eq!(parse_pos("3,4"), Ok(Pos::new(3, 4)));
        assert_eq!(parse_pos(" 0 , 12 "), Ok(Pos::new(0, 12)));
        assert!(parse_pos("3").is_err());
        assert!(parse_pos("a,1").is_err());
        assert!(parse_pos("1,-1").is_err());
    }

    #[test]
    fn defaults() {
        let a = args(&[]);
        assert_eq!(a.rows, 50);
        assert_eq!(a.width, 800);
        assert_eq!(a.seed, 42);
        assert!(a.map.is_none());
        assert!(!a.trace);
    }

    #[test]
    fn random_grid_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_grid(6, 60, 0.0, &mut rng).count(Role::Blocked), 0);
        assert_eq!(random_grid(6, 60, 1.0, &mut rng).count(Role::Blocked), 36);
    }

    #[test]
    fn open_random_field_finds_manhattan_path() {
        let report = run(&args(&["--rows", "8", "--density", "0"])).unwrap();
        assert_eq!(report.outcome.path().map(|p| p.len()), Some(14));
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.summary(), "found: 14 steps from (0, 0) to (7, 7)");
    }

    #[test]
    fn full_wall_field_is_not_found() {
        let report = run(&args(&["--rows", "5", "--density", "1"])).unwrap();
        assert_eq!(report.outcome, Outcome::NotFound);
        assert_eq!(report.exit_code(), EXIT_NOT_FOUND);
        assert_eq!(report.grid.role(Pos::ZERO), Role::Start);
        assert_eq!(report.grid.role(Pos::new(4, 4)), Role::Goal);
    }

    #[test]
    fn max_steps_aborts() {
        let report = run(&args(&["--rows", "10", "--density", "0", "--max-steps", "3"])).unwrap();
        assert_eq!(report.outcome, Outcome::Aborted);
        assert_eq!(report.exit_code(), EXIT_ABORTED);
    }

    #[test]
    fn same_seed_same_report() {
        let a = run(&args(&["--rows", "12", "--seed", "9"])).unwrap();
        let b = run(&args(&["--rows", "12", "--seed", "9"])).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.outcome, b.outcome);
    }

    #[test]
    fn layout_endpoints_and_overrides() {
        let text = "S..\n.#.\n..G";
        let s = scenario_from_layout(text, &args(&[])).unwrap();
        assert_eq!((s.start, s.goal), (Pos::ZERO, Pos::new(2, 2)));

        let s = scenario_from_layout(text, &args(&["--start", "0,2"])).unwrap();
        assert_eq!(s.start, Pos::new(0, 2));
        assert_eq!(s.grid.count(Role::Start), 1);
        assert_eq!(s.grid.role(Pos::ZERO), Role::Empty);

        let report = run_scenario(s, &args(&[])).unwrap();
        assert_eq!(report.outcome.path().map(|p| p.len()), Some(2));
    }

    #[test]
    fn shipped_maps() {
        let walls = scenario_from_layout(include_str!("../maps/walls.txt"), &args(&[])).unwrap();
        let report = run_scenario(walls, &args(&[])).unwrap();
        assert_eq!(report.outcome.path().map(|p| p.len()), Some(39));

        let sealed = scenario_from_layout(include_str!("../maps/sealed.txt"), &args(&[])).unwrap();
        let report = run_scenario(sealed, &args(&[])).unwrap();
        assert_eq!(report.outcome, Outcome::NotFound);
    }

    #[test]
    fn layout_without_goal() {
        let err = scenario_from_layout("S.\n..", &args(&[])).unwrap_err();
        assert!(matches!(err, DemoError::MissingEndpoint(Role::Goal)));
    }

    #[test]
    fn blocked_endpoint_is_an_error() {
        let s = Scenario {
            grid: "S#\n.G".parse().unwrap(),
            start: Pos::ZERO,
            goal: Pos::new(0, 1),
        };
        let err = run_scenario(s, &args(&[])).unwrap_err();
        assert!(matches!(
            err,
            DemoError::Search(SearchError::BlockedEndpoint(p)) if p == Pos::new(0, 1)
        ));
    }

    #[test]
    fn invalid_density() {
        let err = run(&args(&["--density", "1.5"])).unwrap_err();
        assert!(matches!(err, DemoError::InvalidDensity(_)));
    }

    #[test]
    fn missing_map_file() {
        let err = run(&args(&["--map", "/nonexistent/dotlink.map"])).unwrap_err();
        assert!(matches!(err, DemoError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/dotlink.map"));
    }
}
