//! The step-observer seam between the search and whatever renders it.
//!
//! The engine calls [`StepObserver::on_step`] synchronously after every
//! expansion and after every cell it marks as Path. The observer gets a
//! read-only view of the grid and answers with a [`Flow`]; answering
//! [`Flow::Abort`] ends the run with [`Outcome::Aborted`](crate::Outcome::Aborted).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dotlink_core::{Grid, Pos};

/// Observer verdict after a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Abort,
}

impl Flow {
    #[inline]
    pub fn is_abort(self) -> bool {
        self == Self::Abort
    }
}

/// What just happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A cell was popped from the frontier and its neighbours processed.
    Expanded(Pos),
    /// A cell on the found path was marked Path.
    Traced(Pos),
}

/// Receives one call per search step.
pub trait StepObserver {
    fn on_step(&mut self, grid: &Grid, step: Step) -> Flow;
}

impl<O: StepObserver + ?Sized> StepObserver for &mut O {
    #[inline]
    fn on_step(&mut self, grid: &Grid, step: Step) -> Flow {
        (**self).on_step(grid, step)
    }
}

/// Observer that never interrupts and ignores every step.
#[derive(Copy, Clone, Debug, Default)]
pub struct Quiet;

impl StepObserver for Quiet {
    #[inline]
    fn on_step(&mut self, _grid: &Grid, _step: Step) -> Flow {
        Flow::Continue
    }
}

/// Observer built from a closure. See [`from_fn`].
#[derive(Clone, Debug)]
pub struct FromFn<F>(F);

/// Wrap a closure as a [`StepObserver`].
///
/// ```
/// use dotlink_paths::{Flow, observer};
///
/// let mut steps = 0;
/// let _obs = observer::from_fn(|_grid, _step| {
///     steps += 1;
///     Flow::Continue
/// });
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(&Grid, Step) -> Flow,
{
    FromFn(f)
}

impl<F> StepObserver for FromFn<F>
where
    F: FnMut(&Grid, Step) -> Flow,
{
    #[inline]
    fn on_step(&mut self, grid: &Grid, step: Step) -> Flow {
        (self.0)(grid, step)
    }
}

// ---------------------------------------------------------------------------
// AbortToken (cancellation)
// ---------------------------------------------------------------------------

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// Clones share the same flag, so one clone can be handed to the search as
/// its observer while another is cancelled from elsewhere (a signal
/// handler, another thread, a UI quit request).
#[derive(Clone, Debug, Default)]
pub struct AbortToken {
    done: Arc<AtomicBool>,
}

impl AbortToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl StepObserver for AbortToken {
    #[inline]
    fn on_step(&mut self, _grid: &Grid, _step: Step) -> Flow {
        if self.is_cancelled() {
            Flow::Abort
        } else {
            Flow::Continue
        }
    }
}

// ---------------------------------------------------------------------------
// StepLimit
// ---------------------------------------------------------------------------

/// Wraps another observer and aborts once `limit` expansions have been
/// observed. Path-marking steps are forwarded but not counted.
#[derive(Clone, Debug)]
pub struct StepLimit<O> {
    inner: O,
    limit: usize,
    seen: usize,
}

impl<O: StepObserver> StepLimit<O> {
    pub fn new(inner: O, limit: usize) -> Self {
        Self {
            inner,
            limit,
            seen: 0,
        }
    }

    /// Expansions observed so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: StepObserver> StepObserver for StepLimit<O> {
    fn on_step(&mut self, grid: &Grid, step: Step) -> Flow {
        if self.inner.on_step(grid, step).is_abort() {
            return Flow::Abort;
        }
        if let Step::Expanded(_) = step {
            self.seen += 1;
            if self.seen >= self.limit {
                log::debug!("step limit of {} expansions reached", self.limit);
                return Flow::Abort;
            }
        }
        Flow::Continue
    }
}
