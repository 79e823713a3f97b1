//! Visualizer session state
//!
//! This module provides:
//! - [`Session`]: the explicit session object holding the sequence, the selected
//!   parameters, the run state machine and the active algorithm engine
//! - [`RunState`]: `Idle`, `Running`, `Paused`, `Terminal`
//! - [`SortStats`]: counters accumulated while a run proceeds
//! - [`history`]: recorded frames for stepping backward and forward
//!
//! # Frame Pacing
//!
//! The frame loop calls [`Session::tick`] once per frame. While running, a tick
//! performs at most one algorithm step, and only once the configured delay has
//! elapsed since the previous step. Every step is therefore rendered; a short
//! delay never causes mutations to be skipped.
//!
//! # Parameter Changes During a Run
//!
//! Algorithm changes take effect on the next start. Delay changes take effect on
//! the next step. A size change while a run is active is held back and applied
//! (regenerating the sequence) once the session returns to `Idle`.

pub mod history;

use crate::algorithms::{Algorithm, Engine, Operation, SortStep, Step};
use crate::array::{clamp_size, is_permutation_of, is_sorted, ArrayState, Highlight};
use crate::config::Settings;
use crate::constants::{DELAY_MAX, DELAY_MIN};
use history::{History, Snapshot};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Frame loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No algorithm running, waiting for input
    Idle,
    /// Stepping the selected algorithm
    Running,
    /// A run is active but stepping is suspended
    Paused,
    /// Quit requested
    Terminal,
}

/// Counters for the current run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub steps: usize,
    pub comparisons: usize,
    pub swaps: usize,
    pub writes: usize,
}

impl SortStats {
    pub fn record(&mut self, step: &Step) {
        self.steps += 1;
        self.comparisons += step.compares;
        match step.op {
            Operation::Compare(..) => {}
            Operation::Swap(..) => self.swaps += 1,
            Operation::Shift { .. } | Operation::Write { .. } => self.writes += 1,
        }
    }
}

/// Clamp a delay in seconds into the accepted range
pub fn clamp_delay(delay: f64) -> f64 {
    if delay.is_nan() {
        return DELAY_MIN;
    }
    delay.clamp(DELAY_MIN, DELAY_MAX)
}

/// The visualizer session
pub struct Session {
    rng: StdRng,

    /// Sequence at the head of the run (what the engine mutates)
    live: ArrayState,

    /// Array size parameter
    size: usize,

    /// Whether `size` changed during a run and still needs applying
    resize_pending: bool,

    /// Per-step delay in seconds
    delay: f64,

    /// Algorithm used by the next start
    algorithm: Algorithm,

    state: RunState,

    /// Active engine; `Some` exactly while a run is active
    engine: Option<Engine>,

    /// Counters at the head of the run
    stats: SortStats,

    /// Recorded frames of the current run
    history: History,

    /// Position of the displayed frame in `history`
    cursor: usize,

    /// When the last step was taken
    last_step: Option<Instant>,

    /// Whether the displayed sequence is the completed result of a run
    completed: bool,
}

impl Session {
    /// Create a session from resolved settings
    pub fn new(settings: &Settings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let size = clamp_size(settings.size);
        let live = ArrayState::random(size, &mut rng);

        Session {
            rng,
            live,
            size,
            resize_pending: false,
            delay: clamp_delay(settings.delay),
            algorithm: settings.algorithm,
            state: RunState::Idle,
            engine: None,
            stats: SortStats::default(),
            history: History::new(settings.history_limit),
            cursor: 0,
            last_step: None,
            completed: false,
        }
    }

    /// Create a session over an explicit sequence
    pub fn with_values(settings: &Settings, values: Vec<u32>) -> Self {
        let mut session = Session::new(settings);
        session.size = values.len();
        session.live = ArrayState::from_values(values);
        session
    }

    // ========== Control surface callbacks ==========

    /// Start sorting with the selected algorithm.
    ///
    /// Returns `false` (and changes nothing) if a run is already active.
    pub fn on_start(&mut self) -> bool {
        if self.is_running() || self.state == RunState::Terminal {
            log::debug!("start ignored, session is {:?}", self.state);
            return false;
        }

        self.live.highlights = Highlight::none();
        self.stats = SortStats::default();
        self.history.clear();
        self.history.push(Snapshot::new(self.live.clone(), self.stats));
        self.cursor = 0;
        self.engine = Some(self.algorithm.engine(self.live.len()));
        self.state = RunState::Running;
        self.last_step = None;
        self.completed = false;

        log::info!(
            "starting {} on {} elements (delay {:.2}s)",
            self.algorithm,
            self.live.len(),
            self.delay
        );
        true
    }

    /// Abort any active run and draw a fresh sequence of the current size
    pub fn on_reset(&mut self) {
        if self.is_running() {
            log::info!("run aborted by reset after {} steps", self.stats.steps);
        }
        self.engine = None;
        if self.state != RunState::Terminal {
            self.state = RunState::Idle;
        }
        self.regenerate();
    }

    /// Change the array size (clamped).
    ///
    /// Applied immediately when idle, otherwise when the run ends.
    pub fn on_size_changed(&mut self, size: usize) {
        let size = clamp_size(size);
        if size == self.size && !self.resize_pending {
            return;
        }
        self.size = size;

        if self.is_running() {
            self.resize_pending = true;
            log::debug!("size {} deferred until the run ends", size);
        } else {
            self.regenerate();
        }
    }

    /// Change the per-step delay in seconds (clamped)
    pub fn on_delay_changed(&mut self, delay: f64) {
        self.delay = clamp_delay(delay);
    }

    /// Select the algorithm for the next start
    pub fn on_algorithm_changed(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Suspend or resume the active run. Returns the new state.
    pub fn toggle_pause(&mut self) -> RunState {
        match self.state {
            RunState::Running => self.state = RunState::Paused,
            RunState::Paused => {
                self.state = RunState::Running;
                self.last_step = None;
            }
            _ => {}
        }
        self.state
    }

    /// Request termination
    pub fn quit(&mut self) {
        self.state = RunState::Terminal;
        self.engine = None;
    }

    // ========== Stepping ==========

    /// Advance one frame's worth of work.
    ///
    /// Returns `true` if a step was taken.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) < self.delay() {
                return false;
            }
        }
        self.last_step = Some(now);
        self.advance()
    }

    /// Step forward one frame while paused: replay from history, or run the
    /// engine when already at the newest frame.
    pub fn step_forward(&mut self) -> bool {
        if self.state != RunState::Paused {
            return false;
        }
        self.advance()
    }

    /// Step back one recorded frame while paused
    pub fn step_backward(&mut self) -> bool {
        if self.state != RunState::Paused || self.cursor <= self.history.first_position() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Take one step: move the cursor forward through recorded frames, or
    /// drive the engine once the cursor is at the head.
    fn advance(&mut self) -> bool {
        if let Some(head) = self.history.head() {
            if self.cursor < head {
                self.cursor += 1;
                return true;
            }
        }

        let Some(engine) = self.engine.as_mut() else {
            return false;
        };

        match engine.step(&mut self.live.values) {
            Some(step) => {
                debug_assert!(step.highlights.in_bounds(self.live.len()));
                self.stats.record(&step);
                self.live.highlights = step.highlights;
                self.history.push(Snapshot::new(self.live.clone(), self.stats));
                self.cursor = self.history.head().unwrap_or(0);
                true
            }
            None => {
                self.finish();
                false
            }
        }
    }

    /// Transition back to `Idle` after the engine reports completion
    fn finish(&mut self) {
        let sorted = is_sorted(&self.live.values);
        let intact = self
            .history
            .get(0)
            .map(|first| is_permutation_of(&first.state.values, &self.live.values));

        log::info!(
            "{} finished: {} steps, {} comparisons, {} swaps, {} writes (sorted: {}, permutation: {:?})",
            self.algorithm_running().unwrap_or(self.algorithm),
            self.stats.steps,
            self.stats.comparisons,
            self.stats.swaps,
            self.stats.writes,
            sorted,
            intact
        );

        self.engine = None;
        self.state = RunState::Idle;
        self.live.highlights = Highlight::none();
        self.completed = sorted;

        if self.resize_pending {
            self.regenerate();
        }
    }

    fn regenerate(&mut self) {
        self.live.reset(self.size, &mut self.rng);
        self.resize_pending = false;
        self.stats = SortStats::default();
        self.history.clear();
        self.cursor = 0;
        self.completed = false;
        log::debug!("generated {} new values", self.live.len());
    }

    // ========== Accessors for the UI ==========

    /// The frame to display: the recorded frame at the cursor, or the live state
    pub fn frame(&self) -> &ArrayState {
        match self.history.get(self.cursor) {
            Some(snapshot) if self.is_running() => &snapshot.state,
            _ => &self.live,
        }
    }

    /// Counters belonging to the displayed frame
    pub fn frame_stats(&self) -> SortStats {
        match self.history.get(self.cursor) {
            Some(snapshot) if self.is_running() => snapshot.stats,
            _ => self.stats,
        }
    }

    /// The Run Flag: true while a run is active (running or paused)
    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running | RunState::Paused)
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state == RunState::Terminal
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Algorithm of the active run, if any
    pub fn algorithm_running(&self) -> Option<Algorithm> {
        self.engine.as_ref().map(Engine::algorithm)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn resize_pending(&self) -> bool {
        self.resize_pending
    }

    pub fn delay_secs(&self) -> f64 {
        self.delay
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs_f64(self.delay)
    }

    /// Position of the displayed frame within the run
    pub fn history_position(&self) -> usize {
        self.cursor
    }

    /// Number of frames recorded for the current run
    pub fn total_snapshots(&self) -> usize {
        self.history.total()
    }

    /// Whether the displayed sequence is a finished, sorted result
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
