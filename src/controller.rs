//! Lifecycle state machine driving the simulation.
//!
//! The controller owns the current generation, the drawing surface and the
//! tick timer. All transitions are total: calls that make no sense in the
//! current mode are ignored.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::engine::{self, Changes, Coord};
use crate::grid::Grid;
use crate::render::Renderer;
use crate::timer::Ticker;

/// Reference tick interval.
pub const TICK: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Running,
    Recording,
}

/// Counters for the simulation since the last `start`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Generations advanced
    pub generation: u64,
    /// Cells born across all generations
    pub cells_born: u64,
    /// Cells that died across all generations
    pub cells_died: u64,
    /// Live cells in the current generation
    pub population: u64,
}

impl Stats {
    fn seeded(grid: &Grid) -> Self {
        Stats {
            population: grid.population(),
            ..Stats::default()
        }
    }

    fn record(&mut self, changes: Changes, next: &Grid) {
        self.generation += 1;
        self.cells_born += changes.born;
        self.cells_died += changes.died;
        self.population = next.population();
    }

    pub fn birth_rate(&self) -> f64 {
        self.cells_born as f64 / self.generation.max(1) as f64
    }

    pub fn death_rate(&self) -> f64 {
        self.cells_died as f64 / self.generation.max(1) as f64
    }
}

pub struct LifecycleController<R: Renderer> {
    renderer: R,
    width: usize,
    height: usize,
    pitch: usize,
    mode: Mode,
    grid: Option<Grid>,
    recorded: Vec<Coord>,
    ticker: Ticker,
    stats: Stats,
}

impl<R: Renderer> LifecycleController<R> {
    /// Creates an idle controller for a `width × height` grid drawn onto
    /// `renderer` with cells `pitch` units wide.
    pub fn new(renderer: R, width: usize, height: usize, pitch: usize, tick: Duration) -> Self {
        LifecycleController {
            renderer,
            width,
            height,
            pitch,
            mode: Mode::Idle,
            grid: None,
            recorded: Vec::new(),
            ticker: Ticker::new(tick),
            stats: Stats::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn recorded(&self) -> &[Coord] {
        &self.recorded
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_timer_armed(&self) -> bool {
        self.ticker.is_armed()
    }

    /// How long the event loop may wait before the next tick is due.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_due(now)
    }

    /// Runs a tick if the timer is due at `now`. Returns whether one ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.ticker.fire_if_due(now) {
            self.tick();
            true
        } else {
            false
        }
    }

    /// Starts a fresh simulation from `seed`, from any mode.
    pub fn start(&mut self, seed: &[Coord]) {
        self.ticker.disarm();
        self.recorded.clear();

        let grid = engine::make_grid(self.width, self.height, seed);
        self.stats = Stats::seeded(&grid);
        self.grid = Some(grid);
        self.mode = Mode::Running;

        self.redraw();
        self.ticker.arm(Instant::now());
        info!(
            seed = seed.len(),
            population = self.stats.population,
            "simulation started"
        );
    }

    /// Advances one generation and redraws. Ignored unless running.
    pub fn tick(&mut self) {
        if self.mode != Mode::Running {
            trace!(mode = ?self.mode, "ignoring tick");
            return;
        }
        self.advance_and_redraw();
    }

    /// Advances a paused simulation by a single generation.
    pub fn step(&mut self) {
        if self.mode != Mode::Idle || self.grid.is_none() {
            debug!(mode = ?self.mode, "ignoring step");
            return;
        }
        self.advance_and_redraw();
    }

    /// Pauses a running simulation, keeping the current generation.
    pub fn stop(&mut self) {
        if self.mode != Mode::Running {
            return;
        }
        self.ticker.disarm();
        self.mode = Mode::Idle;
        debug!(generation = self.stats.generation, "simulation stopped");
    }

    /// Resumes a stopped simulation. Ignored when not idle or when there is
    /// no generation to resume from.
    pub fn resume(&mut self) {
        if self.mode != Mode::Idle || self.grid.is_none() {
            debug!(mode = ?self.mode, has_grid = self.grid.is_some(), "ignoring resume");
            return;
        }
        self.ticker.arm(Instant::now());
        self.mode = Mode::Running;
        debug!(generation = self.stats.generation, "simulation resumed");
    }

    /// Wipes the surface and drops the current generation.
    pub fn clear(&mut self) {
        self.ticker.disarm();
        self.renderer.clear();
        self.grid = None;
        self.recorded.clear();
        self.stats = Stats::default();
        self.mode = Mode::Idle;
        debug!("simulation cleared");
    }

    /// Enters pattern recording on an empty surface with guide lines.
    pub fn start_recording(&mut self) {
        self.stop();
        self.clear();
        self.renderer.draw_grid_lines(self.width, self.height, self.pitch);
        self.recorded.clear();
        self.mode = Mode::Recording;
        debug!("recording started");
    }

    /// Adds `(x, y)` to the pattern being recorded and marks it on the surface.
    /// Coordinates outside the grid are dropped.
    pub fn record_click(&mut self, x: usize, y: usize) {
        if self.mode != Mode::Recording {
            return;
        }
        if x >= self.width || y >= self.height {
            debug!(x, y, "dropping click outside the grid");
            return;
        }
        self.recorded.push((x as i64, y as i64));
        self.renderer.draw_live_cell(x, y);
    }

    /// Starts the simulation from the recorded pattern.
    pub fn end_recording(&mut self) {
        if self.mode != Mode::Recording {
            return;
        }
        let seed = std::mem::take(&mut self.recorded);
        info!(cells = seed.len(), "recording finished");
        self.start(&seed);
    }

    fn advance_and_redraw(&mut self) {
        let Some(current) = self.grid.as_ref() else {
            return;
        };
        let next = engine::advance(current);
        self.stats.record(Changes::between(current, &next), &next);
        self.grid = Some(next);
        self.redraw();
        trace!(
            generation = self.stats.generation,
            population = self.stats.population,
            "advanced"
        );
    }

    fn redraw(&mut self) {
        self.renderer.clear();
        if let Some(grid) = &self.grid {
            for cell in grid.live_cells() {
                self.renderer.draw_live_cell(cell.x, cell.y);
            }
        }
    }
}
