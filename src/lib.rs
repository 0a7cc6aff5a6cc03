//! # Life Recorder
//!
//! Conway's Game of Life on a bounded grid, drawn in the terminal with
//! `ratatui`, with pause/resume and interactive recording of a starting pattern.
//!
//! ## Layout
//!
//! * [`engine`]: the transition rule, as pure functions over [`Grid`]
//! * [`controller`]: the Idle/Running/Recording state machine and its tick timer
//! * [`render`]: the drawing contract and an in-memory surface
//! * [`input`]: terminal events to lifecycle commands
//! * [`ui`]: terminal panels
//!
//! The grid is edge-clamped, not toroidal: positions past the border count as dead.

pub mod cell;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod grid;
pub mod input;
pub mod patterns;
pub mod render;
pub mod timer;
pub mod ui;

pub use cell::{Cell, Life};
pub use controller::{LifecycleController, Mode, Stats, TICK};
pub use engine::{advance, count_live_neighbors, make_grid, Coord};
pub use error::AppError;
pub use grid::Grid;
pub use render::{Renderer, Surface};
