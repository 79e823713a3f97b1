//! # Introduction
//!
//! sortty animates classic sorting algorithms in the terminal. Each algorithm
//! runs one primitive operation (compare, swap, write) per step, and every step
//! is rendered as a bar chart with the touched indices highlighted. The run can
//! be paused and stepped backward and forward through the recorded frames.
//!
//! ## Pipeline
//!
//! ```text
//! Config → Session → Engine step → Snapshot history → TUI frame
//! ```
//!
//! 1. [`config`]: embedded defaults, user config file and CLI overrides,
//!    resolved into clamped [`config::Settings`].
//! 2. [`array`]: the sequence, its highlight set, random generation and
//!    sortedness checks.
//! 3. [`algorithms`]: bubble, selection, insertion, quick and merge sort as
//!    resumable step machines behind [`algorithms::SortStep`].
//! 4. [`session`]: the session object: run state machine, parameter changes,
//!    frame pacing and the [`session::history`] ring.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod array;
pub mod config;
pub mod constants;
pub mod error;
pub mod session;
pub mod ui;
