//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the bar chart, one bar per element with highlighted indices marked
//! - [`controls`]: algorithm selector, size and delay readouts
//! - [`status`]: status bar with step counters, keybindings and run state
//!
//! Each pane module exports a primary `render_*` function that borrows what it
//! draws from the session and keeps no state of its own.

pub mod bars;
pub mod controls;
pub mod status;

pub use bars::{render_bars_pane, Bars};
pub use controls::{render_controls_pane, ControlsView};
pub use status::{render_status_bar, StatusView};
