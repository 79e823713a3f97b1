// Constants for the sorting visualizer

/// Smallest array the size control accepts
pub const SIZE_MIN: usize = 10;

/// Largest array the size control accepts
pub const SIZE_MAX: usize = 100;

/// Array size used when neither the config file nor the CLI sets one
pub const DEFAULT_SIZE: usize = 50;

/// Increment applied by the `+` / `-` size keys
pub const SIZE_STEP: usize = 5;

/// Smallest value a generated element can take (inclusive)
pub const VALUE_MIN: u32 = 10;

/// Largest value a generated element can take (inclusive)
/// Bar heights are scaled against this value
pub const VALUE_MAX: u32 = 500;

/// Shortest per-step delay in seconds
pub const DELAY_MIN: f64 = 0.01;

/// Longest per-step delay in seconds
pub const DELAY_MAX: f64 = 1.0;

/// Per-step delay used when neither the config file nor the CLI sets one
pub const DEFAULT_DELAY: f64 = 0.1;

/// Multiplier applied by the `[` / `]` speed keys
pub const DELAY_FACTOR: f64 = 1.5;

/// Frame rate cap for the render loop
pub const TARGET_FPS: u32 = 60;

/// Default memory budget for the step history (16 MB)
pub const DEFAULT_HISTORY_LIMIT: usize = 16 * 1024 * 1024;
