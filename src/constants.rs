// DOM wiring and frame-loop tuning for the web front-end.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "globe-canvas";
pub const HINT_ID: &str = "controls-hint";

// Controls hint
pub const HINT_FADED_CLASS: &str = "faded";
pub const HINT_VISIBLE_MS: i32 = 5000; // shown on mount, then faded

// Frame statistics are logged at most this often
pub const FRAME_LOG_INTERVAL_SEC: f32 = 5.0;
