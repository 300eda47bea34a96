/// Web front-end constants: DOM hooks and frame statistics.
///
/// Field tuning (counts, ranges, thresholds) lives in `core::constants`.
// Canvas the start hook mounts on, if the page has one
pub const DEFAULT_CANVAS_ID: &str = "particle-canvas";

// Prefix for per-canvas overrides, e.g. `data-particles-count="120"`
pub const CONFIG_ATTR_PREFIX: &str = "data-particles-";

// Viewport signal the background follows
pub const RESIZE_EVENT: &str = "resize";

// Frame statistics are logged at debug level this often
pub const STATS_LOG_INTERVAL_SEC: f32 = 5.0;

#[inline]
pub fn config_attr(key: &str) -> String {
    format!("{}{}", CONFIG_ATTR_PREFIX, key)
}
