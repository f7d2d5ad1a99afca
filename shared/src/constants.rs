pub const STORAGE_KEY: &str = "twister-wheel-colors";

pub const DEFAULT_NEW_COLOR: &str = "#a855f7";
pub const DEFAULT_COLOR_NAME: &str = "Custom";

// Spin
pub const MIN_FULL_SPINS: f64 = 5.0;
pub const FULL_TURN_DEGREES: f64 = 360.0;

pub const DEFAULT_SPIN_DURATION_SECS: f64 = 4.0;
pub const MAX_SPIN_DURATION_SECS: f64 = 6.0;
pub const SPIN_DURATION_STEP_SECS: f64 = 0.5;

// Music
pub const MUSIC_VOLUME: f64 = 0.7;
pub const FADE_STEP: f64 = 0.05;
pub const FADE_INTERVAL_MS: u32 = 50;

// Wheel drawing, in SVG user units
pub const WHEEL_VIEWBOX: f64 = 300.0;
pub const WHEEL_CENTER: f64 = 150.0;
pub const WHEEL_RADIUS: f64 = 150.0;
pub const HUB_RADIUS: f64 = 15.0;
pub const ICON_RADIUS_RATIO: f64 = 0.75;
pub const ICON_SIZE: f64 = 24.0;
pub const SIDE_LABEL_OFFSET: f64 = 20.0;
pub const POINTER_COLOR: &str = "#ef4444";
pub const WEDGE_TEXT_COLOR: &str = "white";

// cubic-bezier(0.15, 0.85, 0.35, 1): fast spin-up, long coast to a stop
pub const SPIN_EASING: (f64, f64, f64, f64) = (0.15, 0.85, 0.35, 1.0);
