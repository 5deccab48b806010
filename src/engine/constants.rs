// ─────────────────────────────────────────────────────────────────────────────
// Environmental baselines (average footprint that still scores 80)
// ─────────────────────────────────────────────────────────────────────────────

pub const CARBON_BASELINE: f64 = 0.5;
pub const WATER_BASELINE: f64 = 0.6;
pub const LAND_BASELINE: f64 = 0.4;

/// Sub-score at avg = 0.
pub const SUBSCORE_MAX: f64 = 100.0;

/// Points lost between avg = 0 and avg = baseline.
pub const SUBSCORE_BASELINE_DROP: f64 = 20.0;

/// Points lost per unit of average above the baseline.
pub const OVER_BASELINE_PENALTY: f64 = 60.0;

// ─────────────────────────────────────────────────────────────────────────────
// Composite weights
// ─────────────────────────────────────────────────────────────────────────────

pub const CARBON_WEIGHT: f64 = 0.4;
pub const WATER_WEIGHT: f64 = 0.3;
pub const LAND_WEIGHT: f64 = 0.3;

pub const HEALTH_WEIGHT: f64 = 0.4;
pub const ENVIRONMENT_WEIGHT: f64 = 0.6;

pub const MIN_TOTAL_SCORE: f64 = 0.0;
pub const MAX_TOTAL_SCORE: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Planet status thresholds (inclusive lower bounds on total score)
// ─────────────────────────────────────────────────────────────────────────────

pub const STATUS_EXCELLENT: u32 = 80;
pub const STATUS_GOOD: u32 = 60;
pub const STATUS_FAIR: u32 = 40;
pub const STATUS_POOR: u32 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Game rules
// ─────────────────────────────────────────────────────────────────────────────

/// Ingredients required before cooking can start.
pub const MIN_COOKING_INGREDIENTS: usize = 2;

/// Total score that keeps the eco streak going.
pub const ECO_STREAK_SCORE: u32 = 60;

/// Average health score that keeps the healthy streak going.
pub const HEALTHY_STREAK_HEALTH: f64 = 0.8;

/// Average health below which a nutrition tip is shown.
pub const LOW_HEALTH_TIP: f64 = 0.5;
