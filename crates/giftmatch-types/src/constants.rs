//! System-wide constants for the GiftMatch draw engine.

/// Minimum roster size for a non-self assignment to exist.
pub const MIN_ROSTER_SIZE: usize = 2;

/// Default number of fresh-shuffle attempts before a draw is reported
/// infeasible. Greedy dead ends are rare for rosters of three or more,
/// so the budget is generous without making worst-case work unbounded.
pub const DEFAULT_DRAW_ATTEMPTS: usize = 100;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "GiftMatch";
