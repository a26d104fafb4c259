/// Version line shown by `--version`, e.g. `0.1.0 (3f2a9c1, release, built 2025-01-01T00:00:00Z)`.
///
/// The hash, profile and timestamp are embedded by `build.rs`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("EXPENSE_TRACKER_BUILD_HASH"),
    ", ",
    env!("EXPENSE_TRACKER_BUILD_PROFILE"),
    ", built ",
    env!("EXPENSE_TRACKER_BUILD_TIMESTAMP"),
    ")"
);
