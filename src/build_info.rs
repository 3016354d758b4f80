//! Compile-time build information shown by `--version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string, e.g. `aura-chronicles 2026-10-17 (a1b2c3d)`.
pub fn version_line() -> String {
    format!("aura-chronicles {} ({})", BUILD_DATE, BUILD_COMMIT)
}
