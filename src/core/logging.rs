//! Logging initialization
//!
//! The library only emits through the `log` facade: one `debug!` summary per
//! `grow_branch` call (steps, spawned branches, canopies, aborted steps) and
//! one `info!` per generated bonsai with the per-collection voxel counts. The
//! `generate_bonsai` binary adds `info!` timing, `warn!` for rejected
//! parameters and `error!` for failed generation or export.

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`, so the per-branch
/// summaries only show with `RUST_LOG=bonsai=debug`.
///
/// # Example
/// ```no_run
/// bonsai::core::logging::init();
/// log::debug!("shown with RUST_LOG=debug");
/// ```
pub fn init() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();
}
