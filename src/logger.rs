//! Logger initialization for widgetdoc.
//! Batch runs default to Info so skipped records and failed writes stay
//! operator-visible; verbose mode adds the per-file Debug trail of the
//! discovery and write steps.

use log::LevelFilter;

pub fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new().filter_level(level).init();
}
