//! Widgetdoc turns YAML widget definitions into MDX documentation pages.
//! It is a one-shot batch generator: definitions are discovered and parsed
//! into typed records, rendered through a fixed set of templates (one per
//! document kind, once per target flavor), and written into the
//! documentation tree. Re-running it overwrites every output from scratch.

/// Command-line interface module for the widgetdoc application
pub mod cli;

/// Typed widget-definition records parsed from the YAML inputs
pub mod descriptor;

/// Error types and handling for the widgetdoc application
pub mod error;

/// Input discovery and parsing
/// Supports the two-level widgets directory tree and the single-file
/// configure definition
pub mod loader;

/// Logger initialization
pub mod logger;

/// Pipeline orchestration and output writing
/// Combines all components to generate the final documents
pub mod processor;

/// MiniJinja-based template rendering
pub mod renderer;

/// The fixed MDX template bodies, one per generator
pub mod templates;
