//! Command-line interface implementation for widgetdoc.
//! Provides argument parsing using clap. Every argument has a default that
//! matches the documentation repository layout, so a plain `widgetdoc`
//! invocation regenerates everything.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for widgetdoc.
#[derive(Parser, Debug)]
#[command(author, version, about = "widgetdoc: MDX documentation generator for widget definitions", long_about = None)]
pub struct Args {
    /// Directory tree of widget definitions (<widget>/<flavor>.yml)
    #[arg(long, value_name = "DIR", default_value = ".scripts/widgets")]
    pub widgets_dir: PathBuf,

    /// Single-file definition for the configure page
    #[arg(long, value_name = "FILE", default_value = ".scripts/configure.yml")]
    pub configure_file: PathBuf,

    /// Root directory the generated pages are written under
    #[arg(
        long,
        value_name = "DIR",
        default_value = "ui-libraries/instantsearch/widgets"
    )]
    pub output_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
