//! Widgetdoc's main application entry point and orchestration logic.
//! Parses command-line arguments, runs the widget and configure generators,
//! and reports the per-record outcomes of the batch.

use widgetdoc::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::{Processor, RunSummary},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    match run(args) {
        Ok(summary) if summary.is_clean() => {
            println!("Generated {} documents.", summary.written.len());
        }
        Ok(summary) => {
            println!(
                "Generated {} documents, {} records failed.",
                summary.written.len(),
                summary.failures.len()
            );
            std::process::exit(1);
        }
        Err(err) => default_error_handler(err),
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Creates the rendering engine and the per-flavor output directories
/// 2. Runs the widget generator over the definitions tree
/// 3. Runs the configure generator over the single-file definition
/// 4. Returns the collected per-record outcomes
fn run(args: Args) -> Result<RunSummary> {
    let engine = MiniJinjaRenderer::new();
    let processor = Processor::new(&engine, &args.output_dir);

    processor.prepare_output_dirs()?;

    let mut summary = RunSummary::default();
    processor.run_widget_generator(&args.widgets_dir, &mut summary)?;
    processor.run_configure_generator(&args.configure_file, &mut summary)?;

    Ok(summary)
}
