//! Pipeline orchestration for widgetdoc.
//! Runs the generators end to end: discover and parse definitions, render
//! each record through its template, and write the documents out. Records
//! are independent, so per-record failures are collected into a summary
//! instead of aborting the batch.

use crate::descriptor::Flavor;
use crate::error::{Error, Result};
use crate::loader::{discover_widget_sources, load_configure_record};
use crate::renderer::TemplateRenderer;
use crate::templates::DocTemplate;
use log::{debug, error};
use std::fs;
use std::path::{Path, PathBuf};

/// One record that failed to parse or write during a run.
#[derive(Debug)]
pub struct Failure {
    /// Input or output path the failure is attributed to
    pub subject: String,
    pub error: Error,
}

/// Per-record outcomes of a whole run.
///
/// The batch is best-effort: a failed record is reported here while its
/// siblings still produce their outputs.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record_failure(&mut self, subject: String, err: Error) {
        error!("{}", err);
        self.failures.push(Failure { subject, error: err });
    }
}

/// Drives the generators against one output root.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    output_root: &'a Path,
}

impl<'a> Processor<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, output_root: &'a Path) -> Self {
        Self { engine, output_root }
    }

    /// Output path for one (widget, flavor) pair.
    pub fn widget_output_path(&self, widget: &str, flavor: Flavor) -> PathBuf {
        self.output_root.join(flavor.as_str()).join(format!("{widget}.mdx"))
    }

    /// Fixed output path for the configure document.
    pub fn configure_output_path(&self) -> PathBuf {
        self.output_root.join("configure.mdx")
    }

    /// Creates the per-flavor output directories once, up front.
    /// Individual writes assume the destination structure exists.
    pub fn prepare_output_dirs(&self) -> Result<()> {
        for flavor in Flavor::ALL {
            fs::create_dir_all(self.output_root.join(flavor.as_str()))
                .map_err(Error::IoError)?;
        }
        Ok(())
    }

    /// Runs the widget generator: one document per (widget, flavor) pair
    /// found under `widgets_root`.
    ///
    /// Loading completes before any rendering begins. A definition that
    /// fails to parse is skipped and reported; a template error aborts the
    /// run, since the templates are compiled-in.
    pub fn run_widget_generator(
        &self,
        widgets_root: &Path,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let sources = discover_widget_sources(widgets_root)?;
        debug!("Discovered {} widget definitions", sources.len());

        let mut records = Vec::new();
        for source in sources {
            match source.parse() {
                Ok(record) => records.push(record),
                Err(err) => {
                    summary.record_failure(source.path.display().to_string(), err)
                }
            }
        }

        for record in records {
            let context = record.context()?;
            let content = self.engine.render(DocTemplate::Widget.body(), &context)?;
            let target = self.widget_output_path(&record.widget, record.flavor);
            self.write_document(&target, &content, summary);
        }

        Ok(())
    }

    /// Runs the configure generator: one document from the single
    /// definition file at `configure_file`.
    pub fn run_configure_generator(
        &self,
        configure_file: &Path,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let descriptor = match load_configure_record(configure_file) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                summary.record_failure(configure_file.display().to_string(), err);
                return Ok(());
            }
        };

        let context = serde_json::to_value(&descriptor).map_err(Error::ContextError)?;
        let content = self.engine.render(DocTemplate::Configure.body(), &context)?;
        self.write_document(&self.configure_output_path(), &content, summary);

        Ok(())
    }

    /// Writes one rendered document, recording the outcome.
    /// A write failure never stops the remaining records.
    fn write_document(&self, target: &Path, content: &str, summary: &mut RunSummary) {
        match fs::write(target, content) {
            Ok(()) => {
                debug!("Wrote '{}'", target.display());
                summary.written.push(target.to_path_buf());
            }
            Err(err) => {
                let subject = target.display().to_string();
                summary.record_failure(
                    subject.clone(),
                    Error::WriteError { path: subject, source: err },
                );
            }
        }
    }
}
