//! Input discovery and parsing for widgetdoc.
//! Handles the two-level widgets directory tree (one directory per widget,
//! one YAML file per flavor) and the single-file configure definition whose
//! flavors live inside the record as per-flavor mappings.

use crate::descriptor::{Flavor, WidgetDescriptor};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One discovered widget-definition file, identified before parsing.
///
/// The widget identity comes from the parent directory name, the flavor tag
/// from the file stem. The tag is kept raw here and validated when the
/// record is parsed, so a bad file name is reported like any other
/// per-record failure.
#[derive(Debug)]
pub struct RecordSource {
    pub widget: String,
    pub flavor: String,
    pub path: PathBuf,
}

/// One fully parsed (widget, flavor) record, ready to render.
#[derive(Debug)]
pub struct WidgetRecord {
    pub widget: String,
    pub flavor: Flavor,
    pub descriptor: WidgetDescriptor,
}

impl RecordSource {
    /// Parses the definition file into a typed record.
    ///
    /// # Errors
    /// * `Error::UnknownFlavorError` if the file stem is not a known flavor
    /// * `Error::ParseError` if the YAML is malformed
    pub fn parse(&self) -> Result<WidgetRecord> {
        let flavor =
            Flavor::from_string(&self.flavor).ok_or_else(|| Error::UnknownFlavorError {
                flavor: self.flavor.clone(),
                path: self.path.display().to_string(),
            })?;

        let content = fs::read_to_string(&self.path).map_err(Error::IoError)?;
        let descriptor: WidgetDescriptor =
            serde_yaml::from_str(&content).map_err(|e| Error::ParseError {
                path: self.path.display().to_string(),
                source: e,
            })?;

        Ok(WidgetRecord { widget: self.widget.clone(), flavor, descriptor })
    }
}

impl WidgetRecord {
    /// Builds the render context: the descriptor's fields at the top level
    /// plus the flavor tag the template branches on.
    pub fn context(&self) -> Result<serde_json::Value> {
        let mut context = serde_json::to_value(&self.descriptor)?;
        if let Some(fields) = context.as_object_mut() {
            fields.insert(
                "flavor".to_string(),
                serde_json::Value::String(self.flavor.as_str().to_string()),
            );
        }
        Ok(context)
    }
}

/// Enumerates the widgets directory tree and returns one source per leaf
/// definition file.
///
/// Only the second level is considered; files that are not YAML are skipped.
/// An empty tree yields zero sources, not an error. Results are sorted by
/// path so runs are deterministic.
pub fn discover_widget_sources<P: AsRef<Path>>(widgets_root: P) -> Result<Vec<RecordSource>> {
    let widgets_root = widgets_root.as_ref();
    let mut sources = Vec::new();

    for entry in WalkDir::new(widgets_root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => {}
            _ => {
                debug!("Skipping non-definition file '{}'", path.display());
                continue;
            }
        }

        let widget = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let flavor = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        debug!("Discovered definition '{}'", path.display());
        sources.push(RecordSource { widget, flavor, path: path.to_path_buf() });
    }

    Ok(sources)
}

/// Reads the single-file configure definition.
///
/// No flavor tagging happens here: the record carries its per-flavor fields
/// as nested mappings.
pub fn load_configure_record<P: AsRef<Path>>(path: P) -> Result<WidgetDescriptor> {
    let path = path.as_ref();
    debug!("Loading configure definition from '{}'", path.display());

    let content = fs::read_to_string(path).map_err(Error::IoError)?;
    serde_yaml::from_str(&content).map_err(|e| Error::ParseError {
        path: path.display().to_string(),
        source: e,
    })
}
