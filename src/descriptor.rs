//! Typed widget-definition records parsed from the YAML inputs.
//!
//! The schema is deliberately lenient: apart from identities, every field is
//! optional and is skipped during serialization when absent, so a field a
//! template references but a definition omits renders as empty text instead
//! of failing the record.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The target ecosystem a widget's documentation is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Js,
    React,
    Vue,
}

impl Flavor {
    /// All known flavors, in output order.
    pub const ALL: [Flavor; 3] = [Flavor::Js, Flavor::React, Flavor::Vue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Js => "js",
            Flavor::React => "react",
            Flavor::Vue => "vue",
        }
    }

    /// Creates a Flavor from a file stem.
    ///
    /// # Returns
    /// * `Option<Self>` - Some(Flavor) if the stem names a known flavor
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "js" => Some(Flavor::Js),
            "react" => Some(Flavor::React),
            "vue" => Some(Flavor::Vue),
            _ => None,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text field that is either one inline value (per-flavor definition
/// files) or a mapping keyed by flavor (single-file definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlavorText {
    Inline(String),
    PerFlavor(FlavorMap),
}

/// Per-flavor variants of one text field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlavorMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub react: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vue: Option<String>,
}

/// One documentation subject: a UI widget or a single configuration entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<FlavorText>,
    /// Exported symbol the import section documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storybook_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<FlavorText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_output: Option<String>,
    #[serde(default)]
    pub widget_parameters_groups: Vec<ParameterGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customize: Option<CustomizationSpec>,
}

/// A named cluster of configurable options documented together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterGroup {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// One configurable field of a widget or connector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Rendered verbatim into the `required` attribute; YAML booleans are
    /// normalized to their string form
    #[serde(
        default,
        deserialize_with = "bool_like",
        skip_serializing_if = "Option::is_none"
    )]
    pub required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippets: Option<String>,
}

/// The "customize the UI" section of a widget definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomizationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub connector: Connector,
}

/// A headless API exposing a widget's behavior for custom UI construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connector {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<ConnectorUsage>,
    /// Two groups by convention: widget parameters, then returned APIs
    #[serde(default)]
    pub params: Vec<ParameterGroup>,
    #[serde(default)]
    pub full_example: Vec<Snippet>,
}

/// The two usage texts of a connector, keyed as in the definition files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorUsage {
    #[serde(
        rename = "renderFunction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub render_function: Option<String>,
    #[serde(
        rename = "initializeWidget",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub initialize_widget: Option<String>,
}

/// One copyable code block of a full example.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Deserializes a boolean-like field (`false` or `"false"`) into its
/// string form so templates can substitute it verbatim.
fn bool_like<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolLike {
        Bool(bool),
        Text(String),
    }

    Ok(Option::<BoolLike>::deserialize(deserializer)?.map(|value| match value {
        BoolLike::Bool(b) => b.to_string(),
        BoolLike::Text(s) => s,
    }))
}
