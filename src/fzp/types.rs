//! In-memory representation of a Fritzing part description
//!
//! Only the parts of the FZP document the validator inspects are
//! materialized. Views, connectors, buses and the free-form description
//! are skipped during deserialization.

use serde::Deserialize;

/// A single `<property name="...">value</property>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Property {
    /// The `name` attribute, if present
    pub name: Option<String>,
    /// The text content, if present
    pub value: Option<String>,
}

impl Property {
    /// Create a property with both name and value set
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

/// A loaded part description record.
///
/// Owned by the validation call that loaded it and never mutated by checks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fzp {
    /// `moduleId` attribute of the root `<module>` element
    pub module_id: Option<String>,
    /// `fritzingVersion` attribute
    pub fritzing_version: Option<String>,
    /// `referenceFile` attribute
    pub reference_file: Option<String>,
    /// `<version>`
    pub version: Option<String>,
    /// `<title>`
    pub title: Option<String>,
    /// `<label>`
    pub label: Option<String>,
    /// `<author>`
    pub author: Option<String>,
    /// `<tags><tag>...</tag></tags>`, in document order
    pub tags: Vec<String>,
    /// `<properties><property>...</property></properties>`, in document order
    pub properties: Vec<Property>,
}

impl Fzp {
    /// Create a record with the three validated fields set.
    pub fn new(module_id: impl Into<String>, title: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            module_id: Some(module_id.into()),
            title: Some(title.into()),
            properties,
            ..Self::default()
        }
    }

    /// Returns the property value for `name`, first match wins.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
            .and_then(|p| p.value.as_deref())
    }
}

// Wire shapes for quick-xml. Attributes are `@`-prefixed, element text is `$text`.
// Single-valued children are collected as lists so a repeated element is not a
// duplicate-field error; the last occurrence wins. Repeated `<tags>` and
// `<properties>` containers are concatenated.

#[derive(Debug, Deserialize)]
pub(super) struct ModuleXml {
    #[serde(rename = "@moduleId", default)]
    module_id: Option<String>,
    #[serde(rename = "@fritzingVersion", default)]
    fritzing_version: Option<String>,
    #[serde(rename = "@referenceFile", default)]
    reference_file: Option<String>,
    #[serde(default)]
    version: Vec<String>,
    #[serde(default)]
    title: Vec<String>,
    #[serde(default)]
    label: Vec<String>,
    #[serde(default)]
    author: Vec<String>,
    #[serde(default)]
    tags: Vec<TagsXml>,
    #[serde(default)]
    properties: Vec<PropertiesXml>,
}

#[derive(Debug, Deserialize, Default)]
struct TagsXml {
    #[serde(rename = "tag", default)]
    items: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PropertiesXml {
    #[serde(rename = "property", default)]
    items: Vec<PropertyXml>,
}

/// Only the element's own text is the value. Nested elements are skipped
/// and do not contribute to it.
#[derive(Debug, Deserialize)]
struct PropertyXml {
    #[serde(rename = "@name", default)]
    name: Option<String>,
    #[serde(rename = "$text", default)]
    value: Option<String>,
}

impl From<ModuleXml> for Fzp {
    fn from(xml: ModuleXml) -> Self {
        Self {
            module_id: xml.module_id,
            fritzing_version: xml.fritzing_version,
            reference_file: xml.reference_file,
            version: xml.version.into_iter().last(),
            title: xml.title.into_iter().last(),
            label: xml.label.into_iter().last(),
            author: xml.author.into_iter().last(),
            tags: xml.tags.into_iter().flat_map(|t| t.items).collect(),
            properties: xml
                .properties
                .into_iter()
                .flat_map(|p| p.items)
                .map(|p| Property {
                    name: p.name,
                    value: p.value,
                })
                .collect(),
        }
    }
}
