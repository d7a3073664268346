//! Record loader: turns an `.fzp` file into an [`Fzp`] record
//!
//! - The whole file is read before parsing; the handle is closed on return
//! - The first element must be `<module>`
//! - Any parse failure is terminal, there is no partial recovery
//! - Repeated single-valued elements are accepted, the last one wins;
//!   repeated `<tags>` and `<properties>` blocks are concatenated
//! - A property value is the element's own text; nested markup is ignored

use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::errors::{FzpError, FzpResult};
use super::types::{Fzp, ModuleXml};

/// Name of the root element of every part description
const ROOT_ELEMENT: &str = "module";

/// Source of loaded records.
///
/// The validator only depends on this contract: a path goes in, a record
/// or a load error comes out.
pub trait RecordLoader {
    /// Load the record stored at `path`.
    fn load(&self, path: &Path) -> FzpResult<Fzp>;
}

/// Loader for Fritzing part description files on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FzpLoader;

impl FzpLoader {
    /// Creates a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Parses an in-memory document. `path` is only used for error context.
    pub fn parse(path: &Path, xml: &str) -> FzpResult<Fzp> {
        let root = root_element(xml).map_err(|reason| FzpError::malformed(path, reason))?;

        match root {
            Some(name) if name == ROOT_ELEMENT => {}
            Some(name) => return Err(FzpError::not_a_module(path, name)),
            None => return Err(FzpError::not_a_module(path, "<none>")),
        }

        let module: ModuleXml = quick_xml::de::from_str(xml)
            .map_err(|e| FzpError::malformed(path, e.to_string()))?;

        Ok(module.into())
    }
}

impl RecordLoader for FzpLoader {
    fn load(&self, path: &Path) -> FzpResult<Fzp> {
        let content = fs::read_to_string(path).map_err(|e| FzpError::read(path, e))?;
        Self::parse(path, &content)
    }
}

impl Fzp {
    /// Parses a record from an XML string.
    pub fn from_xml(xml: &str) -> FzpResult<Fzp> {
        FzpLoader::parse(Path::new("<in-memory>"), xml)
    }
}

/// Name of the first element in the document, skipping the prolog.
fn root_element(xml: &str) -> Result<Option<String>, String> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(Some(String::from_utf8_lossy(e.name().as_ref()).into_owned()));
            }
            Ok(Event::Eof) => return Ok(None),
            Ok(_) => continue,
            Err(e) => {
                return Err(format!(
                    "error at position {}: {}",
                    reader.buffer_position(),
                    e
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<module fritzingVersion="0.9.3b" moduleId="5mmColorLEDModuleID" referenceFile="LED-generic-5mm.fzp">
  <version>4</version>
  <title>Red (633nm) LED</title>
  <label>LED</label>
  <author>Fritzing Part-o-matic</author>
  <tags>
    <tag>LED</tag>
    <tag>Red</tag>
  </tags>
  <properties>
    <property name="family">LED</property>
    <property name="color">Red (633nm)</property>
  </properties>
  <description>A generic red LED</description>
  <views>
    <breadboardView>
      <layers image="breadboard/LED-5mm-red-leg.svg">
        <layer layerId="breadboard"/>
      </layers>
    </breadboardView>
  </views>
  <connectors>
    <connector id="connector0" name="cathode" type="male">
      <description>cathode pin</description>
    </connector>
  </connectors>
</module>
"#;

    #[test]
    fn test_parse_full_module() {
        let fzp = Fzp::from_xml(LED).unwrap();
        assert_eq!(fzp.module_id.as_deref(), Some("5mmColorLEDModuleID"));
        assert_eq!(fzp.fritzing_version.as_deref(), Some("0.9.3b"));
        assert_eq!(fzp.reference_file.as_deref(), Some("LED-generic-5mm.fzp"));
        assert_eq!(fzp.version.as_deref(), Some("4"));
        assert_eq!(fzp.title.as_deref(), Some("Red (633nm) LED"));
        assert_eq!(fzp.tags, vec!["LED".to_string(), "Red".to_string()]);
        assert_eq!(fzp.properties.len(), 2);
        assert_eq!(fzp.property("family"), Some("LED"));
        assert_eq!(fzp.property("color"), Some("Red (633nm)"));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let fzp = Fzp::from_xml(r#"<module><label>x</label></module>"#).unwrap();
        assert!(fzp.module_id.is_none());
        assert!(fzp.title.is_none());
        assert!(fzp.properties.is_empty());
        assert!(fzp.tags.is_empty());
    }

    #[test]
    fn test_wrong_root_is_not_a_module() {
        let err = Fzp::from_xml(r#"<svg width="1"></svg>"#).unwrap_err();
        assert_eq!(err.code(), "FZP_NOT_A_MODULE");
        assert!(err.to_string().contains("svg"));
    }

    #[test]
    fn test_empty_document_is_not_a_module() {
        let err = Fzp::from_xml("").unwrap_err();
        assert_eq!(err.code(), "FZP_NOT_A_MODULE");
    }

    #[test]
    fn test_broken_markup_is_malformed() {
        let err = Fzp::from_xml(r#"<module moduleId="a"><title>x</module>"#).unwrap_err();
        assert_eq!(err.code(), "FZP_MALFORMED");
    }

    #[test]
    fn test_repeated_elements_are_accepted() {
        let fzp = Fzp::from_xml(
            r#"<module moduleId="m1">
  <title>First</title>
  <properties><property name="family">LED</property></properties>
  <tags><tag>a</tag></tags>
  <title>Second</title>
  <properties><property name="color">red</property></properties>
  <tags><tag>b</tag></tags>
</module>"#,
        )
        .unwrap();

        assert_eq!(fzp.title.as_deref(), Some("Second"));
        assert_eq!(fzp.tags, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(fzp.properties.len(), 2);
        assert_eq!(fzp.property("family"), Some("LED"));
        assert_eq!(fzp.property("color"), Some("red"));
    }

    #[test]
    fn test_property_value_ignores_nested_markup() {
        let fzp = Fzp::from_xml(
            r#"<module><properties><property name="a">x<b>y</b></property></properties></module>"#,
        )
        .unwrap();

        assert_eq!(fzp.properties.len(), 1);
        assert_eq!(fzp.property("a"), Some("x"));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LED.as_bytes()).unwrap();

        let fzp = FzpLoader::new().load(file.path()).unwrap();
        assert_eq!(fzp.module_id.as_deref(), Some("5mmColorLEDModuleID"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.fzp");

        let err = FzpLoader::new().load(&path).unwrap_err();
        assert_eq!(err.code(), "FZP_READ_FAILED");
        assert_eq!(err.path(), path.as_path());
    }
}
