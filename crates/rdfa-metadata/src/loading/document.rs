//! Read-only view over a parsed definition document.

use std::path::{Path, PathBuf};

use crate::model::descriptor::ConfigMap;
use crate::model::namespace::VocabularyMap;
use crate::model::vocabulary::attribute;

use super::error::LoadError;

/// Raw text of one definition file.
#[derive(Debug, Clone)]
pub struct DefinitionSource {
    path: PathBuf,
    text: String,
}

impl DefinitionSource {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a definition file from disk.
    pub fn read(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Ok(Self::new(path, text))
    }

    /// Parse into a tree. The document borrows from `self`.
    pub fn parse(&self) -> Result<roxmltree::Document<'_>, LoadError> {
        roxmltree::Document::parse(&self.text).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// One element of a definition document.
#[derive(Debug, Clone, Copy)]
pub struct DefinitionElement<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
}

impl<'a, 'input> DefinitionElement<'a, 'input> {
    pub fn new(node: roxmltree::Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// Root element of a parsed document.
    pub fn root(document: &'a roxmltree::Document<'input>) -> Self {
        Self::new(document.root_element())
    }

    /// Local tag name, without namespace.
    pub fn tag_name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// Text content with surrounding whitespace removed; empty when absent.
    pub fn text(&self) -> &'a str {
        self.node.text().map(str::trim).unwrap_or("")
    }

    /// Child elements in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = DefinitionElement<'a, 'input>> {
        self.node
            .children()
            .filter(|node| node.is_element())
            .map(DefinitionElement::new)
    }

    /// Direct child elements with the given tag, in document order.
    pub fn children_named(
        &self,
        tag: &'static str,
    ) -> impl Iterator<Item = DefinitionElement<'a, 'input>> {
        self.child_elements()
            .filter(move |child| child.tag_name() == tag)
    }

    pub fn first_child(&self, tag: &'static str) -> Option<DefinitionElement<'a, 'input>> {
        self.children_named(tag).next()
    }

    /// Namespace declarations in scope at this element, inherited ones
    /// included. The implicit `xml` prefix and default namespaces are left out.
    pub fn namespaces(&self) -> VocabularyMap {
        let mut namespaces = VocabularyMap::new();
        for ns in self.node.namespaces() {
            match ns.name() {
                Some("xml") | None => continue,
                Some(prefix) => {
                    namespaces.insert(prefix.to_string(), ns.uri().to_string());
                }
            }
        }
        namespaces
    }
}

/// Collect `key`/`value` pairs from the direct children tagged `kind`
/// (`config` or `attribute`). Later keys overwrite earlier ones; entries
/// without a key are skipped and a missing value reads as empty.
pub fn extract_config(element: &DefinitionElement<'_, '_>, kind: &'static str) -> ConfigMap {
    let mut config = ConfigMap::new();
    for entry in element.children_named(kind) {
        let Some(key) = entry.attribute(attribute::KEY) else {
            continue;
        };
        let value = entry.attribute(attribute::VALUE).unwrap_or("");
        config.insert(key.to_string(), value.to_string());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::vocabulary::element;

    const DEFINITION: &str = r#"<type xmlns:sioc="http://rdfs.org/sioc/ns#" typeof="sioc:Post">
        <config key="a" value="1"/>
        <config key="b" value="2"/>
        <config key="a" value="3"/>
        <config value="orphan"/>
        <attribute key="class" value="post"/>
        <children>
            <property identifier="title" xmlns:dcterms="http://purl.org/dc/terms/">
                <config key="nested" value="x"/>
            </property>
        </children>
    </type>"#;

    #[test]
    fn config_is_last_write_wins_in_first_seen_order() {
        let doc = roxmltree::Document::parse(DEFINITION).unwrap();
        let root = DefinitionElement::root(&doc);
        let config = extract_config(&root, element::CONFIG);
        let entries: Vec<_> = config.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn config_is_not_recursive() {
        let doc = roxmltree::Document::parse(DEFINITION).unwrap();
        let root = DefinitionElement::root(&doc);
        assert!(!extract_config(&root, element::CONFIG).contains_key("nested"));
        let attributes = extract_config(&root, element::ATTRIBUTE);
        assert_eq!(attributes.get("class").map(String::as_str), Some("post"));
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn namespaces_include_inherited_declarations() {
        let doc = roxmltree::Document::parse(DEFINITION).unwrap();
        let root = DefinitionElement::root(&doc);
        let property = root
            .first_child(element::CHILDREN)
            .and_then(|children| children.first_child(element::PROPERTY))
            .unwrap();

        let at_root = root.namespaces();
        assert_eq!(at_root.len(), 1);
        assert_eq!(at_root["sioc"], "http://rdfs.org/sioc/ns#");

        let at_property = property.namespaces();
        assert_eq!(at_property["sioc"], "http://rdfs.org/sioc/ns#");
        assert_eq!(at_property["dcterms"], "http://purl.org/dc/terms/");
        assert!(!at_property.contains_key("xml"));
    }

    #[test]
    fn missing_text_reads_as_empty() {
        let doc = roxmltree::Document::parse("<type><rev/><rev> sioc:has_container </rev></type>")
            .unwrap();
        let root = DefinitionElement::root(&doc);
        let revs: Vec<_> = root.children_named(element::REV).map(|r| r.text()).collect();
        assert_eq!(revs, vec!["", "sioc:has_container"]);
    }
}
