//! Drives the builder with a custom factory to check exactly which setters it
//! calls, and in which order.

use std::path::{Path, PathBuf};

use rdfa_metadata::loading::document::DefinitionElement;
use rdfa_metadata::loading::factory::FactoryContext;
use rdfa_metadata::loading::{DescriptorFactory, DriverOptions, LoadError, RdfMapper, XmlDriver};
use rdfa_metadata::model::definition::{
    ChildDefinition, ChildKind, CollectionDefinition, NodeDefinition, PropertyDefinition,
    TypeDefinition,
};
use rdfa_metadata::model::descriptor::ConfigMap;

// ---------------------------------------------------------------------------
// Recording descriptors
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct RecordedType {
    class_name: String,
    config: Vec<String>,
    calls: Vec<String>,
    children: Vec<(String, RecordedChild)>,
}

impl NodeDefinition for RecordedType {
    fn set_rdf_type(&mut self, rdf_type: &str) {
        self.calls.push(format!("typeof {rdf_type}"));
    }

    fn set_attribute(&mut self, key: &str, value: &str) {
        self.calls.push(format!("attribute {key}={value}"));
    }

    fn set_vocabulary(&mut self, prefix: &str, uri: &str) {
        self.calls.push(format!("vocabulary {prefix}={uri}"));
    }
}

impl TypeDefinition for RecordedType {
    type Child = RecordedChild;

    fn add_rev(&mut self, rev: &str) {
        self.calls.push(format!("rev {rev}"));
    }

    fn set_child(&mut self, identifier: &str, child: RecordedChild) {
        self.children.push((identifier.to_string(), child));
    }

    fn is_node(&self) -> bool {
        false
    }
}

/// Child exposing only the capability matching its kind; never a node.
#[derive(Debug)]
struct RecordedChild {
    kind: ChildKind,
    owner: String,
    calls: Vec<String>,
}

impl PropertyDefinition for RecordedChild {
    fn set_property(&mut self, predicate: &str) {
        self.calls.push(format!("property {predicate}"));
    }
}

impl CollectionDefinition for RecordedChild {
    fn set_rel(&mut self, rel: &str) {
        self.calls.push(format!("rel {rel}"));
    }

    fn set_rev(&mut self, rev: &str) {
        self.calls.push(format!("rev {rev}"));
    }

    fn add_type_name(&mut self, type_name: &str) {
        self.calls.push(format!("addTypeName {type_name}"));
    }
}

impl ChildDefinition for RecordedChild {
    fn as_property_mut(&mut self) -> Option<&mut dyn PropertyDefinition> {
        if self.kind == ChildKind::Property {
            Some(self)
        } else {
            None
        }
    }

    fn as_collection_mut(&mut self) -> Option<&mut dyn CollectionDefinition> {
        if self.kind == ChildKind::Collection {
            Some(self)
        } else {
            None
        }
    }
}

struct RecordingFactory;

impl DescriptorFactory for RecordingFactory {
    type Type = RecordedType;
    type Child = RecordedChild;

    fn create_type(
        &self,
        name: &str,
        mapper: &dyn RdfMapper,
        config: ConfigMap,
    ) -> Result<RecordedType, LoadError> {
        Ok(RecordedType {
            class_name: mapper.canonical_name(name),
            config: config.into_iter().map(|(k, v)| format!("{k}={v}")).collect(),
            ..RecordedType::default()
        })
    }

    fn create_child(
        &self,
        kind: ChildKind,
        identifier: &str,
        definition: &DefinitionElement<'_, '_>,
        context: &FactoryContext<'_>,
    ) -> Result<RecordedChild, LoadError> {
        assert_eq!(definition.attribute("identifier"), Some(identifier));
        assert_eq!(definition.tag_name(), kind.tag());
        Ok(RecordedChild {
            kind,
            owner: context.mapper.canonical_name(context.type_name),
            calls: Vec::new(),
        })
    }
}

struct ShoutingMapper;

impl RdfMapper for ShoutingMapper {
    fn canonical_name(&self, type_name: &str) -> String {
        type_name.to_uppercase()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn definitions() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/definitions")
}

fn load(name: &str) -> RecordedType {
    XmlDriver::new(DriverOptions::new(vec![definitions()]))
        .load_type(name, &ShoutingMapper, &RecordingFactory)
        .expect("Failed to load fixture type")
}

fn child<'a>(ty: &'a RecordedType, identifier: &str) -> &'a RecordedChild {
    &ty.children
        .iter()
        .find(|(id, _)| id == identifier)
        .unwrap_or_else(|| panic!("no child {identifier}"))
        .1
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn mapper_and_config_reach_the_factory() {
    let article = load("blog::Article");
    assert_eq!(article.class_name, "BLOG::ARTICLE");
    assert_eq!(article.config, vec!["controller=article", "template=article.html"]);
    assert_eq!(child(&article, "title").owner, "BLOG::ARTICLE");
}

#[test]
fn revs_come_first_and_in_order() {
    let article = load("blog::Article");
    assert_eq!(article.calls[0], "rev sioc:container_of");
    assert_eq!(article.calls[1], "rev dcterms:hasPart");
}

#[test]
fn non_node_type_skips_attribute_entries() {
    let article = load("blog::Article");
    assert!(!article.calls.iter().any(|c| c.starts_with("attribute class=")));
    // typeof / vocab / prefix still apply
    assert!(article.calls.contains(&"typeof sioc:Post".to_string()));
    assert!(article.calls.contains(&"attribute vocab=http://schema.org/".to_string()));
    assert!(article
        .calls
        .contains(&"attribute prefix=foo: http://example.org/".to_string()));
    assert!(article
        .calls
        .contains(&"vocabulary foo=http://example.org/".to_string()));
    assert!(article
        .calls
        .contains(&"vocabulary sioc=http://rdfs.org/sioc/ns#".to_string()));
}

#[test]
fn add_type_name_receives_expanded_uris_in_order() {
    let article = load("blog::Article");
    let tags = child(&article, "tags");
    assert_eq!(
        tags.calls,
        vec![
            "rel dcterms:subject",
            "rev dcterms:isSubjectOf",
            "addTypeName http://rdfs.org/sioc/ns#Post",
            "addTypeName http://www.w3.org/2004/02/skos/core#Concept",
        ]
    );
}

#[test]
fn children_without_capabilities_are_only_attached() {
    let article = load("blog::Article");
    let identifiers: Vec<_> = article.children.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(identifiers, vec!["title", "content", "tags", "author"]);
    // Not a node here, so typeof/attribute entries of <node> are never applied.
    assert!(child(&article, "author").calls.is_empty());
    assert_eq!(child(&article, "title").calls, vec!["property dcterms:title"]);
}

#[test]
fn default_vocabulary_registered_once_after_children() {
    let comment = load("blog::Comment");
    let default = "vocabulary dcterms=http://purl.org/dc/terms/";
    let registrations: Vec<_> = comment
        .calls
        .iter()
        .enumerate()
        .filter(|(_, c)| c.as_str() == default)
        .collect();
    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].0, comment.calls.len() - 1);
}
