//! Standard in-memory descriptors produced by
//! [`StandardFactory`](crate::loading::factory::StandardFactory).
//!
//! Descriptors serialize to JSON in document order. Nested child types are
//! kept as URIs; resolving them into descriptors is left to the consumer.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::definition::{
    ChildDefinition, CollectionDefinition, NodeDefinition, PropertyDefinition, TypeDefinition,
};
use super::namespace::{expand, VocabularyMap};

/// Ordered free-form key/value map (`config` and `attribute` entries).
pub type ConfigMap = IndexMap<String, String>;

/// RDFa node information shared by types and children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    #[serde(rename = "typeof", skip_serializing_if = "Option::is_none")]
    pub rdf_type: Option<String>,
    pub attributes: ConfigMap,
    pub vocabularies: VocabularyMap,
}

impl NodeDefinition for NodeInfo {
    fn set_rdf_type(&mut self, rdf_type: &str) {
        self.rdf_type = Some(rdf_type.to_string());
    }

    fn set_attribute(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }

    fn set_vocabulary(&mut self, prefix: &str, uri: &str) {
        self.vocabularies.insert(prefix.to_string(), uri.to_string());
    }
}

// ---------------------------------------------------------------------------
// TypeDescriptor
// ---------------------------------------------------------------------------

/// One mapped application class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDescriptor {
    /// Type name the definition was loaded for.
    pub name: String,
    /// Name as reported by the mapper.
    pub class_name: String,
    #[serde(flatten)]
    pub node: NodeInfo,
    pub rev: IndexSet<String>,
    pub config: ConfigMap,
    pub children: IndexMap<String, ChildDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: &str, class_name: &str, config: ConfigMap) -> Self {
        Self {
            name: name.to_string(),
            class_name: class_name.to_string(),
            node: NodeInfo::default(),
            rev: IndexSet::new(),
            config,
            children: IndexMap::new(),
        }
    }

    pub fn rdf_type(&self) -> Option<&str> {
        self.node.rdf_type.as_deref()
    }

    /// `typeof` expanded against the vocabulary registered on this type.
    pub fn expanded_rdf_type(&self) -> Option<String> {
        self.rdf_type()
            .map(|rdf_type| expand(rdf_type, &self.node.vocabularies))
    }

    pub fn vocabularies(&self) -> &VocabularyMap {
        &self.node.vocabularies
    }

    pub fn attributes(&self) -> &ConfigMap {
        &self.node.attributes
    }

    pub fn child(&self, identifier: &str) -> Option<&ChildDescriptor> {
        self.children.get(identifier)
    }

    pub fn property(&self, identifier: &str) -> Option<&PropertyDescriptor> {
        match self.children.get(identifier) {
            Some(ChildDescriptor::Property(property)) => Some(property),
            _ => None,
        }
    }

    pub fn collection(&self, identifier: &str) -> Option<&CollectionDescriptor> {
        match self.children.get(identifier) {
            Some(ChildDescriptor::Collection(collection)) => Some(collection),
            _ => None,
        }
    }
}

impl NodeDefinition for TypeDescriptor {
    fn set_rdf_type(&mut self, rdf_type: &str) {
        self.node.set_rdf_type(rdf_type);
    }

    fn set_attribute(&mut self, key: &str, value: &str) {
        self.node.set_attribute(key, value);
    }

    fn set_vocabulary(&mut self, prefix: &str, uri: &str) {
        self.node.set_vocabulary(prefix, uri);
    }
}

impl TypeDefinition for TypeDescriptor {
    type Child = ChildDescriptor;

    fn add_rev(&mut self, rev: &str) {
        self.rev.insert(rev.to_string());
    }

    fn set_child(&mut self, identifier: &str, child: ChildDescriptor) {
        self.children.insert(identifier.to_string(), child);
    }
}

// ---------------------------------------------------------------------------
// Children
// ---------------------------------------------------------------------------

/// A child of a type, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChildDescriptor {
    Property(PropertyDescriptor),
    Collection(CollectionDescriptor),
    Node(NodeDescriptor),
}

impl ChildDescriptor {
    pub fn identifier(&self) -> &str {
        match self {
            ChildDescriptor::Property(p) => &p.identifier,
            ChildDescriptor::Collection(c) => &c.identifier,
            ChildDescriptor::Node(n) => &n.identifier,
        }
    }
}

impl ChildDefinition for ChildDescriptor {
    fn as_property_mut(&mut self) -> Option<&mut dyn PropertyDefinition> {
        match self {
            ChildDescriptor::Property(p) => Some(p),
            _ => None,
        }
    }

    fn as_collection_mut(&mut self) -> Option<&mut dyn CollectionDefinition> {
        match self {
            ChildDescriptor::Collection(c) => Some(c),
            _ => None,
        }
    }

    fn as_node_mut(&mut self) -> Option<&mut dyn NodeDefinition> {
        match self {
            ChildDescriptor::Property(p) => Some(&mut p.node),
            ChildDescriptor::Collection(c) => Some(&mut c.node),
            ChildDescriptor::Node(n) => Some(&mut n.node),
        }
    }
}

/// Scalar property mapping. A property with its own `typeof` renders as a
/// nested node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    pub identifier: String,
    pub property: String,
    #[serde(flatten)]
    pub node: NodeInfo,
    pub config: ConfigMap,
}

impl PropertyDescriptor {
    pub fn new(identifier: &str, config: ConfigMap) -> Self {
        Self {
            identifier: identifier.to_string(),
            config,
            ..Self::default()
        }
    }

    pub fn is_nested_node(&self) -> bool {
        self.node.rdf_type.is_some()
    }
}

impl PropertyDefinition for PropertyDescriptor {
    fn set_property(&mut self, predicate: &str) {
        self.property = predicate.to_string();
    }
}

/// One-to-many relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionDescriptor {
    pub identifier: String,
    pub rel: String,
    pub rev: String,
    /// Allowed child types as absolute URIs, in document order.
    pub type_names: Vec<String>,
    #[serde(flatten)]
    pub node: NodeInfo,
    pub config: ConfigMap,
}

impl CollectionDescriptor {
    pub fn new(identifier: &str, config: ConfigMap) -> Self {
        Self {
            identifier: identifier.to_string(),
            config,
            ..Self::default()
        }
    }
}

impl CollectionDefinition for CollectionDescriptor {
    fn set_rel(&mut self, rel: &str) {
        self.rel = rel.to_string();
    }

    fn set_rev(&mut self, rev: &str) {
        self.rev = rev.to_string();
    }

    fn add_type_name(&mut self, type_name: &str) {
        self.type_names.push(type_name.to_string());
    }
}

/// Plain node child without property or relation semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeDescriptor {
    pub identifier: String,
    #[serde(flatten)]
    pub node: NodeInfo,
    pub config: ConfigMap,
}

impl NodeDescriptor {
    pub fn new(identifier: &str, config: ConfigMap) -> Self {
        Self {
            identifier: identifier.to_string(),
            config,
            ..Self::default()
        }
    }
}
