//! Capabilities the descriptor builder relies on.
//!
//! The builder never constructs descriptors itself. A
//! [`DescriptorFactory`](crate::loading::factory::DescriptorFactory) hands it
//! values implementing these traits, and the builder only ever calls the
//! setters below.

use super::vocabulary::element;

/// Anything carrying RDFa node information: an RDF type, free-form
/// attributes and vocabulary prefixes.
pub trait NodeDefinition {
    /// Set the raw (unexpanded) `typeof` value.
    fn set_rdf_type(&mut self, rdf_type: &str);
    fn set_attribute(&mut self, key: &str, value: &str);
    fn set_vocabulary(&mut self, prefix: &str, uri: &str);
}

/// The root descriptor of one definition file.
pub trait TypeDefinition: NodeDefinition {
    type Child;

    fn add_rev(&mut self, rev: &str);

    /// Attach a child under `identifier`, replacing any earlier child with
    /// the same identifier.
    fn set_child(&mut self, identifier: &str, child: Self::Child);

    /// Whether the type takes `attribute` entries the way child nodes do.
    fn is_node(&self) -> bool {
        true
    }
}

/// A scalar RDF property.
pub trait PropertyDefinition {
    fn set_property(&mut self, predicate: &str);
}

/// A one-to-many RDF relation.
pub trait CollectionDefinition {
    fn set_rel(&mut self, rel: &str);
    fn set_rev(&mut self, rev: &str);
    /// Append an allowed child type (absolute URI). Duplicates are kept.
    fn add_type_name(&mut self, type_name: &str);
}

/// Capability queries over a child produced by the factory.
pub trait ChildDefinition {
    fn as_property_mut(&mut self) -> Option<&mut dyn PropertyDefinition> {
        None
    }

    fn as_collection_mut(&mut self) -> Option<&mut dyn CollectionDefinition> {
        None
    }

    fn as_node_mut(&mut self) -> Option<&mut dyn NodeDefinition> {
        None
    }
}

/// Kind of a child element, selected from its tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildKind {
    Property,
    Collection,
    Node,
}

impl ChildKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            element::PROPERTY => Some(ChildKind::Property),
            element::COLLECTION => Some(ChildKind::Collection),
            element::NODE => Some(ChildKind::Node),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ChildKind::Property => element::PROPERTY,
            ChildKind::Collection => element::COLLECTION,
            ChildKind::Node => element::NODE,
        }
    }
}
