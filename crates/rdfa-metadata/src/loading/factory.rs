//! Construction of descriptor instances.

use tracing::trace;

use crate::model::definition::{ChildDefinition, ChildKind, TypeDefinition};
use crate::model::descriptor::{
    ChildDescriptor, CollectionDescriptor, ConfigMap, NodeDescriptor, PropertyDescriptor,
    TypeDescriptor,
};
use crate::model::vocabulary::element;

use super::document::{extract_config, DefinitionElement};
use super::error::LoadError;

/// Mapping layer between application classes and RDF types. Only passed
/// through to the factory.
pub trait RdfMapper {
    /// Canonical class name for a type name.
    fn canonical_name(&self, type_name: &str) -> String;
}

/// Mapper that reports type names unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityMapper;

impl RdfMapper for IdentityMapper {
    fn canonical_name(&self, type_name: &str) -> String {
        type_name.to_string()
    }
}

/// What the factory knows about the type being built when asked for a child.
#[derive(Clone, Copy)]
pub struct FactoryContext<'a> {
    pub type_name: &'a str,
    pub mapper: &'a dyn RdfMapper,
}

/// Creates the descriptors the builder fills in.
pub trait DescriptorFactory {
    type Type: TypeDefinition<Child = Self::Child>;
    type Child: ChildDefinition;

    fn create_type(
        &self,
        name: &str,
        mapper: &dyn RdfMapper,
        config: ConfigMap,
    ) -> Result<Self::Type, LoadError>;

    fn create_child(
        &self,
        kind: ChildKind,
        identifier: &str,
        definition: &DefinitionElement<'_, '_>,
        context: &FactoryContext<'_>,
    ) -> Result<Self::Child, LoadError>;
}

/// Factory producing [`TypeDescriptor`] graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFactory;

impl DescriptorFactory for StandardFactory {
    type Type = TypeDescriptor;
    type Child = ChildDescriptor;

    fn create_type(
        &self,
        name: &str,
        mapper: &dyn RdfMapper,
        config: ConfigMap,
    ) -> Result<TypeDescriptor, LoadError> {
        Ok(TypeDescriptor::new(name, &mapper.canonical_name(name), config))
    }

    fn create_child(
        &self,
        kind: ChildKind,
        identifier: &str,
        definition: &DefinitionElement<'_, '_>,
        context: &FactoryContext<'_>,
    ) -> Result<ChildDescriptor, LoadError> {
        trace!(type_name = context.type_name, identifier, ?kind, "creating child");
        let config = extract_config(definition, element::CONFIG);
        Ok(match kind {
            ChildKind::Property => {
                ChildDescriptor::Property(PropertyDescriptor::new(identifier, config))
            }
            ChildKind::Collection => {
                ChildDescriptor::Collection(CollectionDescriptor::new(identifier, config))
            }
            ChildKind::Node => ChildDescriptor::Node(NodeDescriptor::new(identifier, config)),
        })
    }
}
