//! Descriptor building: walks one parsed definition and fills in the
//! descriptors handed out by a [`DescriptorFactory`].
//!
//! Only the immediate children of the root's `children` container are
//! built. A child that is itself a node gets its RDFa attributes, but any
//! `children` it contains are not walked.

use tracing::trace;

use crate::model::definition::{ChildDefinition, ChildKind, NodeDefinition, TypeDefinition};
use crate::model::namespace::{expand, parse_prefix_declaration, Vocabulary};
use crate::model::vocabulary::{attribute, element};

use super::document::{extract_config, DefinitionElement};
use super::error::LoadError;
use super::factory::{DescriptorFactory, FactoryContext, RdfMapper};

/// Outcome of resolving a `property`, `rel` or `rev` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub predicate: String,
    /// The identifier stood in for a missing attribute, so the default
    /// vocabulary has to be registered on the type.
    pub needs_default_vocabulary: bool,
}

/// Resolve `field_name` on `definition`, falling back to `identifier`.
///
/// The attribute value is returned raw; prefixes are expanded when the
/// descriptor is consumed.
pub fn resolve_field(
    definition: &DefinitionElement<'_, '_>,
    identifier: &str,
    field_name: &str,
) -> ResolvedField {
    match definition.attribute(field_name) {
        Some(value) => ResolvedField {
            predicate: value.to_string(),
            needs_default_vocabulary: false,
        },
        None => ResolvedField {
            predicate: identifier.to_string(),
            needs_default_vocabulary: true,
        },
    }
}

/// Apply `typeof`, `vocab` and `prefix` of `definition` to `node`.
///
/// `prefix` is kept as a plain attribute and its pair is also registered as
/// vocabulary.
pub fn apply_rdfa_attributes<N>(definition: &DefinitionElement<'_, '_>, node: &mut N)
where
    N: NodeDefinition + ?Sized,
{
    if let Some(rdf_type) = definition.attribute(attribute::TYPEOF) {
        node.set_rdf_type(rdf_type);
    }
    if let Some(vocab) = definition.attribute(attribute::VOCAB) {
        node.set_attribute(attribute::VOCAB, vocab);
    }
    if let Some(prefix) = definition.attribute(attribute::PREFIX) {
        node.set_attribute(attribute::PREFIX, prefix);
        if let Some((name, uri)) = parse_prefix_declaration(prefix) {
            node.set_vocabulary(name, uri);
        }
    }
}

/// Node-info parse shared by types and children: RDFa attributes plus the
/// `attribute` entries of `definition`.
pub fn parse_node_info<N>(definition: &DefinitionElement<'_, '_>, node: &mut N)
where
    N: NodeDefinition + ?Sized,
{
    apply_rdfa_attributes(definition, node);
    for (key, value) in extract_config(definition, element::ATTRIBUTE) {
        node.set_attribute(&key, &value);
    }
}

/// Build the type descriptor for the definition rooted at `root`.
pub fn build_type<F: DescriptorFactory>(
    name: &str,
    root: &DefinitionElement<'_, '_>,
    mapper: &dyn RdfMapper,
    factory: &F,
    default_vocabulary: &Vocabulary,
) -> Result<F::Type, LoadError> {
    let config = extract_config(root, element::CONFIG);
    let mut descriptor = factory.create_type(name, mapper, config)?;

    for rev in root.children_named(element::REV) {
        descriptor.add_rev(rev.text());
    }

    if descriptor.is_node() {
        parse_node_info(root, &mut descriptor);
    }

    for (prefix, uri) in root.namespaces() {
        descriptor.set_vocabulary(&prefix, &uri);
    }
    // Applied again so a `prefix=` pair wins over a conflicting xmlns declaration.
    apply_rdfa_attributes(root, &mut descriptor);

    let context = FactoryContext {
        type_name: name,
        mapper,
    };
    let mut needs_default_vocabulary = false;
    if let Some(children) = root.first_child(element::CHILDREN) {
        for child in children.child_elements() {
            let built = build_child(&child, factory, &context)?;
            needs_default_vocabulary |= built.needs_default_vocabulary;
            descriptor.set_child(&built.identifier, built.child);
        }
    }

    if needs_default_vocabulary {
        descriptor.set_vocabulary(&default_vocabulary.prefix, &default_vocabulary.uri);
    }

    Ok(descriptor)
}

struct BuiltChild<C> {
    identifier: String,
    child: C,
    needs_default_vocabulary: bool,
}

fn build_child<F: DescriptorFactory>(
    definition: &DefinitionElement<'_, '_>,
    factory: &F,
    context: &FactoryContext<'_>,
) -> Result<BuiltChild<F::Child>, LoadError> {
    let tag = definition.tag_name();
    let kind = ChildKind::from_tag(tag).ok_or_else(|| LoadError::UnknownChildKind {
        type_name: context.type_name.to_string(),
        tag: tag.to_string(),
    })?;
    let identifier = definition
        .attribute(attribute::IDENTIFIER)
        .ok_or_else(|| LoadError::MissingIdentifier {
            type_name: context.type_name.to_string(),
            tag: tag.to_string(),
        })?;

    let mut child = factory.create_child(kind, identifier, definition, context)?;
    let mut needs_default_vocabulary = false;

    if let Some(property) = child.as_property_mut() {
        let resolved = resolve_field(definition, identifier, attribute::PROPERTY);
        needs_default_vocabulary |= resolved.needs_default_vocabulary;
        property.set_property(&resolved.predicate);
    }

    if let Some(collection) = child.as_collection_mut() {
        let rel = resolve_field(definition, identifier, attribute::REL);
        let rev = resolve_field(definition, identifier, attribute::REV);
        needs_default_vocabulary |= rel.needs_default_vocabulary || rev.needs_default_vocabulary;
        collection.set_rel(&rel.predicate);
        collection.set_rev(&rev.predicate);

        let namespaces = definition.namespaces();
        for childtype in definition.children_named(element::CHILDTYPE) {
            collection.add_type_name(&expand(childtype.text(), &namespaces));
        }
    }

    if let Some(node) = child.as_node_mut() {
        for (prefix, uri) in definition.namespaces() {
            node.set_vocabulary(&prefix, &uri);
        }
        parse_node_info(definition, node);
    }

    trace!(type_name = context.type_name, identifier, ?kind, "child built");
    Ok(BuiltChild {
        identifier: identifier.to_string(),
        child,
        needs_default_vocabulary,
    })
}
