//! Catalog scan: RDF type URI -> type name for every definition file.

use indexmap::IndexMap;
use tracing::debug;

use crate::model::namespace::expand;
use crate::model::vocabulary::attribute;

use super::document::{DefinitionElement, DefinitionSource};
use super::error::LoadError;
use super::locator::DefinitionLocator;

/// Read the root `typeof` of every definition file reachable through
/// `locator` and map its expanded URI to the file's type name.
///
/// Only the root element is inspected; no descriptors are built. When two
/// files declare the same RDF type the one scanned last wins. Files without
/// `typeof` are skipped.
pub fn scan_catalog(locator: &DefinitionLocator) -> Result<IndexMap<String, String>, LoadError> {
    let mut names = IndexMap::new();
    for path in locator.definition_files()? {
        let source = DefinitionSource::read(&path)?;
        let document = source.parse()?;
        let root = DefinitionElement::root(&document);

        let Some(rdf_type) = root.attribute(attribute::TYPEOF) else {
            debug!(path = %path.display(), "definition without typeof skipped");
            continue;
        };
        let uri = expand(rdf_type, &root.namespaces());
        let type_name = locator.type_name(&path.to_string_lossy());

        if let Some(previous) = names.insert(uri.clone(), type_name.clone()) {
            debug!(
                %uri,
                %previous,
                current = %type_name,
                "RDF type declared twice, keeping the later definition"
            );
        }
    }
    Ok(names)
}
