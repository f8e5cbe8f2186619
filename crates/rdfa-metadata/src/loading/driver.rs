//! Entry point tying the locator, the parser and the builder together.

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;

use crate::model::namespace::Vocabulary;

use super::builder::build_type;
use super::catalog::scan_catalog;
use super::document::{DefinitionElement, DefinitionSource};
use super::error::LoadError;
use super::factory::{DescriptorFactory, RdfMapper};
use super::locator::DefinitionLocator;

// ---------------------------------------------------------------------------
// DriverOptions
// ---------------------------------------------------------------------------

/// Options controlling where and how definitions are found.
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Search path; earlier directories shadow later ones.
    pub directories: Vec<PathBuf>,
    pub extension: String,
    /// Separator between namespace segments of a type name.
    pub namespace_separator: String,
    /// Registered on a type when one of its children has no explicit
    /// predicate.
    pub default_vocabulary: Vocabulary,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            extension: "xml".to_string(),
            namespace_separator: "::".to_string(),
            default_vocabulary: Vocabulary::default(),
        }
    }
}

impl DriverOptions {
    pub fn new(directories: Vec<PathBuf>) -> Self {
        Self {
            directories,
            ..Self::default()
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    pub fn with_namespace_separator(mut self, separator: &str) -> Self {
        self.namespace_separator = separator.to_string();
        self
    }

    pub fn with_default_vocabulary(mut self, prefix: &str, uri: &str) -> Self {
        self.default_vocabulary = Vocabulary::new(prefix, uri);
        self
    }
}

// ---------------------------------------------------------------------------
// XmlDriver
// ---------------------------------------------------------------------------

/// Loads type descriptors from XML definition files.
///
/// Nothing is cached: every call reads and parses from disk again.
#[derive(Debug, Clone)]
pub struct XmlDriver {
    locator: DefinitionLocator,
    default_vocabulary: Vocabulary,
}

impl XmlDriver {
    pub fn new(options: DriverOptions) -> Self {
        Self {
            locator: DefinitionLocator::from_options(&options),
            default_vocabulary: options.default_vocabulary,
        }
    }

    pub fn locator(&self) -> &DefinitionLocator {
        &self.locator
    }

    /// Build the descriptor of `name` using `factory`.
    ///
    /// Fails with [`LoadError::TypeNotFound`] when no directory holds a
    /// definition for `name`.
    pub fn load_type<F: DescriptorFactory>(
        &self,
        name: &str,
        mapper: &dyn RdfMapper,
        factory: &F,
    ) -> Result<F::Type, LoadError> {
        let path = self
            .locator
            .locate(name)
            .ok_or_else(|| LoadError::TypeNotFound {
                name: name.to_string(),
                file_name: self.locator.file_name(name),
            })?;

        let source = DefinitionSource::read(&path)?;
        let document = source.parse()?;
        let root = DefinitionElement::root(&document);
        debug!(type_name = name, path = %path.display(), "building type descriptor");

        build_type(name, &root, mapper, factory, &self.default_vocabulary)
    }

    /// Map every declared RDF type (absolute URI) to its type name.
    pub fn all_names(&self) -> Result<IndexMap<String, String>, LoadError> {
        scan_catalog(&self.locator)
    }
}
