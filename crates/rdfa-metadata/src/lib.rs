//! Load RDFa type-metadata definitions into type descriptor graphs.
//!
//! Each application type is described by one XML file naming its RDF type,
//! its properties and its collections. [`XmlDriver`] finds and parses those
//! files and builds descriptors through a [`DescriptorFactory`].
//!
//! - `model`: descriptor capabilities, standard descriptors, namespaces
//! - `loading`: locating, parsing and building definitions

pub mod loading;
pub mod model;

pub use loading::{
    DescriptorFactory, DriverOptions, IdentityMapper, LoadError, RdfMapper, StandardFactory,
    XmlDriver,
};
pub use model::descriptor::{
    ChildDescriptor, CollectionDescriptor, NodeDescriptor, PropertyDescriptor, TypeDescriptor,
};
